use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A coffee record. Doubles as the JSON wire type: `{"id": "...", "name": "..."}`.
///
/// Missing fields in a request body deserialize as empty strings, so a body
/// without an `id` is indistinguishable from one with `"id": ""`.
#[derive(Clone, Debug, PartialEq, Eq, Default, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coffee")]
#[serde(default)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Coffee = Model;

impl Model {
    /// A new record with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: generate_id(), name: name.into() }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    /// Whether the id is empty or whitespace only.
    pub fn has_blank_id(&self) -> bool {
        self.id.trim().is_empty()
    }
}

/// Random UUID v4 in its hyphenated string form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
