//! `/coffees` resource.
//!
//! | verb   | path           | status                      |
//! |--------|----------------|-----------------------------|
//! | GET    | /coffees       | 200                         |
//! | GET    | /coffees/{id}  | 200, 404 when absent        |
//! | POST   | /coffees       | 201                         |
//! | PUT    | /coffees/{id}  | 200 when present, 201 else  |
//! | DELETE | /coffees/{id}  | 204 whether present or not  |

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::coffee::Coffee;
use service::errors::ServiceError;
use tracing::debug;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/coffees", tag = "coffees",
    responses(
        (status = 200, description = "All coffees", body = [crate::openapi::CoffeeDoc]),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Coffee>>, JsonApiError> {
    let all = state.coffees.list().await?;
    debug!(count = all.len(), "list coffees");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/coffees/{id}", tag = "coffees",
    params(("id" = String, Path, description = "Coffee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CoffeeDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Coffee>, JsonApiError> {
    match state.coffees.get(&id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(ServiceError::not_found("coffee", &id).into()),
    }
}

#[utoipa::path(
    post, path = "/coffees", tag = "coffees",
    request_body = crate::openapi::CoffeeDoc,
    responses(
        (status = 201, description = "Created; a blank id is replaced by a generated one", body = crate::openapi::CoffeeDoc),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(coffee): Json<Coffee>,
) -> Result<(StatusCode, Json<Coffee>), JsonApiError> {
    let saved = state.coffees.create(coffee).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put, path = "/coffees/{id}", tag = "coffees",
    params(("id" = String, Path, description = "Coffee ID; overrides any id in the body")),
    request_body = crate::openapi::CoffeeDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CoffeeDoc),
        (status = 201, description = "Created", body = crate::openapi::CoffeeDoc),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn put(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(coffee): Json<Coffee>,
) -> Result<(StatusCode, Json<Coffee>), JsonApiError> {
    let outcome = state.coffees.put(&id, coffee).await?;
    let status = if outcome.is_created() { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(outcome.into_inner())))
}

#[utoipa::path(
    delete, path = "/coffees/{id}", tag = "coffees",
    params(("id" = String, Path, description = "Coffee ID")),
    responses(
        (status = 204, description = "Deleted, or was never there"),
        (status = 500, description = "Storage Failure")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.coffees.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
