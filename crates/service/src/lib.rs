//! Service layer for coffee records.
//! - `coffee::repository` defines the persistence contract.
//! - `coffee::{memory, file, seaorm}` are its interchangeable backends.
//! - `coffee::service` holds id generation, upsert status and seeding.

pub mod errors;
pub mod storage;
pub mod coffee;
#[cfg(test)]
pub mod test_support;
