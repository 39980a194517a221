//! Storage abstractions for service layer
//!
//! Contains reusable file-backed stores that persist small maps as JSON.

pub mod json_map_store;
