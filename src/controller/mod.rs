//! Axum request handlers.
//!
//! Controllers are thin: they check access via the auth guard, convert DTOs to
//! parameter types, call one service method and convert the result back. All
//! business rules live in the service layer.

use serde::Deserialize;

pub mod area;
pub mod attendance;
pub mod auth;
pub mod bacenta;
pub mod call_log;
pub mod member;
pub mod ministry;
pub mod notification;
pub mod region;
pub mod report;
pub mod sync;
pub mod user;

/// Query parameters shared by every paginated list endpoint.
#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}
