//! Request/response wire types.
//!
//! DTOs are the serde-facing edge of the API. Controllers deserialize request
//! DTOs into parameter types and serialize domain models back into response
//! DTOs; nothing below the controller layer touches these types.

pub mod api;
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
