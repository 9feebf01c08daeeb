//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Queries that list or aggregate congregation data take a [`crate::model::scope::Scope`]
//! and translate it into filter conditions, so role visibility is enforced in one place.

pub mod area;
pub mod attendance;
pub mod bacenta;
pub mod call_log;
pub mod member;
pub mod ministry;
pub mod notification;
pub mod region;
pub mod scope;
pub mod sync;
pub mod user;

#[cfg(test)]
mod test;
