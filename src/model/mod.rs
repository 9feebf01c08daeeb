//! Domain models and operation parameter types.
//!
//! This module contains the domain model layer of the application. Domain models
//! represent business entities independently of both the database schema (entity
//! models) and the API wire format (DTOs). Repositories convert entities into
//! domain models at the data boundary, and controllers convert domain models into
//! DTOs at the HTTP boundary.
//!
//! Parameter types (`*Param`) carry validated operation inputs from controllers
//! through services to repositories.

pub mod area;
pub mod attendance;
pub mod bacenta;
pub mod call_log;
pub mod member;
pub mod ministry;
pub mod notification;
pub mod region;
pub mod report;
pub mod scope;
pub mod sync;
pub mod user;
