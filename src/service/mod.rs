//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation rules and uniqueness pre-checks
//! - **Scope Enforcement**: Verifying writes stay inside the caller's visibility scope
//! - **Orchestration**: Coordinating multiple repository calls (transfers, reports, broadcasts)
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

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
pub mod upload;
pub mod user;
