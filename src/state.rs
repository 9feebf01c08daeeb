//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT configuration for signing and validating tokens
//! - Upload directory for stored photos

use sea_orm::DatabaseConnection;
use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtConfig` and `PathBuf` are small owned values
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// JWT signing configuration.
    ///
    /// Holds the HMAC secret and token lifetime used when issuing tokens at
    /// login and validating them on every authenticated request.
    pub jwt: JwtConfig,

    /// Directory where uploaded photos are stored.
    ///
    /// Created at startup if missing; also served statically under `/uploads`.
    pub upload_dir: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - JWT signing configuration
    /// - `upload_dir` - Directory for uploaded photos
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtConfig, upload_dir: PathBuf) -> Self {
        Self {
            db,
            jwt,
            upload_dir,
        }
    }
}
