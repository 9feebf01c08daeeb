//! Request processing and authentication guards.
//!
//! [`auth`] provides the two halves of per-request authentication: the
//! [`auth::AuthSession`] extractor that turns a bearer token or cookie into
//! validated claims, and the [`auth::AuthGuard`] that re-reads the user row and
//! enforces role permissions.

pub mod auth;

#[cfg(test)]
mod test;
