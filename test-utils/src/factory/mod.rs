//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let region = factory::region::create_region(&db).await?;
//!
//!     // Create with all dependencies
//!     let (leader, region, area, member) =
//!         factory::helpers::create_member_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use entity::user::Role;
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .username("kwame")
//!     .role(Role::Governor)
//!     .active(false)
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let member = factory::create_member_with_leader(&db, area.id, leader.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create leader accounts
//! - `region` - Create region entities
//! - `area` - Create area entities
//! - `member` - Create member entities
//! - `attendance` - Create Sunday attendance rows
//! - `call_log` - Create call log entries
//! - `bacenta_meeting` - Create Bacenta meeting reports
//! - `ministry` - Create ministry entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod area;
pub mod attendance;
pub mod bacenta_meeting;
pub mod call_log;
pub mod helpers;
pub mod member;
pub mod ministry;
pub mod region;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use area::create_area;
pub use attendance::create_attendance;
pub use bacenta_meeting::create_meeting;
pub use call_log::create_call_log;
pub use member::{create_member, create_member_with_leader};
pub use ministry::create_ministry;
pub use region::create_region;
pub use user::{create_user, create_user_with_role};
