//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use entity::user::Role;

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete member hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as Bacenta leader)
/// 2. Region
/// 3. Area (in the region)
/// 4. Member (in the area, shepherded by the leader)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((leader, region, area, member))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::region::Model,
        entity::area::Model,
        entity::member::Model,
    ),
    DbErr,
> {
    let leader = crate::factory::user::create_user_with_role(db, Role::BacentaLeader).await?;
    let region = crate::factory::region::create_region(db).await?;
    let area = crate::factory::area::create_area(db, region.id).await?;
    let member =
        crate::factory::member::create_member_with_leader(db, area.id, leader.id).await?;

    Ok((leader, region, area, member))
}

/// Creates a member with all dependencies using a specific user as leader.
///
/// This creates the necessary region and area structures, then creates a
/// member shepherded by the provided user. Useful when you need to test
/// member operations for a specific leader.
///
/// # Arguments
/// - `db` - Database connection
/// - `leader` - User entity to use as the member's Bacenta leader
///
/// # Returns
/// - `Ok((region, area, member))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_for_leader(
    db: &DatabaseConnection,
    leader: &entity::user::Model,
) -> Result<
    (
        entity::region::Model,
        entity::area::Model,
        entity::member::Model,
    ),
    DbErr,
> {
    let region = crate::factory::region::create_region(db).await?;
    let area = crate::factory::area::create_area(db, region.id).await?;
    let member =
        crate::factory::member::create_member_with_leader(db, area.id, leader.id).await?;

    Ok((region, area, member))
}
