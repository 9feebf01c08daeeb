//! Area domain models and parameters.
//!
//! Areas sit below regions in the hierarchy, each optionally overseen by an
//! Area Pastor and containing many members.

use chrono::{DateTime, Utc};

use crate::dto::area::AreaDto;

/// An area within a region.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    /// Database id of the area.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Region this area belongs to.
    pub region_id: i32,
    /// Area Pastor overseeing this area, if assigned.
    pub overseer_id: Option<i32>,
    /// When the area was created.
    pub created_at: DateTime<Utc>,
}

impl Area {
    /// Converts the area domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `AreaDto` - The converted area DTO
    pub fn into_dto(self) -> AreaDto {
        AreaDto {
            id: self.id,
            name: self.name,
            region_id: self.region_id,
            overseer_id: self.overseer_id,
        }
    }

    /// Converts an entity model to an area domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Area` - The converted area domain model
    pub fn from_entity(entity: entity::area::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            region_id: entity.region_id,
            overseer_id: entity.overseer_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating an area.
#[derive(Debug, Clone)]
pub struct CreateAreaParam {
    /// Display name.
    pub name: String,
    /// Region the area belongs to.
    pub region_id: i32,
    /// Overseer to assign, validated to hold the Area_Pastor role.
    pub overseer_id: Option<i32>,
}

/// Parameters for updating an area.
///
/// `None` fields are left unchanged. `overseer_id` uses a double Option:
/// the outer layer means "change this field", the inner value is the new
/// assignment (with `None` clearing it).
#[derive(Debug, Clone, Default)]
pub struct UpdateAreaParam {
    /// New display name.
    pub name: Option<String>,
    /// New overseer assignment.
    pub overseer_id: Option<Option<i32>>,
}
