//! Region domain models and parameters.
//!
//! Regions are the top level of the congregation hierarchy, each optionally
//! overseen by a Governor and containing many areas.

use chrono::{DateTime, Utc};

use crate::dto::region::RegionDto;

/// A region of the congregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Database id of the region.
    pub id: i32,
    /// Unique display name.
    pub name: String,
    /// Governor overseeing this region, if assigned.
    pub governor_id: Option<i32>,
    /// When the region was created.
    pub created_at: DateTime<Utc>,
}

impl Region {
    /// Converts the region domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `RegionDto` - The converted region DTO
    pub fn into_dto(self) -> RegionDto {
        RegionDto {
            id: self.id,
            name: self.name,
            governor_id: self.governor_id,
        }
    }

    /// Converts an entity model to a region domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Region` - The converted region domain model
    pub fn from_entity(entity: entity::region::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            governor_id: entity.governor_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a region.
#[derive(Debug, Clone)]
pub struct CreateRegionParam {
    /// Unique display name.
    pub name: String,
    /// Governor to assign, validated to hold the Governor role.
    pub governor_id: Option<i32>,
}

/// Parameters for updating a region.
///
/// `None` fields are left unchanged. `governor_id` uses a double Option:
/// the outer layer means "change this field", the inner value is the new
/// assignment (with `None` clearing it).
#[derive(Debug, Clone, Default)]
pub struct UpdateRegionParam {
    /// New display name.
    pub name: Option<String>,
    /// New governor assignment.
    pub governor_id: Option<Option<i32>>,
}
