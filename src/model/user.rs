//! User (leader) domain models and parameters.
//!
//! Leaders are the people who log into the system: Bishops, Governors, Area
//! Pastors, Bacenta leaders and ministry leaders. Congregation members do not
//! log in and live in [`crate::model::member`] instead.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::dto::user::{PaginatedUsersDto, UserDto};

/// A leader account without its credential material.
///
/// The password hash never leaves the data layer; this model carries everything
/// else the API exposes about a leader.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database id of the account.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Contact phone number, if recorded.
    pub phone: Option<String>,
    /// Supervisory role in the hierarchy.
    pub role: Role,
    /// Area the leader is attached to, if any.
    pub area_id: Option<i32>,
    /// URL of the stored profile photo, if uploaded.
    pub photo_url: Option<String>,
    /// Whether the account can sign in.
    pub active: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            full_name: self.full_name,
            phone: self.phone,
            role: role_to_string(&self.role),
            area_id: self.area_id,
            photo_url: self.photo_url,
            active: self.active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// Drops the password hash; everything else carries over unchanged.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            full_name: entity.full_name,
            phone: entity.phone,
            role: entity.role,
            area_id: entity.area_id,
            photo_url: entity.photo_url,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Wire name of a role, matching the database string values.
pub fn role_to_string(role: &Role) -> String {
    match role {
        Role::Bishop => "Bishop",
        Role::Governor => "Governor",
        Role::AreaPastor => "Area_Pastor",
        Role::BacentaLeader => "Bacenta_Leader",
        Role::MinistryLeader => "Ministry_Leader",
    }
    .to_string()
}

/// Parses a wire role name back into the enum.
///
/// # Returns
/// - `Some(Role)` - Recognized role name
/// - `None` - Unknown role string
pub fn role_from_string(value: &str) -> Option<Role> {
    match value {
        "Bishop" => Some(Role::Bishop),
        "Governor" => Some(Role::Governor),
        "Area_Pastor" => Some(Role::AreaPastor),
        "Bacenta_Leader" => Some(Role::BacentaLeader),
        "Ministry_Leader" => Some(Role::MinistryLeader),
        _ => None,
    }
}

/// Parameters for creating a leader account.
///
/// When `password` is `None` the service generates a temporary password and
/// returns it once in the creation response.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Unique login name.
    pub username: String,
    /// Plaintext password; hashed before storage. `None` generates one.
    pub password: Option<String>,
    /// Display name.
    pub full_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Supervisory role for the new account.
    pub role: Role,
    /// Area to attach the leader to.
    pub area_id: Option<i32>,
}

/// Parameters for updating a leader account.
///
/// `None` fields are left unchanged. `area_id` and `phone` use a double
/// Option: the outer layer means "change this field", the inner value is the
/// new assignment (with `None` clearing it).
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    /// New display name.
    pub full_name: Option<String>,
    /// New contact phone number.
    pub phone: Option<Option<String>>,
    /// New supervisory role.
    pub role: Option<Role>,
    /// New area attachment.
    pub area_id: Option<Option<i32>>,
    /// New active flag.
    pub active: Option<bool>,
}

/// Parameters for paginated leader queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Paginated collection of leaders with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `PaginatedUsersDto` - The converted collection
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
