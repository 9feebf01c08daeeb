//! Member domain models and parameters.
//!
//! Members are the congregation itself. They never log in; every piece of
//! member data is captured and maintained by their leaders.

use chrono::{DateTime, NaiveDate, Utc};
use entity::member::MemberState;

use crate::dto::member::{BulkTransferResultDto, MemberDto, PaginatedMembersDto, TransferErrorDto};

/// A congregation member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Database id of the member.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number, if recorded.
    pub phone: Option<String>,
    /// Free-form home location text.
    pub residence: Option<String>,
    /// Area the member belongs to.
    pub area_id: i32,
    /// Bacenta leader shepherding this member, if assigned.
    pub leader_id: Option<i32>,
    /// Engagement state (Sheep, Goat or Deer).
    pub state: MemberState,
    /// URL of the stored photo, if uploaded.
    pub photo_url: Option<String>,
    /// Date the member first joined.
    pub joined_on: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Converts the member domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `MemberDto` - The converted member DTO
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            residence: self.residence,
            area_id: self.area_id,
            leader_id: self.leader_id,
            state: state_to_string(&self.state),
            photo_url: self.photo_url,
            joined_on: self.joined_on,
        }
    }

    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Member` - The converted member domain model
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone: entity.phone,
            residence: entity.residence,
            area_id: entity.area_id,
            leader_id: entity.leader_id,
            state: entity.state,
            photo_url: entity.photo_url,
            joined_on: entity.joined_on,
            created_at: entity.created_at,
        }
    }
}

/// Wire name of a member state, matching the database string values.
pub fn state_to_string(state: &MemberState) -> String {
    match state {
        MemberState::Sheep => "Sheep",
        MemberState::Goat => "Goat",
        MemberState::Deer => "Deer",
    }
    .to_string()
}

/// Parses a wire member state back into the enum.
///
/// # Returns
/// - `Some(MemberState)` - Recognized state name
/// - `None` - Unknown state string
pub fn state_from_string(value: &str) -> Option<MemberState> {
    match value {
        "Sheep" => Some(MemberState::Sheep),
        "Goat" => Some(MemberState::Goat),
        "Deer" => Some(MemberState::Deer),
        _ => None,
    }
}

/// Parameters for creating a member.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Free-form home location text.
    pub residence: Option<String>,
    /// Area the member belongs to; must be inside the caller's scope.
    pub area_id: i32,
    /// Shepherding leader; Bacenta leaders always create under themselves.
    pub leader_id: Option<i32>,
    /// Initial engagement state.
    pub state: MemberState,
    /// Date the member first joined.
    pub joined_on: NaiveDate,
}

/// Parameters for updating a member.
///
/// `None` fields are left unchanged. The nullable fields use a double Option:
/// the outer layer means "change this field", the inner value is the new
/// assignment (with `None` clearing it).
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberParam {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New contact phone number.
    pub phone: Option<Option<String>>,
    /// New residence text.
    pub residence: Option<Option<String>>,
    /// New area; must be inside the caller's scope.
    pub area_id: Option<i32>,
    /// New shepherding leader assignment.
    pub leader_id: Option<Option<i32>>,
    /// New engagement state.
    pub state: Option<MemberState>,
}

/// Filters for paginated member queries.
#[derive(Debug, Clone)]
pub struct MemberFilter {
    /// Restrict to one engagement state.
    pub state: Option<MemberState>,
    /// Restrict to one area (additionally to the caller's scope).
    pub area_id: Option<i32>,
    /// Case-insensitive substring match over first and last name.
    pub search: Option<String>,
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of members to return per page.
    pub per_page: u64,
}

/// Paginated collection of members with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMembers {
    /// Members for this page.
    pub members: Vec<Member>,
    /// Total number of members across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of members per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedMembers {
    /// Converts the paginated members domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `PaginatedMembersDto` - The converted collection
    pub fn into_dto(self) -> PaginatedMembersDto {
        let members = self.members.into_iter().map(|m| m.into_dto()).collect();

        PaginatedMembersDto {
            members,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for reassigning members to another leader in bulk.
#[derive(Debug, Clone)]
pub struct BulkTransferParam {
    /// Leader receiving the members.
    pub leader_id: i32,
    /// Members to reassign.
    pub member_ids: Vec<i32>,
}

/// Per-item failure from a bulk transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferError {
    /// Member the failure applies to.
    pub member_id: i32,
    /// Human-readable reason.
    pub error: String,
}

/// Outcome of a bulk transfer: how many moved, and which items failed.
///
/// Failures never abort the batch; each bad item is collected here while the
/// rest proceed.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkTransferResult {
    /// Number of members successfully reassigned.
    pub transferred: u64,
    /// Per-member failures.
    pub errors: Vec<TransferError>,
}

impl BulkTransferResult {
    /// Converts the transfer outcome to a DTO for API responses.
    ///
    /// # Returns
    /// - `BulkTransferResultDto` - The converted outcome
    pub fn into_dto(self) -> BulkTransferResultDto {
        BulkTransferResultDto {
            transferred: self.transferred,
            errors: self
                .errors
                .into_iter()
                .map(|e| TransferErrorDto {
                    member_id: e.member_id,
                    error: e.error,
                })
                .collect(),
        }
    }
}
