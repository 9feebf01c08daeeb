use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub residence: Option<String>,
    pub area_id: i32,
    pub leader_id: Option<i32>,
    pub state: String,
    pub photo_url: Option<String>,
    pub joined_on: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedMembersDto {
    pub members: Vec<MemberDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMemberDto {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub residence: Option<String>,
    pub area_id: i32,
    pub leader_id: Option<i32>,
    pub joined_on: Option<NaiveDate>, // defaults to today
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMemberDto {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub residence: Option<String>,
    pub area_id: i32,
    pub leader_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMemberStateDto {
    pub state: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkTransferDto {
    pub leader_id: i32,
    pub member_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TransferErrorDto {
    pub member_id: i32,
    pub error: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkTransferResultDto {
    pub transferred: u64,
    pub errors: Vec<TransferErrorDto>,
}
