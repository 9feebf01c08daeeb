use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MinistryDto {
    pub id: i32,
    pub name: String,
    pub leader_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMinistryDto {
    pub name: String,
    pub leader_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddMinistryMemberDto {
    pub member_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MinistryAttendanceDto {
    pub id: i32,
    pub ministry_id: i32,
    pub service_date: NaiveDate,
    pub headcount: i32,
    pub recorded_by: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecordMinistryAttendanceDto {
    pub service_date: NaiveDate,
    pub headcount: i32,
}
