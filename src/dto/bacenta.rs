use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BacentaMeetingDto {
    pub id: i32,
    pub leader_id: i32,
    pub meeting_date: NaiveDate,
    pub venue: Option<String>,
    pub topic: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BacentaAttendanceDto {
    pub id: i32,
    pub member_id: i32,
    pub first_timer: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BacentaOfferingDto {
    pub id: i32,
    pub amount_minor: i64,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BacentaMeetingDetailDto {
    pub meeting: BacentaMeetingDto,
    pub attendance: Vec<BacentaAttendanceDto>,
    pub offerings: Vec<BacentaOfferingDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMeetingDto {
    pub meeting_date: NaiveDate,
    pub venue: Option<String>,
    pub topic: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddBacentaAttendanceDto {
    pub member_id: i32,
    pub first_timer: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddOfferingDto {
    pub amount_minor: i64, // smallest currency unit, e.g. pesewas
    pub note: Option<String>,
}
