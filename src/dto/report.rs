use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SundayBucketDto {
    pub date: NaiveDate,
    pub present: u64,
    pub absent: u64,
    pub total: u64,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceReportDto {
    pub sundays: Vec<SundayBucketDto>,
    pub total_present: u64,
    pub total_absent: u64,
    pub overall_percentage: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OfferingBucketDto {
    pub date: NaiveDate,
    pub total_minor: i64,
    pub meeting_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OfferingReportDto {
    pub dates: Vec<OfferingBucketDto>,
    pub grand_total_minor: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StateCountDto {
    pub state: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AreaCountDto {
    pub area_id: i32,
    pub area_name: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MembershipReportDto {
    pub total: u64,
    pub states: Vec<StateCountDto>,
    pub areas: Vec<AreaCountDto>,
}
