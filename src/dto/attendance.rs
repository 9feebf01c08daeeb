use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub member_id: i32,
    pub service_date: NaiveDate,
    pub present: bool,
    pub recorded_by: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecordAttendanceDto {
    pub member_id: i32,
    pub service_date: NaiveDate,
    pub present: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkAttendanceRecordDto {
    pub member_id: i32,
    pub present: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkAttendanceDto {
    pub service_date: NaiveDate,
    pub records: Vec<BulkAttendanceRecordDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceErrorDto {
    pub member_id: i32,
    pub error: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkAttendanceResultDto {
    pub recorded: u64,
    pub errors: Vec<AttendanceErrorDto>,
}
