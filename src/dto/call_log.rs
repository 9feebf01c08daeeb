use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallLogDto {
    pub id: i32,
    pub member_id: i32,
    pub caller_id: i32,
    pub outcome: String,
    pub notes: Option<String>,
    pub called_on: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LogCallDto {
    pub outcome: String,
    pub notes: Option<String>,
    pub called_on: Option<NaiveDate>, // defaults to today
}
