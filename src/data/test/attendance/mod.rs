use crate::data::attendance::AttendanceRepository;
use crate::model::attendance::RecordAttendanceParam;
use crate::model::scope::Scope;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_service_date;
mod record;
