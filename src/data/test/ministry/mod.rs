use crate::data::ministry::MinistryRepository;
use crate::model::ministry::RecordMinistryAttendanceParam;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod record_attendance;
mod roster;
