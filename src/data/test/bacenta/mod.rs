use crate::data::bacenta::BacentaRepository;
use crate::model::bacenta::{AddBacentaAttendanceParam, AddOfferingParam, MeetingRangeParam};
use crate::model::scope::Scope;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_meeting_detail;
mod get_meetings;
