use crate::data::member::MemberRepository;
use crate::model::member::{CreateMemberParam, MemberFilter, UpdateMemberParam};
use crate::model::scope::Scope;
use chrono::NaiveDate;
use entity::member::MemberState;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod get_filtered;
mod update;
mod update_leader;
