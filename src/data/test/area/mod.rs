use crate::data::area::AreaRepository;
use crate::model::area::UpdateAreaParam;
use crate::model::scope::Scope;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
