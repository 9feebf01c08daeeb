use crate::data::scope::ScopeResolver;
use crate::model::scope::Scope;
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod resolve;
