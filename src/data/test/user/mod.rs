use crate::data::user::UserRepository;
use crate::model::scope::Scope;
use crate::model::user::{CreateUserParam, GetAllUsersParam, UpdateUserParam};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bishop_exists;
mod create;
mod get_all_paginated;
mod update;
mod update_password;
