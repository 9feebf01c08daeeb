use crate::data::sync::{CreateSyncLogParam, SyncLogRepository};
use entity::prelude::SyncLog;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
