use crate::data::notification::NotificationRepository;
use entity::prelude::Notification;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user;
mod mark_read;
