//! SeaORM entity models for the flockbase schema.
//!
//! One module per table. Active enums (`user::Role`, `member::MemberState`,
//! `call_log::CallOutcome`) live next to the entity that owns them and are
//! stored as strings so the values stay readable in the database.

pub mod prelude;

pub mod area;
pub mod attendance;
pub mod bacenta_attendance;
pub mod bacenta_meeting;
pub mod bacenta_offering;
pub mod call_log;
pub mod member;
pub mod ministry;
pub mod ministry_attendance;
pub mod ministry_member;
pub mod notification;
pub mod region;
pub mod sync_log;
pub mod user;
