mod area;
mod attendance;
mod bacenta;
mod member;
mod ministry;
mod notification;
mod scope;
mod sync_log;
mod user;
