pub use super::area::Entity as Area;
pub use super::attendance::Entity as Attendance;
pub use super::bacenta_attendance::Entity as BacentaAttendance;
pub use super::bacenta_meeting::Entity as BacentaMeeting;
pub use super::bacenta_offering::Entity as BacentaOffering;
pub use super::call_log::Entity as CallLog;
pub use super::member::Entity as Member;
pub use super::ministry::Entity as Ministry;
pub use super::ministry_attendance::Entity as MinistryAttendance;
pub use super::ministry_member::Entity as MinistryMember;
pub use super::notification::Entity as Notification;
pub use super::region::Entity as Region;
pub use super::sync_log::Entity as SyncLog;
pub use super::user::Entity as User;
