pub use sea_orm_migration::prelude::*;

mod m20250302_000001_create_user_table;
mod m20250302_000002_create_region_table;
mod m20250302_000003_create_area_table;
mod m20250302_000004_create_member_table;
mod m20250309_000005_create_attendance_table;
mod m20250309_000006_create_call_log_table;
mod m20250316_000007_create_bacenta_meeting_table;
mod m20250316_000008_create_bacenta_attendance_table;
mod m20250316_000009_create_bacenta_offering_table;
mod m20250323_000010_create_ministry_table;
mod m20250323_000011_create_ministry_member_table;
mod m20250323_000012_create_ministry_attendance_table;
mod m20250330_000013_create_notification_table;
mod m20250330_000014_create_sync_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250302_000001_create_user_table::Migration),
            Box::new(m20250302_000002_create_region_table::Migration),
            Box::new(m20250302_000003_create_area_table::Migration),
            Box::new(m20250302_000004_create_member_table::Migration),
            Box::new(m20250309_000005_create_attendance_table::Migration),
            Box::new(m20250309_000006_create_call_log_table::Migration),
            Box::new(m20250316_000007_create_bacenta_meeting_table::Migration),
            Box::new(m20250316_000008_create_bacenta_attendance_table::Migration),
            Box::new(m20250316_000009_create_bacenta_offering_table::Migration),
            Box::new(m20250323_000010_create_ministry_table::Migration),
            Box::new(m20250323_000011_create_ministry_member_table::Migration),
            Box::new(m20250323_000012_create_ministry_attendance_table::Migration),
            Box::new(m20250330_000013_create_notification_table::Migration),
            Box::new(m20250330_000014_create_sync_log_table::Migration),
        ]
    }
}
