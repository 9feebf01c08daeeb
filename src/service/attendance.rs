//! Sunday attendance service for business logic.
//!
//! Attendance is append-only: one row per member per service date, and a
//! duplicate submission is rejected rather than overwritten. Bulk submissions
//! collect per-member failures instead of aborting the batch.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::{attendance::AttendanceRepository, member::MemberRepository};
use crate::error::AppError;
use crate::model::attendance::{
    Attendance, AttendanceError, BulkAttendanceParam, BulkAttendanceResult, RecordAttendanceParam,
};
use crate::model::scope::Scope;

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one member's attendance for one Sunday.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The created record
    /// - `Err(AppError::NotFound)` - Member missing or outside the scope
    /// - `Err(AppError::BadRequest)` - Attendance already recorded for that date
    pub async fn record(
        &self,
        param: RecordAttendanceParam,
        recorded_by: i32,
        scope: &Scope,
    ) -> Result<Attendance, AppError> {
        let attendance_repo = AttendanceRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        if member_repo.get_by_id(param.member_id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                param.member_id
            )));
        }

        if attendance_repo
            .exists_for_member_on(param.member_id, param.service_date)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Attendance for member {} on {} is already recorded",
                param.member_id, param.service_date
            )));
        }

        let attendance = attendance_repo.record(param, recorded_by).await?;

        Ok(attendance)
    }

    /// Records a whole Sunday's attendance in one call.
    ///
    /// Each row is handled independently; unknown, out-of-scope and
    /// already-recorded members are collected in the error list while the
    /// rest of the batch proceeds.
    pub async fn record_bulk(
        &self,
        param: BulkAttendanceParam,
        recorded_by: i32,
        scope: &Scope,
    ) -> Result<BulkAttendanceResult, AppError> {
        let attendance_repo = AttendanceRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        let mut recorded = 0u64;
        let mut errors = Vec::new();

        for record in param.records {
            if member_repo.get_by_id(record.member_id, scope).await?.is_none() {
                errors.push(AttendanceError {
                    member_id: record.member_id,
                    error: format!("Member {} not found", record.member_id),
                });
                continue;
            }

            if attendance_repo
                .exists_for_member_on(record.member_id, param.service_date)
                .await?
            {
                errors.push(AttendanceError {
                    member_id: record.member_id,
                    error: format!(
                        "Attendance for member {} on {} is already recorded",
                        record.member_id, param.service_date
                    ),
                });
                continue;
            }

            attendance_repo
                .record(
                    RecordAttendanceParam {
                        member_id: record.member_id,
                        service_date: param.service_date,
                        present: record.present,
                    },
                    recorded_by,
                )
                .await?;
            recorded += 1;
        }

        tracing::info!(
            "Recorded {} attendance rows for {} ({} failures)",
            recorded,
            param.service_date,
            errors.len()
        );

        Ok(BulkAttendanceResult { recorded, errors })
    }

    /// Gets the scoped attendance records for one Sunday.
    pub async fn get_by_service_date(
        &self,
        service_date: NaiveDate,
        scope: &Scope,
    ) -> Result<Vec<Attendance>, AppError> {
        let attendance_repo = AttendanceRepository::new(self.db);

        Ok(attendance_repo
            .get_by_service_date(service_date, scope)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::BulkAttendanceRecord;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a bulk submission with one unknown member keeps the valid
    /// rows and names the bad one in the error list.
    ///
    /// Expected: one row recorded and persisted, one error for the unknown id
    #[tokio::test]
    async fn bulk_records_valid_rows_and_reports_unknown_member() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_care_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, _region, _area, member) =
            factory::helpers::create_member_with_dependencies(db).await?;
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();

        let service = AttendanceService::new(db);
        let result = service
            .record_bulk(
                BulkAttendanceParam {
                    service_date: sunday,
                    records: vec![
                        BulkAttendanceRecord {
                            member_id: member.id,
                            present: true,
                        },
                        BulkAttendanceRecord {
                            member_id: 9999,
                            present: true,
                        },
                    ],
                },
                leader.id,
                &Scope::All,
            )
            .await?;

        assert_eq!(result.recorded, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].member_id, 9999);
        assert!(result.errors[0].error.contains("not found"));

        let repository = AttendanceRepository::new(db);
        assert!(repository.exists_for_member_on(member.id, sunday).await?);

        Ok(())
    }

    /// Tests that an already-recorded member fails inside a batch without
    /// stopping the other rows.
    ///
    /// Expected: the fresh member recorded, the duplicate reported
    #[tokio::test]
    async fn bulk_reports_duplicate_without_aborting_batch() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_care_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, _region, area, recorded_member) =
            factory::helpers::create_member_with_dependencies(db).await?;
        let fresh_member =
            factory::member::create_member_with_leader(db, area.id, leader.id).await?;
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        factory::attendance::AttendanceFactory::new(db, recorded_member.id, leader.id)
            .service_date(sunday)
            .build()
            .await?;

        let service = AttendanceService::new(db);
        let result = service
            .record_bulk(
                BulkAttendanceParam {
                    service_date: sunday,
                    records: vec![
                        BulkAttendanceRecord {
                            member_id: recorded_member.id,
                            present: true,
                        },
                        BulkAttendanceRecord {
                            member_id: fresh_member.id,
                            present: false,
                        },
                    ],
                },
                leader.id,
                &Scope::All,
            )
            .await?;

        assert_eq!(result.recorded, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].member_id, recorded_member.id);
        assert!(result.errors[0].error.contains("already recorded"));

        Ok(())
    }
}
