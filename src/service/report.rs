//! Reporting service: in-process aggregation over scoped rows.
//!
//! Reports fetch the scoped rows and aggregate them in memory; the working
//! set is one congregation, not an unbounded table. Nothing here is persisted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::{
    area::AreaRepository, attendance::AttendanceRepository, bacenta::BacentaRepository,
    member::MemberRepository,
};
use crate::error::AppError;
use crate::model::bacenta::MeetingRangeParam;
use crate::model::member::state_to_string;
use crate::model::report::{
    percentage, AreaCount, AttendanceReport, MembershipReport, OfferingBucket, OfferingReport,
    StateCount, SundayBucket,
};
use crate::model::scope::Scope;

use entity::member::MemberState;

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Buckets scoped Sunday attendance per service date over a range.
    ///
    /// Dates with no records produce no bucket; buckets come back oldest
    /// first with a present percentage per Sunday and over the whole range.
    pub async fn attendance_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        scope: &Scope,
    ) -> Result<AttendanceReport, AppError> {
        check_range(from, to)?;

        let attendance_repo = AttendanceRepository::new(self.db);

        let records = attendance_repo.get_range(from, to, scope).await?;

        let mut buckets: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
        for record in records {
            let entry = buckets.entry(record.service_date).or_insert((0, 0));
            if record.present {
                entry.0 += 1;
            } else {
                entry.1 += 1;
            }
        }

        let mut total_present = 0u64;
        let mut total_absent = 0u64;
        let sundays = buckets
            .into_iter()
            .map(|(date, (present, absent))| {
                total_present += present;
                total_absent += absent;
                SundayBucket {
                    date,
                    present,
                    absent,
                    total: present + absent,
                    percentage: percentage(present, present + absent),
                }
            })
            .collect();

        Ok(AttendanceReport {
            sundays,
            total_present,
            total_absent,
            overall_percentage: percentage(total_present, total_present + total_absent),
        })
    }

    /// Sums scoped Bacenta offerings per meeting date over a range.
    ///
    /// A date's meeting count covers only meetings that reported at least one
    /// offering; amounts stay in integer minor units so sums are exact.
    pub async fn offerings_report(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        scope: &Scope,
    ) -> Result<OfferingReport, AppError> {
        check_range(from, to)?;

        let bacenta_repo = BacentaRepository::new(self.db);

        let meetings = bacenta_repo
            .get_meetings(
                MeetingRangeParam {
                    from: Some(from),
                    to: Some(to),
                },
                scope,
            )
            .await?;

        let meeting_dates: BTreeMap<i32, NaiveDate> = meetings
            .iter()
            .map(|m| (m.id, m.meeting_date))
            .collect();

        let offerings = bacenta_repo
            .get_offerings_for_meetings(meeting_dates.keys().copied().collect())
            .await?;

        // date -> (sum of amounts, meetings that reported an offering)
        let mut buckets: BTreeMap<NaiveDate, (i64, Vec<i32>)> = BTreeMap::new();
        for offering in offerings {
            let Some(date) = meeting_dates.get(&offering.meeting_id) else {
                continue;
            };
            let entry = buckets.entry(*date).or_insert((0, Vec::new()));
            entry.0 += offering.amount_minor;
            if !entry.1.contains(&offering.meeting_id) {
                entry.1.push(offering.meeting_id);
            }
        }

        let mut grand_total_minor = 0i64;
        let dates = buckets
            .into_iter()
            .map(|(date, (total_minor, meetings))| {
                grand_total_minor += total_minor;
                OfferingBucket {
                    date,
                    total_minor,
                    meeting_count: meetings.len() as u64,
                }
            })
            .collect();

        Ok(OfferingReport {
            dates,
            grand_total_minor,
        })
    }

    /// Breaks the scoped membership down by engagement state and by area.
    ///
    /// Every state appears even at zero count so the breakdown is stable;
    /// the area rows cover the areas visible in the scope, which is empty
    /// for Bacenta leaders (their flock is not area-bounded).
    pub async fn membership_report(&self, scope: &Scope) -> Result<MembershipReport, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let area_repo = AreaRepository::new(self.db);

        let members = member_repo.get_all_in_scope(scope).await?;
        let total = members.len() as u64;

        let states = [MemberState::Sheep, MemberState::Goat, MemberState::Deer]
            .into_iter()
            .map(|state| {
                let count = members.iter().filter(|m| m.state == state).count() as u64;
                StateCount {
                    state: state_to_string(&state),
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        let areas = area_repo
            .get_all(scope)
            .await?
            .into_iter()
            .map(|area| {
                let count = members.iter().filter(|m| m.area_id == area.id).count() as u64;
                AreaCount {
                    area_id: area.id,
                    area_name: area.name,
                    count,
                }
            })
            .collect();

        Ok(MembershipReport {
            total,
            states,
            areas,
        })
    }
}

/// Rejects a reversed date range before any rows are fetched.
fn check_range(from: NaiveDate, to: NaiveDate) -> Result<(), AppError> {
    if from > to {
        return Err(AppError::BadRequest(format!(
            "Range start {from} is after its end {to}"
        )));
    }

    Ok(())
}
