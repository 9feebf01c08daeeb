//! Report domain models.
//!
//! Reports are computed in-process over scoped query results; nothing here is
//! persisted. Percentages are rounded to one decimal place.

use chrono::NaiveDate;

use crate::dto::report::{
    AreaCountDto, AttendanceReportDto, MembershipReportDto, OfferingBucketDto, OfferingReportDto,
    StateCountDto, SundayBucketDto,
};

/// Attendance figures for one Sunday.
#[derive(Debug, Clone, PartialEq)]
pub struct SundayBucket {
    /// The Sunday the figures cover.
    pub date: NaiveDate,
    /// Members recorded present.
    pub present: u64,
    /// Members recorded absent.
    pub absent: u64,
    /// Total records for the day.
    pub total: u64,
    /// Present share of total, one decimal place.
    pub percentage: f64,
}

/// Attendance report over a date range, bucketed per Sunday.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceReport {
    /// Per-Sunday figures, oldest first.
    pub sundays: Vec<SundayBucket>,
    /// Present records across the whole range.
    pub total_present: u64,
    /// Absent records across the whole range.
    pub total_absent: u64,
    /// Present share across the whole range, one decimal place.
    pub overall_percentage: f64,
}

impl AttendanceReport {
    /// Converts the report to a DTO for API responses.
    ///
    /// # Returns
    /// - `AttendanceReportDto` - The converted report
    pub fn into_dto(self) -> AttendanceReportDto {
        AttendanceReportDto {
            sundays: self
                .sundays
                .into_iter()
                .map(|b| SundayBucketDto {
                    date: b.date,
                    present: b.present,
                    absent: b.absent,
                    total: b.total,
                    percentage: b.percentage,
                })
                .collect(),
            total_present: self.total_present,
            total_absent: self.total_absent,
            overall_percentage: self.overall_percentage,
        }
    }
}

/// Offering totals for one meeting date.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingBucket {
    /// Date the meetings were held.
    pub date: NaiveDate,
    /// Sum of offerings in minor units.
    pub total_minor: i64,
    /// Number of meetings reporting offerings that day.
    pub meeting_count: u64,
}

/// Offering report over a date range, bucketed per meeting date.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingReport {
    /// Per-date totals, oldest first.
    pub dates: Vec<OfferingBucket>,
    /// Sum of all offerings in the range, minor units.
    pub grand_total_minor: i64,
}

impl OfferingReport {
    /// Converts the report to a DTO for API responses.
    ///
    /// # Returns
    /// - `OfferingReportDto` - The converted report
    pub fn into_dto(self) -> OfferingReportDto {
        OfferingReportDto {
            dates: self
                .dates
                .into_iter()
                .map(|b| OfferingBucketDto {
                    date: b.date,
                    total_minor: b.total_minor,
                    meeting_count: b.meeting_count,
                })
                .collect(),
            grand_total_minor: self.grand_total_minor,
        }
    }
}

/// Member count for one engagement state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateCount {
    /// Wire name of the state.
    pub state: String,
    /// Members in that state.
    pub count: u64,
    /// Share of total, one decimal place.
    pub percentage: f64,
}

/// Member count for one area.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaCount {
    /// Area id.
    pub area_id: i32,
    /// Area display name.
    pub area_name: String,
    /// Members in that area.
    pub count: u64,
}

/// Membership breakdown over the caller's scope.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipReport {
    /// Total members in scope.
    pub total: u64,
    /// Per-state counts and percentages.
    pub states: Vec<StateCount>,
    /// Per-area counts.
    pub areas: Vec<AreaCount>,
}

impl MembershipReport {
    /// Converts the report to a DTO for API responses.
    ///
    /// # Returns
    /// - `MembershipReportDto` - The converted report
    pub fn into_dto(self) -> MembershipReportDto {
        MembershipReportDto {
            total: self.total,
            states: self
                .states
                .into_iter()
                .map(|s| StateCountDto {
                    state: s.state,
                    count: s.count,
                    percentage: s.percentage,
                })
                .collect(),
            areas: self
                .areas
                .into_iter()
                .map(|a| AreaCountDto {
                    area_id: a.area_id,
                    area_name: a.area_name,
                    count: a.count,
                })
                .collect(),
        }
    }
}

/// Rounds a ratio to a percentage with one decimal place.
///
/// Returns 0.0 when the denominator is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    ((part as f64 / whole as f64) * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(1, 2), 50.0);
        assert_eq!(percentage(3, 4), 75.0);
    }

    #[test]
    fn percentage_of_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn percentage_of_everything_is_hundred() {
        assert_eq!(percentage(7, 7), 100.0);
    }
}
