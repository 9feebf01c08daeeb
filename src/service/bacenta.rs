//! Bacenta meeting service for business logic.
//!
//! A leader reports at most one meeting per date. Meeting visibility follows
//! the reporting leader: a meeting is visible exactly when its leader is
//! inside the caller's scope. Offerings are recorded in minor currency units
//! and must be positive.

use sea_orm::DatabaseConnection;

use crate::data::{bacenta::BacentaRepository, member::MemberRepository, user::UserRepository};
use crate::error::AppError;
use crate::model::bacenta::{
    AddBacentaAttendanceParam, AddOfferingParam, BacentaAttendance, BacentaMeeting,
    BacentaMeetingDetail, BacentaOffering, CreateMeetingParam, MeetingRangeParam,
};
use crate::model::scope::Scope;
use crate::service::user::user_in_scope;

pub struct BacentaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BacentaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports a new meeting held by the authenticated leader.
    ///
    /// # Returns
    /// - `Ok(BacentaMeeting)` - The created report
    /// - `Err(AppError::BadRequest)` - A meeting for that leader and date already exists
    pub async fn create_meeting(
        &self,
        param: CreateMeetingParam,
    ) -> Result<BacentaMeeting, AppError> {
        let bacenta_repo = BacentaRepository::new(self.db);

        if bacenta_repo
            .meeting_exists(param.leader_id, param.meeting_date)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "A meeting on {} is already reported",
                param.meeting_date
            )));
        }

        let meeting = bacenta_repo.create_meeting(param).await?;

        tracing::info!(
            "Meeting {} reported by leader {}",
            meeting.id,
            meeting.leader_id
        );

        Ok(meeting)
    }

    /// Gets scoped meetings in a date range, newest first.
    pub async fn get_meetings(
        &self,
        range: MeetingRangeParam,
        scope: &Scope,
    ) -> Result<Vec<BacentaMeeting>, AppError> {
        let bacenta_repo = BacentaRepository::new(self.db);

        Ok(bacenta_repo.get_meetings(range, scope).await?)
    }

    /// Gets a meeting with its attendance list and offerings, if visible.
    ///
    /// # Returns
    /// - `Ok(Some(BacentaMeetingDetail))` - Meeting found and visible
    /// - `Ok(None)` - No such meeting, or its leader is outside the scope
    pub async fn get_meeting_detail(
        &self,
        id: i32,
        scope: &Scope,
    ) -> Result<Option<BacentaMeetingDetail>, AppError> {
        let bacenta_repo = BacentaRepository::new(self.db);

        let Some(detail) = bacenta_repo.get_meeting_detail(id).await? else {
            return Ok(None);
        };

        if !self.leader_visible(detail.meeting.leader_id, scope).await? {
            return Ok(None);
        }

        Ok(Some(detail))
    }

    /// Adds one attendee to a visible meeting.
    ///
    /// # Returns
    /// - `Ok(BacentaAttendance)` - The created row
    /// - `Err(AppError::NotFound)` - Meeting or member missing or outside the scope
    /// - `Err(AppError::BadRequest)` - Member already on the attendance list
    pub async fn add_attendance(
        &self,
        param: AddBacentaAttendanceParam,
        scope: &Scope,
    ) -> Result<BacentaAttendance, AppError> {
        let bacenta_repo = BacentaRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        self.require_visible_meeting(param.meeting_id, scope).await?;

        if member_repo.get_by_id(param.member_id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                param.member_id
            )));
        }

        if bacenta_repo
            .attendance_exists(param.meeting_id, param.member_id)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "Member {} is already on the attendance list",
                param.member_id
            )));
        }

        let attendance = bacenta_repo.add_attendance(param).await?;

        Ok(attendance)
    }

    /// Adds one offering to a visible meeting.
    ///
    /// # Returns
    /// - `Ok(BacentaOffering)` - The created row
    /// - `Err(AppError::NotFound)` - Meeting missing or outside the scope
    /// - `Err(AppError::BadRequest)` - Amount not positive
    pub async fn add_offering(
        &self,
        param: AddOfferingParam,
        scope: &Scope,
    ) -> Result<BacentaOffering, AppError> {
        let bacenta_repo = BacentaRepository::new(self.db);

        self.require_visible_meeting(param.meeting_id, scope).await?;

        if param.amount_minor <= 0 {
            return Err(AppError::BadRequest(
                "Offering amount must be positive".to_string(),
            ));
        }

        let offering = bacenta_repo.add_offering(param).await?;

        Ok(offering)
    }

    /// Errors with `NotFound` unless the meeting exists and is visible.
    async fn require_visible_meeting(&self, meeting_id: i32, scope: &Scope) -> Result<(), AppError> {
        let bacenta_repo = BacentaRepository::new(self.db);

        let meeting = bacenta_repo
            .get_meeting_by_id(meeting_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting {meeting_id} not found")))?;

        if !self.leader_visible(meeting.leader_id, scope).await? {
            return Err(AppError::NotFound(format!("Meeting {meeting_id} not found")));
        }

        Ok(())
    }

    /// Whether the given leader falls inside the scope.
    async fn leader_visible(&self, leader_id: i32, scope: &Scope) -> Result<bool, AppError> {
        if scope.is_all() {
            return Ok(true);
        }

        let user_repo = UserRepository::new(self.db);
        let leader = user_repo.find_by_id(leader_id).await?;

        Ok(leader.is_some_and(|l| user_in_scope(&l, scope)))
    }
}
