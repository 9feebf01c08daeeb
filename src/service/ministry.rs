//! Ministry service for business logic.
//!
//! Ministries cut across the area hierarchy. The Bishop creates them; roster
//! and headcount writes are open to the Bishop and to the ministry's own
//! leader, which is how Ministry leaders reach their data despite having no
//! member-level scope.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::data::{member::MemberRepository, ministry::MinistryRepository, user::UserRepository};
use crate::error::{auth::AuthError, AppError};
use crate::model::ministry::{
    CreateMinistryParam, Ministry, MinistryAttendance, RecordMinistryAttendanceParam,
};
use crate::model::scope::Scope;

use entity::user::Role;

pub struct MinistryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MinistryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ministry.
    ///
    /// # Returns
    /// - `Ok(Ministry)` - The created ministry
    /// - `Err(AppError::BadRequest)` - Name taken, or the assignee is not a Ministry leader
    pub async fn create(&self, param: CreateMinistryParam) -> Result<Ministry, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        if ministry_repo.name_exists(&param.name).await? {
            return Err(AppError::BadRequest(format!(
                "Ministry name '{}' is already taken",
                param.name
            )));
        }

        if let Some(leader_id) = param.leader_id {
            self.check_ministry_leader_role(leader_id).await?;
        }

        let ministry = ministry_repo.create(param).await?;

        tracing::info!("Ministry {} created", ministry.id);

        Ok(ministry)
    }

    /// Gets all ministries, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Ministry>, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        Ok(ministry_repo.get_all().await?)
    }

    /// Gets one ministry.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ministry>, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        Ok(ministry_repo.get_by_id(id).await?)
    }

    /// Adds a member to a ministry roster.
    ///
    /// Roster writes ignore the area scope: a ministry draws its people from
    /// the whole congregation, so only the manage check and the member's
    /// existence matter.
    ///
    /// # Returns
    /// - `Ok(())` - Member added
    /// - `Err(AppError::NotFound)` - Ministry or member missing
    /// - `Err(AppError::BadRequest)` - Member already on the roster
    /// - `Err(AuthError::AccessDenied)` - Caller may not manage this ministry
    pub async fn add_member(
        &self,
        ministry_id: i32,
        member_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        let ministry_repo = MinistryRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        let ministry = self.require_managed_ministry(ministry_id, caller).await?;

        if member_repo.get_by_id(member_id, &Scope::All).await?.is_none() {
            return Err(AppError::NotFound(format!("Member {member_id} not found")));
        }

        if ministry_repo.member_exists(ministry.id, member_id).await? {
            return Err(AppError::BadRequest(format!(
                "Member {member_id} is already on the roster"
            )));
        }

        ministry_repo.add_member(ministry.id, member_id).await?;

        Ok(())
    }

    /// Removes a member from a ministry roster.
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(AppError::NotFound)` - Ministry missing, or member not on the roster
    /// - `Err(AuthError::AccessDenied)` - Caller may not manage this ministry
    pub async fn remove_member(
        &self,
        ministry_id: i32,
        member_id: i32,
        caller: &entity::user::Model,
    ) -> Result<(), AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        let ministry = self.require_managed_ministry(ministry_id, caller).await?;

        let removed = ministry_repo.remove_member(ministry.id, member_id).await?;
        if removed == 0 {
            return Err(AppError::NotFound(format!(
                "Member {member_id} is not on the roster"
            )));
        }

        Ok(())
    }

    /// Gets the member ids on a ministry roster.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Roster member ids (possibly empty)
    /// - `Err(AppError::NotFound)` - Ministry missing
    pub async fn get_roster(&self, ministry_id: i32) -> Result<Vec<i32>, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        if ministry_repo.get_by_id(ministry_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Ministry {ministry_id} not found"
            )));
        }

        Ok(ministry_repo.get_member_ids(ministry_id).await?)
    }

    /// Records a headcount tally for one service day.
    ///
    /// # Returns
    /// - `Ok(MinistryAttendance)` - The created tally
    /// - `Err(AppError::NotFound)` - Ministry missing
    /// - `Err(AppError::BadRequest)` - Negative headcount, or tally already recorded
    /// - `Err(AuthError::AccessDenied)` - Caller may not manage this ministry
    pub async fn record_attendance(
        &self,
        param: RecordMinistryAttendanceParam,
        caller: &entity::user::Model,
    ) -> Result<MinistryAttendance, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        self.require_managed_ministry(param.ministry_id, caller)
            .await?;

        if param.headcount < 0 {
            return Err(AppError::BadRequest(
                "Headcount must not be negative".to_string(),
            ));
        }

        if ministry_repo
            .attendance_exists(param.ministry_id, param.service_date)
            .await?
        {
            return Err(AppError::BadRequest(format!(
                "A tally for {} is already recorded",
                param.service_date
            )));
        }

        let attendance = ministry_repo.record_attendance(param).await?;

        Ok(attendance)
    }

    /// Gets a ministry's tallies in a date range, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<MinistryAttendance>)` - Tallies in range (possibly empty)
    /// - `Err(AppError::NotFound)` - Ministry missing
    pub async fn get_attendance_range(
        &self,
        ministry_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<MinistryAttendance>, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        if ministry_repo.get_by_id(ministry_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Ministry {ministry_id} not found"
            )));
        }

        Ok(ministry_repo
            .get_attendance_range(ministry_id, from, to)
            .await?)
    }

    /// Loads a ministry and errors unless the caller may manage it.
    ///
    /// A Bishop manages every ministry; everyone else manages only the
    /// ministry they lead.
    async fn require_managed_ministry(
        &self,
        ministry_id: i32,
        caller: &entity::user::Model,
    ) -> Result<Ministry, AppError> {
        let ministry_repo = MinistryRepository::new(self.db);

        let ministry = ministry_repo
            .get_by_id(ministry_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ministry {ministry_id} not found")))?;

        if caller.role != Role::Bishop && ministry.leader_id != Some(caller.id) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to manage ministry {ministry_id}"),
            )
            .into());
        }

        Ok(ministry)
    }

    /// Verifies that the given user exists and holds the Ministry_Leader role.
    async fn check_ministry_leader_role(&self, leader_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let leader = user_repo
            .find_by_id(leader_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("User {leader_id} does not exist")))?;

        if leader.role != Role::MinistryLeader {
            return Err(AppError::BadRequest(format!(
                "User {leader_id} is not a Ministry leader"
            )));
        }

        Ok(())
    }
}
