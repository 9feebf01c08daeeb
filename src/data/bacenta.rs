use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::scope::scoped_leader_ids;
use crate::model::bacenta::{
    AddBacentaAttendanceParam, AddOfferingParam, BacentaAttendance, BacentaMeeting,
    BacentaMeetingDetail, BacentaOffering, CreateMeetingParam, MeetingRangeParam,
};
use crate::model::scope::Scope;

pub struct BacentaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BacentaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports a new meeting
    pub async fn create_meeting(&self, param: CreateMeetingParam) -> Result<BacentaMeeting, DbErr> {
        let entity = entity::bacenta_meeting::ActiveModel {
            leader_id: ActiveValue::Set(param.leader_id),
            meeting_date: ActiveValue::Set(param.meeting_date),
            venue: ActiveValue::Set(param.venue),
            topic: ActiveValue::Set(param.topic),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BacentaMeeting::from_entity(entity))
    }

    /// Checks if a leader already reported a meeting on a date
    pub async fn meeting_exists(
        &self,
        leader_id: i32,
        meeting_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::BacentaMeeting::find()
            .filter(entity::bacenta_meeting::Column::LeaderId.eq(leader_id))
            .filter(entity::bacenta_meeting::Column::MeetingDate.eq(meeting_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets scoped meetings in a date range, newest first
    pub async fn get_meetings(
        &self,
        range: MeetingRangeParam,
        scope: &Scope,
    ) -> Result<Vec<BacentaMeeting>, DbErr> {
        let mut query = entity::prelude::BacentaMeeting::find()
            .order_by_desc(entity::bacenta_meeting::Column::MeetingDate);

        if let Some(from) = range.from {
            query = query.filter(entity::bacenta_meeting::Column::MeetingDate.gte(from));
        }
        if let Some(to) = range.to {
            query = query.filter(entity::bacenta_meeting::Column::MeetingDate.lte(to));
        }

        if !scope.is_all() {
            let leader_ids = scoped_leader_ids(self.db, scope).await?;
            query = query.filter(entity::bacenta_meeting::Column::LeaderId.is_in(leader_ids));
        }

        let entities = query.all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(BacentaMeeting::from_entity)
            .collect())
    }

    /// Gets a meeting by ID
    pub async fn get_meeting_by_id(&self, id: i32) -> Result<Option<BacentaMeeting>, DbErr> {
        let entity = entity::prelude::BacentaMeeting::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BacentaMeeting::from_entity))
    }

    /// Gets a meeting together with its attendance list and offerings
    pub async fn get_meeting_detail(&self, id: i32) -> Result<Option<BacentaMeetingDetail>, DbErr> {
        let meeting = match self.get_meeting_by_id(id).await? {
            Some(meeting) => meeting,
            None => return Ok(None),
        };

        let attendance = entity::prelude::BacentaAttendance::find()
            .filter(entity::bacenta_attendance::Column::MeetingId.eq(id))
            .order_by_asc(entity::bacenta_attendance::Column::Id)
            .all(self.db)
            .await?;

        let offerings = entity::prelude::BacentaOffering::find()
            .filter(entity::bacenta_offering::Column::MeetingId.eq(id))
            .order_by_asc(entity::bacenta_offering::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(BacentaMeetingDetail {
            meeting,
            attendance: attendance
                .into_iter()
                .map(BacentaAttendance::from_entity)
                .collect(),
            offerings: offerings
                .into_iter()
                .map(BacentaOffering::from_entity)
                .collect(),
        }))
    }

    /// Adds one attendee to a meeting
    pub async fn add_attendance(
        &self,
        param: AddBacentaAttendanceParam,
    ) -> Result<BacentaAttendance, DbErr> {
        let entity = entity::bacenta_attendance::ActiveModel {
            meeting_id: ActiveValue::Set(param.meeting_id),
            member_id: ActiveValue::Set(param.member_id),
            first_timer: ActiveValue::Set(param.first_timer),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BacentaAttendance::from_entity(entity))
    }

    /// Checks if a member is already on a meeting's attendance list
    pub async fn attendance_exists(&self, meeting_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::BacentaAttendance::find()
            .filter(entity::bacenta_attendance::Column::MeetingId.eq(meeting_id))
            .filter(entity::bacenta_attendance::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds one offering to a meeting
    pub async fn add_offering(&self, param: AddOfferingParam) -> Result<BacentaOffering, DbErr> {
        let entity = entity::bacenta_offering::ActiveModel {
            meeting_id: ActiveValue::Set(param.meeting_id),
            amount_minor: ActiveValue::Set(param.amount_minor),
            note: ActiveValue::Set(param.note),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BacentaOffering::from_entity(entity))
    }

    /// Gets every offering belonging to the given meetings
    pub async fn get_offerings_for_meetings(
        &self,
        meeting_ids: Vec<i32>,
    ) -> Result<Vec<BacentaOffering>, DbErr> {
        if meeting_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::BacentaOffering::find()
            .filter(entity::bacenta_offering::Column::MeetingId.is_in(meeting_ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(BacentaOffering::from_entity)
            .collect())
    }

    /// Counts the scoped meetings
    pub async fn count_meetings_in_scope(&self, scope: &Scope) -> Result<u64, DbErr> {
        let mut query = entity::prelude::BacentaMeeting::find();

        if !scope.is_all() {
            let leader_ids = scoped_leader_ids(self.db, scope).await?;
            query = query.filter(entity::bacenta_meeting::Column::LeaderId.is_in(leader_ids));
        }

        query.count(self.db).await
    }
}
