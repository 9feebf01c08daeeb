use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::ministry::{
    CreateMinistryParam, Ministry, MinistryAttendance, RecordMinistryAttendanceParam,
};

pub struct MinistryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MinistryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new ministry
    pub async fn create(&self, param: CreateMinistryParam) -> Result<Ministry, DbErr> {
        let entity = entity::ministry::ActiveModel {
            name: ActiveValue::Set(param.name),
            leader_id: ActiveValue::Set(param.leader_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ministry::from_entity(entity))
    }

    /// Checks if a ministry name is already taken
    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Ministry::find()
            .filter(entity::ministry::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all ministries ordered by name
    pub async fn get_all(&self) -> Result<Vec<Ministry>, DbErr> {
        let entities = entity::prelude::Ministry::find()
            .order_by_asc(entity::ministry::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ministry::from_entity).collect())
    }

    /// Gets a ministry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ministry>, DbErr> {
        let entity = entity::prelude::Ministry::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Ministry::from_entity))
    }

    /// Adds a member to a ministry roster
    pub async fn add_member(&self, ministry_id: i32, member_id: i32) -> Result<(), DbErr> {
        entity::ministry_member::ActiveModel {
            ministry_id: ActiveValue::Set(ministry_id),
            member_id: ActiveValue::Set(member_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Checks if a member is already on a ministry roster
    pub async fn member_exists(&self, ministry_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::MinistryMember::find()
            .filter(entity::ministry_member::Column::MinistryId.eq(ministry_id))
            .filter(entity::ministry_member::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes a member from a ministry roster, returning the rows removed
    pub async fn remove_member(&self, ministry_id: i32, member_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::MinistryMember::delete_many()
            .filter(entity::ministry_member::Column::MinistryId.eq(ministry_id))
            .filter(entity::ministry_member::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the member ids on a ministry roster
    pub async fn get_member_ids(&self, ministry_id: i32) -> Result<Vec<i32>, DbErr> {
        use sea_orm::QuerySelect;

        entity::prelude::MinistryMember::find()
            .select_only()
            .column(entity::ministry_member::Column::MemberId)
            .filter(entity::ministry_member::Column::MinistryId.eq(ministry_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Records a headcount tally
    pub async fn record_attendance(
        &self,
        param: RecordMinistryAttendanceParam,
    ) -> Result<MinistryAttendance, DbErr> {
        let entity = entity::ministry_attendance::ActiveModel {
            ministry_id: ActiveValue::Set(param.ministry_id),
            service_date: ActiveValue::Set(param.service_date),
            headcount: ActiveValue::Set(param.headcount),
            recorded_by: ActiveValue::Set(param.recorded_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MinistryAttendance::from_entity(entity))
    }

    /// Checks if a ministry already has a tally for a service date
    pub async fn attendance_exists(
        &self,
        ministry_id: i32,
        service_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::MinistryAttendance::find()
            .filter(entity::ministry_attendance::Column::MinistryId.eq(ministry_id))
            .filter(entity::ministry_attendance::Column::ServiceDate.eq(service_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a ministry's tallies in a date range, newest first
    pub async fn get_attendance_range(
        &self,
        ministry_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<MinistryAttendance>, DbErr> {
        let mut query = entity::prelude::MinistryAttendance::find()
            .filter(entity::ministry_attendance::Column::MinistryId.eq(ministry_id))
            .order_by_desc(entity::ministry_attendance::Column::ServiceDate);

        if let Some(from) = from {
            query = query.filter(entity::ministry_attendance::Column::ServiceDate.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::ministry_attendance::Column::ServiceDate.lte(to));
        }

        let entities = query.all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(MinistryAttendance::from_entity)
            .collect())
    }
}
