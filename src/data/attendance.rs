use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::scope::scoped_member_ids;
use crate::model::attendance::{Attendance, RecordAttendanceParam};
use crate::model::scope::Scope;

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records one member's attendance for one Sunday
    pub async fn record(
        &self,
        param: RecordAttendanceParam,
        recorded_by: i32,
    ) -> Result<Attendance, DbErr> {
        let entity = entity::attendance::ActiveModel {
            member_id: ActiveValue::Set(param.member_id),
            service_date: ActiveValue::Set(param.service_date),
            present: ActiveValue::Set(param.present),
            recorded_by: ActiveValue::Set(recorded_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Attendance::from_entity(entity))
    }

    /// Checks if a member already has a record for a service date
    pub async fn exists_for_member_on(
        &self,
        member_id: i32,
        service_date: NaiveDate,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::MemberId.eq(member_id))
            .filter(entity::attendance::Column::ServiceDate.eq(service_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all records for one Sunday whose members fall in the scope
    pub async fn get_by_service_date(
        &self,
        service_date: NaiveDate,
        scope: &Scope,
    ) -> Result<Vec<Attendance>, DbErr> {
        let mut query = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ServiceDate.eq(service_date))
            .order_by_asc(entity::attendance::Column::MemberId);

        if !scope.is_all() {
            let member_ids = scoped_member_ids(self.db, scope).await?;
            query = query.filter(entity::attendance::Column::MemberId.is_in(member_ids));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Attendance::from_entity).collect())
    }

    /// Gets all scoped records in a date range, inclusive on both ends
    pub async fn get_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        scope: &Scope,
    ) -> Result<Vec<Attendance>, DbErr> {
        let mut query = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ServiceDate.gte(from))
            .filter(entity::attendance::Column::ServiceDate.lte(to))
            .order_by_asc(entity::attendance::Column::ServiceDate);

        if !scope.is_all() {
            let member_ids = scoped_member_ids(self.db, scope).await?;
            query = query.filter(entity::attendance::Column::MemberId.is_in(member_ids));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Attendance::from_entity).collect())
    }

    /// Counts the scoped attendance records
    pub async fn count_in_scope(&self, scope: &Scope) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Attendance::find();

        if !scope.is_all() {
            let member_ids = scoped_member_ids(self.db, scope).await?;
            query = query.filter(entity::attendance::Column::MemberId.is_in(member_ids));
        }

        query.count(self.db).await
    }
}
