//! Scope resolution and scope-to-query translation.
//!
//! [`ScopeResolver`] turns an authenticated user into a [`Scope`] with at most
//! two queries. The condition helpers below translate a resolved scope into
//! SeaORM filter conditions; every repository that lists congregation data
//! goes through them.

use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::model::scope::Scope;
use entity::user::Role;

pub struct ScopeResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScopeResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the visibility scope for an authenticated user.
    ///
    /// # Arguments
    /// - `user` - The authenticated user's entity model
    ///
    /// # Returns
    /// - `Ok(Scope)` - The resolved scope (possibly an empty `Areas` list)
    /// - `Err(DbErr)` - Database error while reading the hierarchy
    pub async fn resolve(&self, user: &entity::user::Model) -> Result<Scope, DbErr> {
        match user.role {
            Role::Bishop => Ok(Scope::All),
            Role::Governor => {
                let region_ids: Vec<i32> = entity::prelude::Region::find()
                    .select_only()
                    .column(entity::region::Column::Id)
                    .filter(entity::region::Column::GovernorId.eq(user.id))
                    .into_tuple()
                    .all(self.db)
                    .await?;

                let area_ids: Vec<i32> = entity::prelude::Area::find()
                    .select_only()
                    .column(entity::area::Column::Id)
                    .filter(entity::area::Column::RegionId.is_in(region_ids))
                    .into_tuple()
                    .all(self.db)
                    .await?;

                Ok(Scope::Areas(area_ids))
            }
            Role::AreaPastor => {
                let area_ids: Vec<i32> = entity::prelude::Area::find()
                    .select_only()
                    .column(entity::area::Column::Id)
                    .filter(entity::area::Column::OverseerId.eq(user.id))
                    .into_tuple()
                    .all(self.db)
                    .await?;

                Ok(Scope::Areas(area_ids))
            }
            Role::BacentaLeader => Ok(Scope::Leader(user.id)),
            Role::MinistryLeader => Ok(Scope::Nothing),
        }
    }
}

/// Filter condition over `member` rows for a scope.
pub fn member_condition(scope: &Scope) -> Condition {
    match scope {
        Scope::All => Condition::all(),
        Scope::Areas(ids) => {
            Condition::all().add(entity::member::Column::AreaId.is_in(ids.iter().copied()))
        }
        Scope::Leader(id) => Condition::all().add(entity::member::Column::LeaderId.eq(*id)),
        Scope::Nothing => Condition::all().add(Expr::value(false)),
    }
}

/// Filter condition over `user` rows for a scope.
///
/// Leaders outside area scopes only ever see their own row.
pub fn user_condition(scope: &Scope) -> Condition {
    match scope {
        Scope::All => Condition::all(),
        Scope::Areas(ids) => {
            Condition::all().add(entity::user::Column::AreaId.is_in(ids.iter().copied()))
        }
        Scope::Leader(id) => Condition::all().add(entity::user::Column::Id.eq(*id)),
        Scope::Nothing => Condition::all().add(Expr::value(false)),
    }
}

/// Filter condition over `area` rows for a scope.
pub fn area_condition(scope: &Scope) -> Condition {
    match scope {
        Scope::All => Condition::all(),
        Scope::Areas(ids) => {
            Condition::all().add(entity::area::Column::Id.is_in(ids.iter().copied()))
        }
        Scope::Leader(_) | Scope::Nothing => Condition::all().add(Expr::value(false)),
    }
}

/// Ids of every member visible in a scope.
///
/// Used by repositories whose tables reference members rather than areas
/// (attendance, call logs), which filter with `member_id IS IN` instead of a
/// join.
pub async fn scoped_member_ids(db: &DatabaseConnection, scope: &Scope) -> Result<Vec<i32>, DbErr> {
    entity::prelude::Member::find()
        .select_only()
        .column(entity::member::Column::Id)
        .filter(member_condition(scope))
        .into_tuple()
        .all(db)
        .await
}

/// Ids of every leader visible in a scope.
///
/// Used by the bacenta repository, whose meetings hang off leaders rather
/// than members.
pub async fn scoped_leader_ids(db: &DatabaseConnection, scope: &Scope) -> Result<Vec<i32>, DbErr> {
    entity::prelude::User::find()
        .select_only()
        .column(entity::user::Column::Id)
        .filter(user_condition(scope))
        .into_tuple()
        .all(db)
        .await
}
