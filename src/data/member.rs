//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for managing congregation member
//! records. Every read goes through the caller's [`Scope`]; a member outside
//! the scope behaves exactly like a member that does not exist.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::data::scope::member_condition;
use crate::model::member::{CreateMemberParam, Member, MemberFilter, UpdateMemberParam};
use crate::model::scope::Scope;
use entity::member::MemberState;

/// Repository providing database operations for congregation members.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member record.
    ///
    /// # Arguments
    /// - `param` - Member fields; scope validation happens in the service layer
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            phone: ActiveValue::Set(param.phone),
            residence: ActiveValue::Set(param.residence),
            area_id: ActiveValue::Set(param.area_id),
            leader_id: ActiveValue::Set(param.leader_id),
            state: ActiveValue::Set(param.state),
            photo_url: ActiveValue::Set(None),
            joined_on: ActiveValue::Set(param.joined_on),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Gets a member by id if the scope covers them.
    ///
    /// # Arguments
    /// - `id` - Database id of the member
    /// - `scope` - Caller's visibility scope
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found and visible
    /// - `Ok(None)` - No such member, or outside the scope
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32, scope: &Scope) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id)
            .filter(member_condition(scope))
            .one(self.db)
            .await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Gets members matching a filter inside a scope, with pagination.
    ///
    /// Ordered by last then first name. The state, area and search filters
    /// narrow the scope, never widen it; the search term matches substrings
    /// of either name, case-insensitively.
    ///
    /// # Arguments
    /// - `filter` - Optional state/area/search narrowing plus page settings
    /// - `scope` - Caller's visibility scope
    ///
    /// # Returns
    /// - `Ok((members, total))` - Page of members and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_filtered(
        &self,
        filter: MemberFilter,
        scope: &Scope,
    ) -> Result<(Vec<Member>, u64), DbErr> {
        let mut condition = member_condition(scope);
        if let Some(state) = filter.state {
            condition = condition.add(entity::member::Column::State.eq(state));
        }
        if let Some(area_id) = filter.area_id {
            condition = condition.add(entity::member::Column::AreaId.eq(area_id));
        }
        if let Some(search) = filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::member::Column::FirstName.contains(&search))
                    .add(entity::member::Column::LastName.contains(&search)),
            );
        }

        let paginator = entity::prelude::Member::find()
            .filter(condition)
            .order_by_asc(entity::member::Column::LastName)
            .order_by_asc(entity::member::Column::FirstName)
            .paginate(self.db, filter.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page).await?;
        let members = entities.into_iter().map(Member::from_entity).collect();

        Ok((members, total))
    }

    /// Updates a member record.
    ///
    /// `None` fields in the parameter are left unchanged; the double-Option
    /// fields distinguish "leave alone" from "clear".
    ///
    /// # Arguments
    /// - `id` - Database id of the member
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(DbErr)` - Member not found or database error during update
    pub async fn update(&self, id: i32, param: UpdateMemberParam) -> Result<Member, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Member with id {id} not found"
            )))?;

        let mut active_model: entity::member::ActiveModel = entity.into();
        if let Some(first_name) = param.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(residence) = param.residence {
            active_model.residence = ActiveValue::Set(residence);
        }
        if let Some(area_id) = param.area_id {
            active_model.area_id = ActiveValue::Set(area_id);
        }
        if let Some(leader_id) = param.leader_id {
            active_model.leader_id = ActiveValue::Set(leader_id);
        }
        if let Some(state) = param.state {
            active_model.state = ActiveValue::Set(state);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Member::from_entity(entity))
    }

    /// Changes a member's engagement state.
    ///
    /// # Arguments
    /// - `id` - Database id of the member
    /// - `state` - New engagement state
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(DbErr)` - Member not found or database error during update
    pub async fn update_state(&self, id: i32, state: MemberState) -> Result<Member, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Member with id {id} not found"
            )))?;

        let mut active_model: entity::member::ActiveModel = entity.into();
        active_model.state = ActiveValue::Set(state);

        let entity = active_model.update(self.db).await?;

        Ok(Member::from_entity(entity))
    }

    /// Reassigns a member to a new shepherding leader.
    ///
    /// # Arguments
    /// - `id` - Database id of the member
    /// - `leader_id` - Receiving leader's id
    ///
    /// # Returns
    /// - `Ok(())` - Leader reassigned (no-op if the member does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_leader(&self, id: i32, leader_id: i32) -> Result<(), DbErr> {
        entity::prelude::Member::update_many()
            .filter(entity::member::Column::Id.eq(id))
            .col_expr(
                entity::member::Column::LeaderId,
                sea_orm::sea_query::Expr::value(Some(leader_id)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stores the URL of a member's uploaded photo.
    ///
    /// # Arguments
    /// - `id` - Database id of the member
    /// - `photo_url` - Public URL of the stored file
    ///
    /// # Returns
    /// - `Ok(())` - URL stored (no-op if the member does not exist)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_photo(&self, id: i32, photo_url: String) -> Result<(), DbErr> {
        entity::prelude::Member::update_many()
            .filter(entity::member::Column::Id.eq(id))
            .col_expr(
                entity::member::Column::PhotoUrl,
                sea_orm::sea_query::Expr::value(Some(photo_url)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a member record.
    ///
    /// # Arguments
    /// - `id` - Database id of the member
    ///
    /// # Returns
    /// - `Ok(())` - Member deleted (no-op if already gone)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Member::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts the members visible in a scope.
    ///
    /// # Arguments
    /// - `scope` - Visibility scope to count under
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of members in scope
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_in_scope(&self, scope: &Scope) -> Result<u64, DbErr> {
        entity::prelude::Member::find()
            .filter(member_condition(scope))
            .count(self.db)
            .await
    }

    /// Gets every member visible in a scope, without pagination.
    ///
    /// Report aggregation uses this; the working set is one congregation, not
    /// an unbounded table.
    ///
    /// # Arguments
    /// - `scope` - Caller's visibility scope
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Members in scope (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_in_scope(&self, scope: &Scope) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(member_condition(scope))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }
}
