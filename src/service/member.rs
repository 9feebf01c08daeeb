//! Member service for business logic.
//!
//! Every member operation runs inside the caller's visibility scope: an
//! out-of-scope member behaves exactly like a missing one. Bacenta leaders
//! always create members under themselves; bulk transfers collect per-member
//! failures instead of aborting the batch, and notify the receiving leader.

use sea_orm::DatabaseConnection;

use crate::data::{
    area::AreaRepository, member::MemberRepository, notification::NotificationRepository,
    user::UserRepository,
};
use crate::error::{auth::AuthError, AppError};
use crate::model::member::{
    BulkTransferParam, BulkTransferResult, CreateMemberParam, Member, MemberFilter,
    PaginatedMembers, TransferError, UpdateMemberParam,
};
use crate::model::scope::Scope;
use crate::service::user::user_in_scope;

use entity::member::MemberState;
use entity::user::Role;

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a member.
    ///
    /// The member's area must be inside the caller's scope. A Bacenta leader
    /// always becomes the shepherding leader of members they create; an
    /// explicit `leader_id` is validated to hold the Bacenta_Leader role.
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(AppError::BadRequest)` - Unknown area or invalid leader assignment
    /// - `Err(AuthError::AccessDenied)` - Area outside the caller's scope
    pub async fn create(
        &self,
        mut param: CreateMemberParam,
        caller: &entity::user::Model,
        scope: &Scope,
    ) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let area_repo = AreaRepository::new(self.db);

        if area_repo.get_by_id(param.area_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Area {} does not exist",
                param.area_id
            )));
        }

        match scope {
            Scope::All => {}
            Scope::Areas(_) => {
                if !scope.includes_area(param.area_id) {
                    return Err(AuthError::AccessDenied(
                        caller.id,
                        format!("attempted to create a member in area {}", param.area_id),
                    )
                    .into());
                }
            }
            Scope::Leader(leader_id) => {
                // Bacenta leaders shepherd what they record.
                param.leader_id = Some(*leader_id);
                if caller.area_id != Some(param.area_id) {
                    return Err(AuthError::AccessDenied(
                        caller.id,
                        format!("attempted to create a member in area {}", param.area_id),
                    )
                    .into());
                }
            }
            Scope::Nothing => {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    "attempted to create a member".to_string(),
                )
                .into());
            }
        }

        if let Some(leader_id) = param.leader_id {
            self.check_bacenta_leader_role(leader_id).await?;
        }

        let member = member_repo.create(param).await?;

        tracing::info!("Member {} created by user {}", member.id, caller.id);

        Ok(member)
    }

    /// Gets members matching a filter inside a scope, with pagination.
    pub async fn get_all(
        &self,
        filter: MemberFilter,
        scope: &Scope,
    ) -> Result<PaginatedMembers, AppError> {
        let member_repo = MemberRepository::new(self.db);

        let per_page = filter.per_page;
        let page = filter.page;
        let (members, total) = member_repo.get_filtered(filter, scope).await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedMembers {
            members,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets one member if the scope covers them.
    pub async fn get_by_id(&self, id: i32, scope: &Scope) -> Result<Option<Member>, AppError> {
        let member_repo = MemberRepository::new(self.db);

        Ok(member_repo.get_by_id(id, scope).await?)
    }

    /// Updates a member record.
    ///
    /// The target must be inside the caller's scope. Area moves are validated
    /// against the scope the same way as at creation, and leader reassignments
    /// against the Bacenta_Leader role.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::NotFound)` - No such member, or outside the scope
    /// - `Err(AppError::BadRequest)` - Unknown area or invalid leader assignment
    /// - `Err(AuthError::AccessDenied)` - Area move outside the caller's scope
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMemberParam,
        caller: &entity::user::Model,
        scope: &Scope,
    ) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let area_repo = AreaRepository::new(self.db);

        if member_repo.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Member {id} not found")));
        }

        if let Some(area_id) = param.area_id {
            if area_repo.get_by_id(area_id).await?.is_none() {
                return Err(AppError::BadRequest(format!("Area {area_id} does not exist")));
            }
            if !scope.is_all() && !scope.includes_area(area_id) {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to move member {id} to area {area_id}"),
                )
                .into());
            }
        }

        if let Some(Some(leader_id)) = param.leader_id {
            self.check_bacenta_leader_role(leader_id).await?;
        }

        let member = member_repo.update(id, param).await?;

        Ok(member)
    }

    /// Changes a member's engagement state.
    ///
    /// # Returns
    /// - `Ok(Member)` - The updated member
    /// - `Err(AppError::NotFound)` - No such member, or outside the scope
    pub async fn update_state(
        &self,
        id: i32,
        state: MemberState,
        scope: &Scope,
    ) -> Result<Member, AppError> {
        let member_repo = MemberRepository::new(self.db);

        if member_repo.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Member {id} not found")));
        }

        let member = member_repo.update_state(id, state).await?;

        Ok(member)
    }

    /// Deletes a member record.
    ///
    /// # Returns
    /// - `Ok(())` - Member deleted
    /// - `Err(AppError::NotFound)` - No such member, or outside the scope
    pub async fn delete(&self, id: i32, scope: &Scope) -> Result<(), AppError> {
        let member_repo = MemberRepository::new(self.db);

        if member_repo.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Member {id} not found")));
        }

        member_repo.delete(id).await?;

        tracing::info!("Member {id} deleted");

        Ok(())
    }

    /// Reassigns members to another leader in bulk.
    ///
    /// The receiving leader must be an active Bacenta leader inside the
    /// caller's scope. Each member is moved independently; an out-of-scope or
    /// missing member produces an entry in the error list while the rest of
    /// the batch proceeds. The receiving leader gets one notification naming
    /// how many members arrived.
    ///
    /// # Returns
    /// - `Ok(BulkTransferResult)` - Count moved plus per-member failures
    /// - `Err(AppError::BadRequest)` - Receiving leader invalid
    pub async fn bulk_transfer(
        &self,
        param: BulkTransferParam,
        scope: &Scope,
    ) -> Result<BulkTransferResult, AppError> {
        let member_repo = MemberRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let leader = user_repo
            .find_by_id(param.leader_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("User {} does not exist", param.leader_id))
            })?;

        if leader.role != Role::BacentaLeader {
            return Err(AppError::BadRequest(format!(
                "User {} is not a Bacenta leader",
                leader.id
            )));
        }

        if !leader.active {
            return Err(AppError::BadRequest(format!(
                "User {} is deactivated",
                leader.id
            )));
        }

        if !user_in_scope(&leader, scope) {
            return Err(AppError::BadRequest(format!(
                "User {} is outside your scope",
                leader.id
            )));
        }

        let mut transferred = 0u64;
        let mut errors = Vec::new();

        for member_id in param.member_ids {
            match member_repo.get_by_id(member_id, scope).await? {
                Some(_) => {
                    member_repo.update_leader(member_id, leader.id).await?;
                    transferred += 1;
                }
                None => errors.push(TransferError {
                    member_id,
                    error: format!("Member {member_id} not found"),
                }),
            }
        }

        if transferred > 0 {
            notification_repo
                .create(
                    leader.id,
                    "Members transferred to you",
                    &format!("{transferred} members were assigned to your Bacenta"),
                )
                .await?;
        }

        tracing::info!(
            "Transferred {} members to leader {} ({} failures)",
            transferred,
            leader.id,
            errors.len()
        );

        Ok(BulkTransferResult {
            transferred,
            errors,
        })
    }

    /// Stores an uploaded photo URL on a scoped member.
    ///
    /// # Returns
    /// - `Ok(())` - URL stored
    /// - `Err(AppError::NotFound)` - No such member, or outside the scope
    pub async fn set_photo(&self, id: i32, photo_url: String, scope: &Scope) -> Result<(), AppError> {
        let member_repo = MemberRepository::new(self.db);

        if member_repo.get_by_id(id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Member {id} not found")));
        }

        member_repo.update_photo(id, photo_url).await?;

        Ok(())
    }

    /// Verifies that the given user exists and holds the Bacenta_Leader role.
    async fn check_bacenta_leader_role(&self, leader_id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let leader = user_repo
            .find_by_id(leader_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("User {leader_id} does not exist")))?;

        if leader.role != Role::BacentaLeader {
            return Err(AppError::BadRequest(format!(
                "User {leader_id} is not a Bacenta leader"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a bulk transfer with one unknown member moves the known
    /// one and reports the bad id without aborting the batch.
    ///
    /// Expected: one member moved, one error naming the unknown id
    #[tokio::test]
    async fn bulk_transfer_moves_valid_members_and_reports_unknown() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_people_tables()
            .with_table(entity::prelude::Notification)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_leader, _region, area, member) =
            factory::helpers::create_member_with_dependencies(db).await?;
        let receiver = factory::user::UserFactory::new(db)
            .role(Role::BacentaLeader)
            .area_id(area.id)
            .build()
            .await?;

        let service = MemberService::new(db);
        let result = service
            .bulk_transfer(
                BulkTransferParam {
                    leader_id: receiver.id,
                    member_ids: vec![member.id, 9999],
                },
                &Scope::All,
            )
            .await?;

        assert_eq!(result.transferred, 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].member_id, 9999);
        assert!(result.errors[0].error.contains("not found"));

        let moved = MemberRepository::new(db)
            .get_by_id(member.id, &Scope::All)
            .await?
            .unwrap();
        assert_eq!(moved.leader_id, Some(receiver.id));

        Ok(())
    }
}
