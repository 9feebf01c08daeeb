//! Shepherding call log service for business logic.
//!
//! Calls are always attributed to the authenticated leader and only ever made
//! to members inside the caller's scope. History reads apply the same scope,
//! so a member outside it has no visible call history.

use sea_orm::DatabaseConnection;

use crate::data::{call_log::CallLogRepository, member::MemberRepository};
use crate::error::AppError;
use crate::model::call_log::{CallLog, LogCallParam};
use crate::model::scope::Scope;

pub struct CallLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CallLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a call to a member.
    ///
    /// # Returns
    /// - `Ok(CallLog)` - The created entry
    /// - `Err(AppError::NotFound)` - Member missing or outside the scope
    pub async fn log_call(&self, param: LogCallParam, scope: &Scope) -> Result<CallLog, AppError> {
        let call_repo = CallLogRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        if member_repo.get_by_id(param.member_id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Member {} not found",
                param.member_id
            )));
        }

        let call = call_repo.create(param).await?;

        Ok(call)
    }

    /// Gets a member's call history, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<CallLog>)` - The member's history (possibly empty)
    /// - `Err(AppError::NotFound)` - Member missing or outside the scope
    pub async fn get_by_member(
        &self,
        member_id: i32,
        scope: &Scope,
    ) -> Result<Vec<CallLog>, AppError> {
        let call_repo = CallLogRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);

        if member_repo.get_by_id(member_id, scope).await?.is_none() {
            return Err(AppError::NotFound(format!("Member {member_id} not found")));
        }

        Ok(call_repo.get_by_member(member_id).await?)
    }
}
