//! Authentication service: credential verification and password changes.

use sea_orm::DatabaseConnection;

use crate::auth::jwt::{generate_token, JwtConfig};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::data::user::UserRepository;
use crate::error::{auth::AuthError, AppError};
use crate::model::user::{role_to_string, User};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username/password pair and issues a token.
    ///
    /// Wrong username, wrong password and deactivated account all produce the
    /// same `InvalidCredentials` error so the response never reveals which
    /// usernames exist.
    ///
    /// # Arguments
    /// - `username` - Login name
    /// - `password` - Plaintext password
    /// - `jwt` - Signing configuration for the issued token
    ///
    /// # Returns
    /// - `Ok((token, User))` - Signed token and the authenticated account
    /// - `Err(AuthError::InvalidCredentials)` - Bad credentials or inactive account
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        jwt: &JwtConfig,
    ) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_entity_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !entity.active {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = User::from_entity(entity);
        let token = generate_token(user.id, &role_to_string(&user.role), jwt)?;

        tracing::info!("User {} logged in", user.id);

        Ok((token, user))
    }

    /// Changes the authenticated user's password.
    ///
    /// The current password must verify against the stored hash; the new one
    /// must meet the minimum strength requirements.
    ///
    /// # Arguments
    /// - `user_id` - The authenticated user's id
    /// - `current_password` - Plaintext current password
    /// - `new_password` - Plaintext replacement password
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AuthError::InvalidCredentials)` - Current password wrong
    /// - `Err(AppError::BadRequest)` - New password too weak
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_entity_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !verify_password(current_password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        validate_password_strength(new_password).map_err(AppError::BadRequest)?;

        let hash = hash_password(new_password)?;
        user_repo.update_password(user_id, hash).await?;

        Ok(())
    }
}
