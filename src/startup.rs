use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::{
    auth::password::hash_password,
    config::Config,
    data::user::UserRepository,
    error::AppError,
};

use entity::user::Role;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the upload directory exists and returns its path.
///
/// # Returns
/// - `Ok(PathBuf)` - The directory, created if it was missing
/// - `Err(AppError)` - Directory could not be created
pub async fn ensure_upload_dir(config: &Config) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from(&config.upload_dir);
    tokio::fs::create_dir_all(&dir).await?;

    Ok(dir)
}

/// Creates the initial Bishop account when the database has none.
///
/// Runs only when both `BOOTSTRAP_BISHOP_USERNAME` and
/// `BOOTSTRAP_BISHOP_PASSWORD` are set and no Bishop exists yet, so restarts
/// never clobber a live deployment.
///
/// # Returns
/// - `Ok(())` - Account created, or nothing to do
/// - `Err(AppError)` - Hashing or database failure
pub async fn bootstrap_bishop(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (
        config.bootstrap_bishop_username.as_deref(),
        config.bootstrap_bishop_password.as_deref(),
    ) else {
        return Ok(());
    };

    let user_repo = UserRepository::new(db);
    if user_repo.bishop_exists().await? {
        return Ok(());
    }

    let hash = hash_password(password)?;
    let user = user_repo
        .create(
            crate::model::user::CreateUserParam {
                username: username.to_string(),
                password: None,
                full_name: username.to_string(),
                phone: None,
                role: Role::Bishop,
                area_id: None,
            },
            hash,
        )
        .await?;

    tracing::info!("Bootstrapped Bishop account '{}' (id {})", user.username, user.id);

    Ok(())
}
