use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but holds a value that cannot be parsed.
    ///
    /// # Fields
    /// - Name of the variable
    /// - Description of the expected format
    #[error("Invalid value for environment variable {0}: expected {1}")]
    InvalidEnvVar(String, String),
}
