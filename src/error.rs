use mail_notify_app::validation::ValidationError;
use mail_notify_lettre::SmtpConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("invalid user id: {0}")]
    InvalidUserId(#[from] uuid::Error),

    #[error(transparent)]
    InvalidEmail(#[from] ValidationError),

    #[error("smtp configuration error: {0}")]
    Config(#[from] SmtpConfigError),

    #[error("failed to initialize logger: {0}")]
    Logger(String),
}
