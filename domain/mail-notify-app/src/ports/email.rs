use thiserror::Error;

#[async_trait::async_trait]
pub trait EmailPort {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), SendEmailError>;
}

#[derive(Debug, Clone, Error)]
pub enum SendEmailError {
    #[error("invalid recipient address: {0}")]
    InvalidToAddress(String),

    #[error("failed to build email: {0}")]
    Build(String),

    #[error("failed to send email: {0}")]
    Transport(String),
}
