use thiserror::Error;

use crate::ports::{email::SendEmailError, format::FormatError};

#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Send(#[from] SendEmailError),

    #[error("no admin addresses registered for key {0}")]
    UnknownAdminKey(String),
}

pub type NotifyResult<T> = Result<T, NotifyError>;
