pub mod context;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use context::NotificationContext;
pub use error::{NotifyError, NotifyResult};
pub use validation::{EmailValidation, is_valid_email_address, validate_email};
pub use workflow::notify_user::{
    NotifyOptions, NotifyOutcome, send_email_to_user, try_send_email_to_user,
};
