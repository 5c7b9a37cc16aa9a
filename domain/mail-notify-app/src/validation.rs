use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use thiserror::Error;
use validator::Validate;

/// HTML living standard "valid e-mail address" grammar.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .unicode(false)
        .build()
        .unwrap()
});

#[derive(Validate)]
struct EmailValidator {
    #[validate(email)]
    email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidation {
    /// Match against [`EMAIL_PATTERN`] instead of the `validator` grammar.
    pub use_regex: bool,
    /// Reject addresses whose domain part has no dot, like `user@localhost`.
    pub require_dot_in_domain: bool,
}

impl EmailValidation {
    pub fn regex() -> Self {
        Self {
            use_regex: true,
            require_dot_in_domain: false,
        }
    }

    pub fn with_dot_in_domain(self) -> Self {
        Self {
            require_dot_in_domain: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email: {0}")]
    InvalidEmail(String),
}

pub fn is_valid_email_address(email: Option<&str>, options: EmailValidation) -> bool {
    // validator treats a missing value as nothing to check, so None is handled here
    let Some(email) = email else {
        return false;
    };

    let is_valid = if options.use_regex {
        EMAIL_RE.is_match(email)
    } else {
        EmailValidator {
            email: email.to_string(),
        }
        .validate()
        .is_ok()
    };

    if is_valid && options.require_dot_in_domain {
        return has_dot_in_domain(email);
    }
    is_valid
}

fn has_dot_in_domain(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').filter(|part| !part.is_empty()).collect();
    parts.len() == 2 && parts[1].contains('.')
}

pub fn validate_email(email: &str, options: EmailValidation) -> Result<String, ValidationError> {
    let email = email.trim();
    if !is_valid_email_address(Some(email), options) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}
