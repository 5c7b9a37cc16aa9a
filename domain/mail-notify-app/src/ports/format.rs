use thiserror::Error;

pub trait TextFormatter {
    fn format(&self, text: &str) -> Result<String, FormatError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown placeholder: {0}")]
    UnknownPlaceholder(String),

    #[error("unterminated placeholder at offset {0}")]
    Unterminated(usize),
}
