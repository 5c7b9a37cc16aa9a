use std::collections::HashMap;

use crate::ports::format::{FormatError, TextFormatter};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitutes `{{ key }}` placeholders with fixed values.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderFormatter {
    values: HashMap<String, String>,
}

impl PlaceholderFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn from_env_vars(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let values = vars
            .into_iter()
            .filter_map(|(name, value)| {
                let key = name.strip_prefix(prefix)?;
                (!key.is_empty()).then(|| (key.to_lowercase(), value))
            })
            .collect();
        Self { values }
    }
}

impl TextFormatter for PlaceholderFormatter {
    fn format(&self, text: &str) -> Result<String, FormatError> {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;
        let mut offset = 0;
        while let Some(start) = rest.find(OPEN) {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                return Err(FormatError::Unterminated(offset + start));
            };
            let key = after_open[..end].trim();
            let Some(value) = self.values.get(key) else {
                return Err(FormatError::UnknownPlaceholder(key.to_string()));
            };
            output.push_str(value);
            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        output.push_str(rest);
        Ok(output)
    }
}
