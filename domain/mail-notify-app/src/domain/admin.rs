use std::collections::HashMap;

use log::warn;

use crate::{
    ports::admin::AdminDirectory,
    validation::{EmailValidation, validate_email},
};

/// Admin addresses grouped by lookup key. Keys are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct StaticAdminDirectory {
    entries: HashMap<String, Vec<String>>,
}

impl StaticAdminDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a comma separated list of addresses under `key`.
    /// Invalid addresses are dropped.
    pub fn insert_list(&mut self, key: &str, addresses: &str) {
        let emails = addresses
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .filter_map(
                |address| match validate_email(address, EmailValidation::default()) {
                    Ok(email) => Some(email),
                    Err(e) => {
                        warn!("Ignoring admin address for key {}: {}", key, e);
                        None
                    }
                },
            );
        self.entries
            .entry(key.to_lowercase())
            .or_default()
            .extend(emails);
    }

    pub fn from_env_vars(prefix: &str, vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut directory = Self::new();
        for (name, value) in vars {
            if let Some(key) = name.strip_prefix(prefix)
                && !key.is_empty()
            {
                directory.insert_list(key, &value);
            }
        }
        directory
    }
}

impl AdminDirectory for StaticAdminDirectory {
    fn admin_emails(&self, key: &str) -> Option<Vec<String>> {
        self.entries
            .get(&key.to_lowercase())
            .filter(|emails| !emails.is_empty())
            .cloned()
    }
}
