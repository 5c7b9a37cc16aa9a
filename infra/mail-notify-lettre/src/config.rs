use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SmtpConfigError {
    #[error("{0} env var not set")]
    Missing(&'static str),

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub password: String,
    pub from: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("from", &self.from)
            .finish()
    }
}

impl SmtpConfig {
    pub fn from_env() -> Result<Self, SmtpConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SmtpConfigError> {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(SmtpConfigError::Missing(name))
        };
        let port = match lookup("MAIL_SMTP_PORT").filter(|value| !value.trim().is_empty()) {
            Some(port) => Some(port.trim().parse::<u16>().map_err(|e| {
                SmtpConfigError::Invalid {
                    name: "MAIL_SMTP_PORT",
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };
        Ok(Self {
            host: require("MAIL_SMTP_HOST")?,
            port,
            user: require("MAIL_SMTP_USER")?,
            password: require("MAIL_SMTP_PASSWORD")?,
            from: require("MAIL_FROM")?,
        })
    }
}
