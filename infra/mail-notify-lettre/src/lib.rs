use std::str::FromStr;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor, message::Mailbox,
    transport::smtp::authentication::Credentials,
};
use log::{debug, info};
use mail_notify_app::ports::email::{EmailPort, SendEmailError};

pub mod config;

pub use config::{SmtpConfig, SmtpConfigError};

pub struct LettreEmailAdapter {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl LettreEmailAdapter {
    pub fn new(config: SmtpConfig) -> Result<Self, SmtpConfigError> {
        let from = Mailbox::from_str(&config.from).map_err(|e| SmtpConfigError::Invalid {
            name: "MAIL_FROM",
            reason: e.to_string(),
        })?;
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| SmtpConfigError::Invalid {
                name: "MAIL_SMTP_HOST",
                reason: e.to_string(),
            })?
            .credentials(Credentials::new(config.user, config.password));
        if let Some(port) = config.port {
            builder = builder.port(port);
        }
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, SendEmailError> {
        let to = Mailbox::from_str(to)
            .map_err(|e| SendEmailError::InvalidToAddress(format!("{}: {}", to, e)))?;
        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| SendEmailError::Build(e.to_string()))
    }
}

#[async_trait::async_trait]
impl EmailPort for LettreEmailAdapter {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), SendEmailError> {
        let email = self.build_message(to, subject, body)?;
        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| SendEmailError::Transport(e.to_string()))?;
        debug!("SMTP relay accepted email to {}: {}", to, response.code());
        Ok(())
    }
}

/// Logs outgoing e-mails instead of delivering them.
pub struct LogEmailAdapter;

#[async_trait::async_trait]
impl EmailPort for LogEmailAdapter {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), SendEmailError> {
        info!("Dry run, not sending email to {}: {}", to, subject);
        debug!("Dry run email body:\n{}", body);
        Ok(())
    }
}
