use log::{error, info};

use crate::{
    context::NotificationContext,
    domain::user::User,
    error::NotifyResult,
    ports::{admin::AdminNotificationPort, email::EmailPort, format::TextFormatter},
};

#[derive(Debug, Clone, Default)]
pub struct NotifyOptions {
    /// Send even when the user opted out of notification e-mails.
    pub ignore_notification_settings: bool,
    /// Admin directory key whose members receive a copy.
    pub admin_email_key: Option<String>,
}

impl NotifyOptions {
    pub fn ignoring_notification_settings(mut self) -> Self {
        self.ignore_notification_settings = true;
        self
    }

    pub fn with_admin_email_key(mut self, key: impl Into<String>) -> Self {
        self.admin_email_key = Some(key.into());
        self
    }

    fn admin_key(&self) -> Option<&str> {
        self.admin_email_key.as_deref().filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    Skipped,
}

/// Formats and sends `subject`/`body` to `user`, copying the admins behind
/// `options.admin_email_key`. Returns `false` only when something failed;
/// a skipped send still counts as success.
pub async fn send_email_to_user<E, F, A>(
    context: &NotificationContext<E, F, A>,
    name: &str,
    user: &User,
    subject: &str,
    body: &str,
    options: &NotifyOptions,
) -> bool
where
    E: EmailPort + Send + Sync,
    F: TextFormatter + Send + Sync,
    A: AdminNotificationPort + Send + Sync,
{
    match try_send_email_to_user(context, name, user, subject, body, options).await {
        Ok(_) => true,
        Err(e) => {
            error!(
                "[{}] {}: failed to notify user {}: {}",
                context.caller, name, user.id, e
            );
            false
        }
    }
}

pub async fn try_send_email_to_user<E, F, A>(
    context: &NotificationContext<E, F, A>,
    name: &str,
    user: &User,
    subject: &str,
    body: &str,
    options: &NotifyOptions,
) -> NotifyResult<NotifyOutcome>
where
    E: EmailPort + Send + Sync,
    F: TextFormatter + Send + Sync,
    A: AdminNotificationPort + Send + Sync,
{
    let subject = context.derive_subject(&context.formatter.format(subject)?);
    let body = context.formatter.format(body)?;

    let outcome = if options.ignore_notification_settings || user.accepts_notifications() {
        info!(
            "[{}] {}: sending email to {}",
            context.caller, name, user.email
        );
        context
            .email_port
            .send_email(&user.email, &subject, &body)
            .await?;
        info!("[{}] {}: email sent to {}", context.caller, name, user.email);
        NotifyOutcome::Sent
    } else {
        info!(
            "[{}] {}: skipped email to {}, user {} disabled notifications",
            context.caller, name, user.email, user.id
        );
        NotifyOutcome::Skipped
    };

    if let Some(key) = options.admin_key() {
        context
            .admin_port
            .send_email_to_admins(&context.caller, name, key, &subject, &body)
            .await?;
    }

    Ok(outcome)
}
