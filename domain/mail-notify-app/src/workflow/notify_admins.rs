use std::sync::Arc;

use log::{info, warn};

use crate::{
    error::{NotifyError, NotifyResult},
    ports::{
        admin::{AdminDirectory, AdminNotificationPort},
        email::EmailPort,
    },
};

pub struct AdminNotifier<E: EmailPort, D: AdminDirectory> {
    email_port: Arc<E>,
    directory: Arc<D>,
}

impl<E: EmailPort, D: AdminDirectory> AdminNotifier<E, D> {
    pub fn new(email_port: Arc<E>, directory: Arc<D>) -> Self {
        Self {
            email_port,
            directory,
        }
    }
}

#[async_trait::async_trait]
impl<E: EmailPort + Send + Sync, D: AdminDirectory + Send + Sync> AdminNotificationPort
    for AdminNotifier<E, D>
{
    async fn send_email_to_admins(
        &self,
        caller: &str,
        name: &str,
        key: &str,
        subject: &str,
        body: &str,
    ) -> NotifyResult<()> {
        let Some(recipients) = self.directory.admin_emails(key) else {
            return Err(NotifyError::UnknownAdminKey(key.to_string()));
        };

        let sends = recipients.iter().map(|to| async move {
            let result = self.email_port.send_email(to, subject, body).await;
            (to, result)
        });
        let results = futures::future::join_all(sends).await;

        let total = results.len();
        let mut failed = 0;
        for (to, result) in results {
            match result {
                Ok(()) => info!("[{}] {}: admin email sent to {}", caller, name, to),
                Err(e) => {
                    failed += 1;
                    warn!(
                        "[{}] {}: admin email to {} failed: {}",
                        caller, name, to, e
                    );
                }
            }
        }
        if failed > 0 {
            warn!(
                "[{}] {}: admin email failed for {} of {} recipients under {}",
                caller, name, failed, total, key
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::admin::StaticAdminDirectory, test_support::MockEmailPort};

    fn notifier(email_port: &MockEmailPort) -> AdminNotifier<MockEmailPort, StaticAdminDirectory> {
        let mut directory = StaticAdminDirectory::new();
        directory.insert_list("signup", "ops@example.com, lead@example.com");
        AdminNotifier::new(Arc::new(email_port.clone()), Arc::new(directory))
    }

    #[tokio::test]
    async fn test_sends_to_every_admin() {
        let email_port = MockEmailPort::default();
        let result = notifier(&email_port)
            .send_email_to_admins("api", "welcome", "signup", "New user", "Body")
            .await;

        assert!(result.is_ok());
        let mut recipients: Vec<String> =
            email_port.get_sent().into_iter().map(|sent| sent.to).collect();
        recipients.sort();
        assert_eq!(recipients, vec!["lead@example.com", "ops@example.com"]);
        assert!(email_port.get_sent().iter().all(|sent| sent.subject == "New user"));
    }

    #[tokio::test]
    async fn test_unknown_key() {
        let email_port = MockEmailPort::default();
        let result = notifier(&email_port)
            .send_email_to_admins("api", "welcome", "billing", "New user", "Body")
            .await;

        assert!(matches!(result, Err(NotifyError::UnknownAdminKey(key)) if key == "billing"));
        assert!(email_port.get_sent().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delivery_does_not_fail_the_call() {
        let email_port = MockEmailPort::default();
        email_port.fail_for("lead@example.com");
        let result = notifier(&email_port)
            .send_email_to_admins("api", "welcome", "SIGNUP", "New user", "Body")
            .await;

        assert!(result.is_ok());
        let sent = email_port.get_sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ops@example.com");
    }
}
