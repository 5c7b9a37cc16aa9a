use crate::error::NotifyResult;

#[async_trait::async_trait]
pub trait AdminNotificationPort {
    /// Sends an already formatted notification to the admins registered under `key`.
    async fn send_email_to_admins(
        &self,
        caller: &str,
        name: &str,
        key: &str,
        subject: &str,
        body: &str,
    ) -> NotifyResult<()>;
}

pub trait AdminDirectory {
    fn admin_emails(&self, key: &str) -> Option<Vec<String>>;
}
