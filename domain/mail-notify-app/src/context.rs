use std::sync::Arc;

/// Capabilities a notification is sent with. Borrowed for the duration of a call.
pub struct NotificationContext<E, F, A> {
    pub(crate) caller: String,
    pub(crate) subject_prefix: Option<String>,
    pub(crate) email_port: Arc<E>,
    pub(crate) formatter: Arc<F>,
    pub(crate) admin_port: Arc<A>,
}

impl<E, F, A> NotificationContext<E, F, A> {
    pub fn new(
        caller: impl Into<String>,
        email_port: Arc<E>,
        formatter: Arc<F>,
        admin_port: Arc<A>,
    ) -> Self {
        Self {
            caller: caller.into(),
            subject_prefix: None,
            email_port,
            formatter,
            admin_port,
        }
    }

    pub fn with_subject_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.subject_prefix = (!prefix.trim().is_empty()).then_some(prefix);
        self
    }

    pub fn caller(&self) -> &str {
        &self.caller
    }

    pub(crate) fn derive_subject(&self, subject: &str) -> String {
        match &self.subject_prefix {
            Some(prefix) => format!("{} {}", prefix.trim(), subject),
            None => subject.to_string(),
        }
    }
}
