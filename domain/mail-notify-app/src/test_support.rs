use std::sync::{Arc, Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{
    error::{NotifyError, NotifyResult},
    ports::{
        admin::AdminNotificationPort,
        email::{EmailPort, SendEmailError},
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct MockEmailPort {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failing_recipients: Arc<Mutex<Vec<String>>>,
}

impl MockEmailPort {
    pub fn fail_for(&self, to: &str) {
        self.failing_recipients.lock().unwrap().push(to.to_string());
    }

    pub fn get_sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl EmailPort for MockEmailPort {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), SendEmailError> {
        if self.failing_recipients.lock().unwrap().iter().any(|r| r == to) {
            return Err(SendEmailError::Transport("connection refused".into()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminCall {
    pub caller: String,
    pub name: String,
    pub key: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct MockAdminPort {
    calls: Arc<Mutex<Vec<AdminCall>>>,
    fail: Arc<Mutex<bool>>,
}

impl MockAdminPort {
    pub fn set_failing(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn get_calls(&self) -> Vec<AdminCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AdminNotificationPort for MockAdminPort {
    async fn send_email_to_admins(
        &self,
        caller: &str,
        name: &str,
        key: &str,
        subject: &str,
        body: &str,
    ) -> NotifyResult<()> {
        self.calls.lock().unwrap().push(AdminCall {
            caller: caller.to_string(),
            name: name.to_string(),
            key: key.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if *self.fail.lock().unwrap() {
            return Err(NotifyError::UnknownAdminKey(key.to_string()));
        }
        Ok(())
    }
}

static CAPTURED_LOGS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

static INIT_LOGGER: Once = Once::new();

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED_LOGS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Installs the capturing logger once per test binary.
pub fn init_capture_logger() {
    INIT_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Captured log lines containing `needle`. Tests run in parallel, so filter
/// by something unique to the test, like a fresh user id.
pub fn captured_logs(needle: &str) -> Vec<(Level, String)> {
    CAPTURED_LOGS
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, message)| message.contains(needle))
        .cloned()
        .collect()
}
