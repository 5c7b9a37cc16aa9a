use std::sync::Arc;

use log::{error, info};
use mail_notify_app::{
    NotificationContext,
    domain::admin::StaticAdminDirectory,
    ports::email::EmailPort,
    send_email_to_user,
    services::formatter::PlaceholderFormatter,
    workflow::notify_admins::AdminNotifier,
};
use mail_notify_lettre::{LettreEmailAdapter, LogEmailAdapter, SmtpConfig};

use crate::{
    args::{CliArgs, USAGE},
    error::CliError,
};

mod args;
mod error;
mod logs;

const DEFAULT_CALLER: &str = "mail-notify";

fn is_dry_run() -> bool {
    std::env::var("MAIL_DRY_RUN").is_ok_and(|value| matches!(value.trim(), "1" | "true"))
}

async fn notify<E: EmailPort + Send + Sync>(email_port: Arc<E>, args: &CliArgs) -> bool {
    let caller = std::env::var("MAIL_CALLER").unwrap_or_else(|_| DEFAULT_CALLER.to_string());
    let formatter = Arc::new(PlaceholderFormatter::from_env_vars(
        "MAIL_VAR_",
        std::env::vars(),
    ));
    let directory = Arc::new(StaticAdminDirectory::from_env_vars(
        "MAIL_ADMIN_",
        std::env::vars(),
    ));
    let admin_port = Arc::new(AdminNotifier::new(email_port.clone(), directory));

    let mut context = NotificationContext::new(caller, email_port, formatter, admin_port);
    if let Ok(prefix) = std::env::var("MAIL_SUBJECT_PREFIX") {
        context = context.with_subject_prefix(prefix);
    }

    info!(
        "Sending {} notification to user {}",
        args.name, args.user.id
    );
    send_email_to_user(
        &context,
        &args.name,
        &args.user,
        &args.subject,
        &args.body,
        &args.options,
    )
    .await
}

async fn run(args: CliArgs) -> Result<bool, CliError> {
    if is_dry_run() {
        return Ok(notify(Arc::new(LogEmailAdapter), &args).await);
    }
    let adapter = LettreEmailAdapter::new(SmtpConfig::from_env()?)?;
    Ok(notify(Arc::new(adapter), &args).await)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let _handle = match logs::init_logger() {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            std::process::exit(1);
        }
    };

    let success = match run(args).await {
        Ok(success) => success,
        Err(e) => {
            error!("{}", e);
            false
        }
    };
    if !success {
        std::process::exit(1);
    }
}
