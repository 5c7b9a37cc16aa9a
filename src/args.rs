use mail_notify_app::{
    EmailValidation, NotifyOptions,
    domain::user::{User, UserId},
    validate_email,
};

use crate::error::CliError;

pub const USAGE: &str = "Usage: mail-notify <name> <user-id> <email> <subject> <body> \
[--ignore-settings] [--opted-out] [--admin-key <key>]";

pub struct CliArgs {
    pub name: String,
    pub user: User,
    pub subject: String,
    pub body: String,
    pub options: NotifyOptions,
}

impl CliArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut options = NotifyOptions::default();
        let mut opted_out = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ignore-settings" => options.ignore_notification_settings = true,
                "--opted-out" => opted_out = true,
                "--admin-key" => {
                    let Some(key) = args.next() else {
                        return Err(CliError::Usage("--admin-key requires a value".into()));
                    };
                    options.admin_email_key = Some(key);
                }
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown flag {}", flag)));
                }
                _ => positional.push(arg),
            }
        }

        let [name, user_id, email, subject, body]: [String; 5] =
            positional.try_into().map_err(|positional: Vec<String>| {
                CliError::Usage(format!(
                    "expected 5 positional arguments, got {}",
                    positional.len()
                ))
            })?;

        let id = UserId(uuid::Uuid::parse_str(&user_id)?);
        let email = validate_email(&email, EmailValidation::default().with_dot_in_domain())?;
        let mut user = User::new(id, email);
        user.disable_email_notifications = opted_out;

        Ok(Self {
            name,
            user,
            subject,
            body,
            options,
        })
    }
}
