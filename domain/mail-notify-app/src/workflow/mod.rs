pub mod notify_admins;
pub mod notify_user;
