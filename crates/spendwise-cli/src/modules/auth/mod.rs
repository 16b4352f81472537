mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_login, handle_logout, handle_status};
