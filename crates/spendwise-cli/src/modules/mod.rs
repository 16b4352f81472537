pub(crate) mod auth;
pub(crate) mod categories;
pub(crate) mod expenses;
pub(crate) mod reports;
pub(crate) mod system;
