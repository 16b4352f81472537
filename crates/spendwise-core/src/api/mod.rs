pub mod auth;
pub mod categories;
pub mod expenses;
pub mod list;
mod query;
pub mod reports;

pub use auth::*;
pub use categories::*;
pub use expenses::*;
pub use list::*;
pub use reports::*;
