//! Core domain types for Sporta

mod record;
mod sport;
pub mod timestamp;
mod username;

pub use record::{Achievement, Challenge, ResultEntry, UserRecord};
pub use sport::{Sport, SPORTS};
pub use username::{validate_username, MAX_USERNAME_LEN};
