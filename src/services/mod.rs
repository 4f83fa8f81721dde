//! Application service layer.
//!
//! Services hold the business logic that reads the address book without
//! owning it.

pub mod birthdays;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday};
