//! DTOs mirrored from the backend, plus the summaries derived from them.
//!
//! The client owns none of this data: every value is a cached server response that is
//! re-fetched after each mutation.

pub mod budget;
pub mod category;
pub mod page;
pub mod summary;
pub mod transaction;

pub use budget::*;
pub use category::*;
pub use page::*;
pub use summary::*;
pub use transaction::*;

// self
use crate::_prelude::*;

/// Identifier assigned by the backend.
pub type EntityId = u64;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Formats a date the way the backend expects in bodies and query strings (`YYYY-MM-DD`).
pub fn format_iso_date(date: Date) -> String {
	format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
	Date::parse(raw.trim(), time::macros::format_description!("[year]-[month]-[day]")).ok()
}
