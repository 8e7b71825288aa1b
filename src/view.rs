//! View state a front-end renders: what is on screen, and the calls that change it.
//!
//! Views own a clone of the [`ApiClient`](crate::session::ApiClient) and re-fetch from the
//! backend after every change. A failed fetch leaves the previous state in place and returns the
//! error so the caller can show it.

pub mod budget;
pub mod categories;
pub mod dashboard;
pub mod pagination;
pub mod transactions;

pub use budget::*;
pub use categories::*;
pub use dashboard::*;
pub use pagination::*;
pub use transactions::*;

// self
use crate::_prelude::*;

fn log_failure<T>(view: &'static str, action: &'static str, result: Result<T>) -> Result<T> {
	if let Err(err) = &result {
		tracing::warn!(view, action, error = %err, "View refresh failed.");
	}

	result
}
