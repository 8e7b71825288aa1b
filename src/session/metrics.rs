// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for session renewals.
#[derive(Debug, Default)]
pub struct SessionMetrics {
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
	unauthorized_retries: AtomicU64,
}
impl SessionMetrics {
	/// Returns the number of refresh-token exchanges attempted.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of successful refresh-token exchanges.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of failed refresh-token exchanges.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	/// Returns how many requests were resubmitted after a 401 and a successful renewal.
	pub fn unauthorized_retries(&self) -> u64 {
		self.unauthorized_retries.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.success.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failure.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_unauthorized_retry(&self) {
		self.unauthorized_retries.fetch_add(1, Ordering::Relaxed);
	}
}
