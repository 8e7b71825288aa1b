//! Session lifecycle callbacks.

// self
use crate::_prelude::*;

/// Why a session ended without the user logging out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionExpiry {
	/// Human-readable reason, safe to log.
	pub reason: String,
	/// Instant the client gave up on the session.
	pub observed_at: OffsetDateTime,
}
impl SessionExpiry {
	/// Creates an expiry notice stamped with the current clock.
	pub fn new(reason: impl Into<String>) -> Self {
		Self { reason: reason.into(), observed_at: OffsetDateTime::now_utc() }
	}
}

/// Receives session lifecycle events from [`ApiClient`](crate::session::ApiClient).
pub trait SessionHook
where
	Self: Send + Sync,
{
	/// Called once per failed renewal, after stored credentials have been cleared.
	///
	/// Front-ends redirect to their login entry point here.
	fn session_expired(&self, expiry: &SessionExpiry);
}

/// Default hook that only logs the expiry.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSessionHook;
impl SessionHook for LoggingSessionHook {
	fn session_expired(&self, expiry: &SessionExpiry) {
		tracing::warn!(reason = %expiry.reason, "Session expired; login required.");
	}
}

/// Hook that remembers every expiry it receives, for front-ends that poll instead of reacting.
#[derive(Clone, Debug, Default)]
pub struct RecordingSessionHook(Arc<Mutex<Vec<SessionExpiry>>>);
impl RecordingSessionHook {
	/// Returns the expiries observed so far.
	pub fn expiries(&self) -> Vec<SessionExpiry> {
		self.0.lock().clone()
	}

	/// Returns `true` if at least one expiry was observed.
	pub fn login_required(&self) -> bool {
		!self.0.lock().is_empty()
	}
}
impl SessionHook for RecordingSessionHook {
	fn session_expired(&self, expiry: &SessionExpiry) {
		self.0.lock().push(expiry.clone());
	}
}
