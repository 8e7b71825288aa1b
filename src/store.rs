//! Storage contract and built-in stores for the session's credentials.
//!
//! A store holds at most one [`SessionTokens`] pair, the way a browser keeps the access and
//! refresh tokens side by side. Refreshes rotate the pair through
//! [`CredentialStore::compare_and_swap_access`] so a rotation never clobbers credentials that
//! changed underneath it (a concurrent login, logout, or another refresh).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, auth::SessionTokens};

/// Boxed future returned by [`CredentialStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Storage backend contract implemented by credential stores.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Returns the stored credentials, if any.
	fn load(&self) -> StoreFuture<'_, Option<SessionTokens>>;

	/// Persists or replaces the stored credentials.
	fn save(&self, tokens: SessionTokens) -> StoreFuture<'_, ()>;

	/// Atomically replaces the credentials if the stored access token equals `expected_access`.
	fn compare_and_swap_access<'a>(
		&'a self,
		expected_access: &'a str,
		replacement: SessionTokens,
	) -> StoreFuture<'a, CompareAndSwapOutcome>;

	/// Removes the stored credentials, returning what was removed.
	fn clear(&self) -> StoreFuture<'_, Option<SessionTokens>>;
}

/// Result of an access-token compare-and-swap attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareAndSwapOutcome {
	/// The access token matched the expected value and the credentials were replaced.
	Updated,
	/// Credentials exist but carry a different access token.
	AccessMismatch,
	/// No credentials are stored.
	Missing,
}

/// Error type produced by [`CredentialStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

fn access_matches(current: &SessionTokens, expected: &str) -> bool {
	current.access.expose() == expected
}

fn swap_outcome(current: Option<&SessionTokens>, expected: &str) -> CompareAndSwapOutcome {
	match current {
		Some(tokens) if access_matches(tokens, expected) => CompareAndSwapOutcome::Updated,
		Some(_) => CompareAndSwapOutcome::AccessMismatch,
		None => CompareAndSwapOutcome::Missing,
	}
}
