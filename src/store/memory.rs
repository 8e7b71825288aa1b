//! Thread-safe in-memory [`CredentialStore`] implementation for short-lived sessions and tests.

// self
use crate::{
	_prelude::*,
	auth::SessionTokens,
	store::{CompareAndSwapOutcome, CredentialStore, StoreError, StoreFuture},
};

type Slot = Arc<RwLock<Option<SessionTokens>>>;

/// Keeps credentials in-process; they vanish when the process exits.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Slot);
impl MemoryStore {
	/// Creates a store pre-populated with credentials.
	pub fn with_tokens(tokens: SessionTokens) -> Self {
		Self(Arc::new(RwLock::new(Some(tokens))))
	}

	fn cas_now(
		slot: Slot,
		expected_access: &str,
		replacement: SessionTokens,
	) -> CompareAndSwapOutcome {
		let mut guard = slot.write();
		let outcome = super::swap_outcome(guard.as_ref(), expected_access);

		if matches!(outcome, CompareAndSwapOutcome::Updated) {
			*guard = Some(replacement);
		}

		outcome
	}
}
impl CredentialStore for MemoryStore {
	fn load(&self) -> StoreFuture<'_, Option<SessionTokens>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.read().clone()) })
	}

	fn save(&self, tokens: SessionTokens) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = Some(tokens);

			Ok::<_, StoreError>(())
		})
	}

	fn compare_and_swap_access<'a>(
		&'a self,
		expected_access: &'a str,
		replacement: SessionTokens,
	) -> StoreFuture<'a, CompareAndSwapOutcome> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(Self::cas_now(slot, expected_access, replacement)) })
	}

	fn clear(&self) -> StoreFuture<'_, Option<SessionTokens>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.write().take()) })
	}
}
