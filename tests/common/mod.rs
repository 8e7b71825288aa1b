#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use httpmock::MockServer;
use time::{Duration, OffsetDateTime};
// self
use budget_tracker_client::{
	auth::SessionTokens,
	config::ClientConfig,
	ext::RecordingSessionHook,
	session::ApiClient,
	store::{CredentialStore, MemoryStore},
};

pub const STALE_ACCESS: &str = "access-stale";
pub const FRESH_ACCESS: &str = "access-fresh";
pub const REFRESH: &str = "refresh-token";

/// Client wired to a mock backend, with handles on its store and session hook.
pub struct Harness {
	pub client: ApiClient,
	pub store: MemoryStore,
	pub hook: RecordingSessionHook,
}
impl Harness {
	pub async fn stored(&self) -> Option<SessionTokens> {
		self.store.load().await.expect("Memory store load should succeed.")
	}
}

pub fn config_for(server: &MockServer) -> ClientConfig {
	ClientConfig::builder()
		.base_url_str(&server.base_url())
		.expect("Mock server URL should parse.")
		.build()
		.expect("Mock server configuration should validate.")
}

pub fn harness_with(config: ClientConfig, tokens: Option<SessionTokens>) -> Harness {
	let store = tokens.map(MemoryStore::with_tokens).unwrap_or_default();
	let hook = RecordingSessionHook::default();
	let client = ApiClient::new(config, Arc::new(store.clone()))
		.expect("Client should build for the mock server.")
		.with_session_hook(Arc::new(hook.clone()));

	Harness { client, store, hook }
}

/// Harness holding a stale access token and a valid refresh token.
pub fn logged_in(server: &MockServer) -> Harness {
	harness_with(config_for(server), Some(SessionTokens::new(STALE_ACCESS, REFRESH)))
}

pub fn logged_out(server: &MockServer) -> Harness {
	harness_with(config_for(server), None)
}

/// Unsigned JWT whose `exp` claim lies `expires_in` from now.
pub fn jwt_expiring_in(expires_in: Duration) -> String {
	let exp = (OffsetDateTime::now_utc() + expires_in).unix_timestamp();
	let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
	let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"token_type":"access","exp":{exp}}}"#));

	format!("{header}.{payload}.signature")
}

pub fn bearer(token: &str) -> String {
	format!("Bearer {token}")
}
