//! Access/refresh token pair persisted between requests, with lifetime hints decoded from the
//! access token's JWT claims.

// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
// self
use crate::{_prelude::*, auth::TokenSecret};

/// Credentials issued by the login endpoint and rotated by the refresh endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionTokens {
	/// Bearer credential attached to authenticated calls.
	pub access: TokenSecret,
	/// Credential exchanged for a new access token.
	pub refresh: TokenSecret,
	/// Expiry read from the access token's `exp` claim, when it is a JWT.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub access_expires_at: Option<OffsetDateTime>,
}
impl SessionTokens {
	/// Builds a token pair, decoding the access token expiry when possible.
	pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
		let access = TokenSecret::new(access);
		let access_expires_at = decode_expiry(access.expose());

		Self { access, refresh: TokenSecret::new(refresh), access_expires_at }
	}

	/// Returns a copy carrying a new access token (and optionally a rotated refresh token).
	pub fn rotate(&self, access: impl Into<String>, refresh: Option<String>) -> Self {
		let refresh = refresh.unwrap_or_else(|| self.refresh.expose().to_owned());

		Self::new(access, refresh)
	}

	/// Returns `true` when the access token expires within `window` of `instant`.
	///
	/// Tokens without a readable expiry never qualify; they are refreshed reactively.
	pub fn expires_within(&self, window: Duration, instant: OffsetDateTime) -> bool {
		match self.access_expires_at {
			Some(expires_at) => expires_at - instant <= window,
			None => false,
		}
	}
}
impl Debug for SessionTokens {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SessionTokens")
			.field("access", &"<redacted>")
			.field("refresh", &"<redacted>")
			.field("access_expires_at", &self.access_expires_at)
			.finish()
	}
}

#[derive(Deserialize)]
struct ExpiryClaim {
	exp: Option<i64>,
}

/// Reads the `exp` claim from a JWT payload without verifying the signature.
fn decode_expiry(token: &str) -> Option<OffsetDateTime> {
	let mut segments = token.split('.');
	let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);

	if segments.next().is_some() {
		return None;
	}

	let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
	let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;

	OffsetDateTime::from_unix_timestamp(claim.exp?).ok()
}
