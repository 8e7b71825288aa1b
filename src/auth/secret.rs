//! Credential strings that stay out of logs.

// self
use crate::_prelude::*;

/// JWT or refresh credential. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw credential, for request bodies and headers only.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// `Authorization` header value carrying this credential.
	pub fn bearer_header(&self) -> String {
		format!("Bearer {}", self.0)
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "TokenSecret(<{} bytes redacted>)", self.0.len())
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
