//! Transport primitives for backend calls.
//!
//! [`ApiRequest`] is a replayable description of a call (method, relative path, query pairs,
//! JSON body) so the session layer can resubmit it after a token refresh. [`ReqwestHttpClient`]
//! turns it into a reqwest request, attaches the bearer header when asked to, and returns the
//! buffered [`RawResponse`] together with its [`ResponseMetadata`].

// crates.io
use reqwest::header::{AUTHORIZATION, HeaderMap, RETRY_AFTER};
use time::format_description::well_known::Rfc2822;
// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	config::ClientConfig,
	error::{ApiError, ConfigError, TransportError},
};

/// Path fragments identifying endpoints that never carry the bearer header.
pub const AUTH_EXEMPT_SEGMENTS: [&str; 3] = ["/login/", "/token/", "/refresh/"];

const BODY_PREVIEW_LIMIT: usize = 256;

/// Replayable description of a backend call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Path relative to the configured base URL.
	pub path: String,
	/// Query string pairs, in order.
	pub query: Vec<(String, String)>,
	/// Optional JSON body.
	pub body: Option<serde_json::Value>,
}
impl ApiRequest {
	/// Creates a request with no query or body.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), query: Vec::new(), body: None }
	}

	/// Shorthand for a `GET` request.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	/// Shorthand for a `POST` request.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::POST, path)
	}

	/// Shorthand for a `PUT` request.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::PUT, path)
	}

	/// Shorthand for a `DELETE` request.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::DELETE, path)
	}

	/// Appends query pairs.
	pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.query.extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));

		self
	}

	/// Serializes `body` as the JSON payload.
	pub fn with_json<T>(mut self, body: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		self.body = Some(serde_json::to_value(body).map_err(ConfigError::RequestBody)?);

		Ok(self)
	}

	/// Returns `false` for login/refresh endpoints, which must never carry a bearer token.
	pub fn requires_auth(&self) -> bool {
		let path = format!("/{}", self.path.trim_start_matches('/'));

		!AUTH_EXEMPT_SEGMENTS.iter().any(|segment| path.contains(segment))
	}
}

/// Metadata captured from a backend response for error mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Fully buffered backend response.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// Status and header-derived hints.
	pub metadata: ResponseMetadata,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// HTTP status code.
	pub fn status(&self) -> u16 {
		self.metadata.status
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.metadata.status)
	}

	/// Returns `true` for `401 Unauthorized`.
	pub fn is_unauthorized(&self) -> bool {
		self.metadata.status == 401
	}

	/// Decodes the body as JSON, reporting the failing path on mismatch.
	pub fn json<T>(&self) -> Result<T, ApiError>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ApiError::Parse { source, status: self.metadata.status })
	}

	/// Converts a non-2xx response into an [`ApiError::Status`].
	pub fn into_status_error(self) -> ApiError {
		ApiError::Status {
			status: self.metadata.status,
			message: error_message(&self.body),
			retry_after: self.metadata.retry_after,
		}
	}

	/// Passes 2xx responses through and maps the rest to [`ApiError::Status`].
	pub fn error_for_status(self) -> Result<Self, ApiError> {
		if self.is_success() { Ok(self) } else { Err(self.into_status_error()) }
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a rustls-backed client that gives up on any call after `timeout`.
	pub fn with_timeout(timeout: std::time::Duration) -> Result<Self> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self(client))
	}

	/// Sends `request`, attaching `Authorization: Bearer <token>` when `bearer` is provided.
	pub async fn dispatch(
		&self,
		config: &ClientConfig,
		request: &ApiRequest,
		bearer: Option<&TokenSecret>,
	) -> Result<RawResponse> {
		let url = config.endpoint(&request.path)?;
		let mut builder = self.0.request(request.method.clone(), url);

		if !request.query.is_empty() {
			builder = builder.query(&request.query);
		}
		if let Some(body) = request.body.as_ref() {
			builder = builder.json(body);
		}
		if let Some(token) = bearer {
			builder = builder.header(AUTHORIZATION, token.bearer_header());
		}

		let response = builder.send().await.map_err(TransportError::from)?;
		let status = response.status().as_u16();
		let retry_after = parse_retry_after(response.headers());
		let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

		Ok(RawResponse { metadata: ResponseMetadata { status, retry_after }, body })
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(secs.into()));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

/// Pulls a human-readable message out of a backend error body, without a trailing period.
///
/// Django REST Framework reports errors as `{"detail": ...}`, the login view as
/// `{"error": ...}`, and serializer validation as a field → messages map.
fn error_message(body: &[u8]) -> String {
	if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
		for key in ["detail", "error"] {
			if let Some(text) = value.get(key).and_then(serde_json::Value::as_str) {
				return text.trim().trim_end_matches('.').to_owned();
			}
		}
		if value.is_object() {
			return value.to_string();
		}
	}

	let text = String::from_utf8_lossy(body);
	let trimmed = text.trim();

	if trimmed.is_empty() {
		return "empty response body".into();
	}

	trimmed.trim_end_matches('.').chars().take(BODY_PREVIEW_LIMIT).collect()
}
