//! Client-level error types shared across the session layer, stores, and endpoints.

// self
use crate::{_prelude::*, config::ClientConfigError, form::ValidationError, store::StoreError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Credential storage failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Backend answered with an error status or an unreadable body.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// User input failed the basic field checks.
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// Login rejected the supplied username/password pair.
	#[error("Invalid credentials.")]
	InvalidCredentials,
	/// The request was still rejected after the single refresh-and-retry cycle.
	#[error("Request was rejected as unauthorized after refreshing the session.")]
	Unauthorized,
	/// The session could not be renewed; stored credentials were cleared.
	#[error("Session expired: {reason}.")]
	SessionExpired {
		/// Why the session could not be renewed.
		reason: String,
	},
}
impl Error {
	/// Returns `true` if the backend reported the resource as missing.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Api(api) if api.is_not_found())
	}
}

/// Configuration and request-construction failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Client configuration failed validation.
	#[error(transparent)]
	Client(#[from] ClientConfigError),
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint path could not be joined onto the base URL.
	#[error("Endpoint path `{path}` cannot be resolved against the base URL.")]
	InvalidEndpoint {
		/// Relative path that failed to resolve.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request payload could not be encoded as JSON.
	#[error("Request body could not be serialized.")]
	RequestBody(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Failures reported by the backend after a response was received.
#[derive(Debug, ThisError)]
pub enum ApiError {
	/// Backend returned a non-success status.
	#[error("Backend returned HTTP {status}: {message}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Message extracted from the error body (or a preview of it).
		message: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Backend responded with JSON that does not match the expected shape.
	#[error("Backend returned malformed JSON.")]
	Parse {
		/// Structured parsing failure, including the failing JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl ApiError {
	/// Returns the HTTP status associated with the failure.
	pub fn status(&self) -> u16 {
		match self {
			Self::Status { status, .. } | Self::Parse { status, .. } => *status,
		}
	}

	/// Returns `true` for `404 Not Found` responses.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Status { status: 404, .. })
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
