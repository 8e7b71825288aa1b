//! Client configuration: backend location, paging, and refresh timing.
//!
//! Values are assembled through [`ClientConfigBuilder`], which validates them up front so the
//! session layer can join endpoint paths without re-checking the base URL on every call.

// std
use std::{env, net::IpAddr, time::Duration as StdDuration};
// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable holding the backend base URL.
pub const ENV_BASE_URL: &str = "BUDGET_TRACKER_BASE_URL";
/// Environment variable holding the transaction page size.
pub const ENV_PAGE_SIZE: &str = "BUDGET_TRACKER_PAGE_SIZE";
/// Environment variable holding the preemptive refresh window in seconds.
pub const ENV_REFRESH_WINDOW_SECS: &str = "BUDGET_TRACKER_REFRESH_WINDOW_SECS";
/// Environment variable holding the per-request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "BUDGET_TRACKER_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Errors raised while constructing or validating a [`ClientConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ClientConfigError {
	/// Base URL could not be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Raw value that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than http/https or cannot carry paths.
	#[error("Base URL must be an http(s) URL: {url}.")]
	UnsupportedScheme {
		/// Offending URL.
		url: String,
	},
	/// Plain HTTP is only accepted for loopback hosts unless explicitly allowed.
	#[error("Base URL must use HTTPS for non-loopback hosts: {url}.")]
	InsecureBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Page size must be positive.
	#[error("Page size must be greater than zero.")]
	ZeroPageSize,
	/// Visible page count must be positive.
	#[error("The number of visible pages must be greater than zero.")]
	ZeroVisiblePages,
	/// An environment variable held an unusable value.
	#[error("Environment variable {name} has an invalid value `{value}`.")]
	InvalidEnvVar {
		/// Variable name.
		name: &'static str,
		/// Raw value read from the environment.
		value: String,
	},
}

/// Immutable configuration consumed by [`ApiClient`](crate::session::ApiClient).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Backend root; always ends with `/` so relative endpoint paths join beneath it.
	pub base_url: Url,
	/// Transactions per page used to derive the page count.
	pub page_size: u32,
	/// Maximum number of numbered page indicators shown at once.
	pub max_visible_pages: u32,
	/// Refresh ahead of the access token's expiry by this much; `None` keeps refreshes
	/// purely reactive (on 401).
	pub preemptive_refresh_window: Option<Duration>,
	/// Abort any single HTTP call after this long; `None` waits indefinitely.
	pub request_timeout: Option<StdDuration>,
}
impl ClientConfig {
	/// Default number of transactions per page.
	pub const DEFAULT_PAGE_SIZE: u32 = 10;
	/// Default number of visible page indicators.
	pub const DEFAULT_MAX_VISIBLE_PAGES: u32 = 5;

	/// Creates a new builder seeded with defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::new()
	}

	/// Builds a configuration from `BUDGET_TRACKER_*` environment variables, falling back to
	/// defaults for anything unset.
	pub fn from_env() -> Result<Self, ClientConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientConfigError> {
		let mut builder = ClientConfigBuilder::new();

		if let Some(raw) = lookup(ENV_BASE_URL) {
			builder = builder.base_url_str(&raw)?;
		}
		if let Some(raw) = lookup(ENV_PAGE_SIZE) {
			let size = raw
				.trim()
				.parse::<u32>()
				.map_err(|_| ClientConfigError::InvalidEnvVar { name: ENV_PAGE_SIZE, value: raw })?;

			builder = builder.page_size(size);
		}
		if let Some(raw) = lookup(ENV_REFRESH_WINDOW_SECS) {
			let secs = raw.trim().parse::<u32>().map_err(|_| ClientConfigError::InvalidEnvVar {
				name: ENV_REFRESH_WINDOW_SECS,
				value: raw,
			})?;

			builder = builder.preemptive_refresh_window(Duration::seconds(secs.into()));
		}
		if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
			let secs = raw.trim().parse::<u64>().map_err(|_| ClientConfigError::InvalidEnvVar {
				name: ENV_TIMEOUT_SECS,
				value: raw,
			})?;

			builder = builder.request_timeout(StdDuration::from_secs(secs));
		}

		builder.build()
	}

	/// Resolves a relative endpoint path (e.g. `api/v1/budgets/`) against the base URL.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		self.base_url.join(path.trim_start_matches('/')).map_err(|source| {
			ConfigError::InvalidEndpoint { path: path.to_owned(), source }
		})
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: default_base_url(),
			page_size: Self::DEFAULT_PAGE_SIZE,
			max_visible_pages: Self::DEFAULT_MAX_VISIBLE_PAGES,
			preemptive_refresh_window: None,
			request_timeout: None,
		}
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Backend root URL.
	pub base_url: Url,
	/// Transactions per page.
	pub page_size: u32,
	/// Maximum visible page indicators.
	pub max_visible_pages: u32,
	/// Optional preemptive refresh window.
	pub preemptive_refresh_window: Option<Duration>,
	/// Optional per-request timeout.
	pub request_timeout: Option<StdDuration>,
	/// Accept plain HTTP for non-loopback hosts.
	pub allow_insecure_http: bool,
}
impl ClientConfigBuilder {
	/// Creates a builder seeded with defaults (`http://localhost:8000/`, 10 rows per page).
	pub fn new() -> Self {
		Self {
			base_url: default_base_url(),
			page_size: ClientConfig::DEFAULT_PAGE_SIZE,
			max_visible_pages: ClientConfig::DEFAULT_MAX_VISIBLE_PAGES,
			preemptive_refresh_window: None,
			request_timeout: None,
			allow_insecure_http: false,
		}
	}

	/// Sets the backend base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = url;

		self
	}

	/// Parses and sets the backend base URL.
	pub fn base_url_str(self, raw: &str) -> Result<Self, ClientConfigError> {
		let url = Url::parse(raw.trim())
			.map_err(|source| ClientConfigError::InvalidBaseUrl { url: raw.to_owned(), source })?;

		Ok(self.base_url(url))
	}

	/// Overrides the page size.
	pub fn page_size(mut self, size: u32) -> Self {
		self.page_size = size;

		self
	}

	/// Overrides the number of visible page indicators.
	pub fn max_visible_pages(mut self, pages: u32) -> Self {
		self.max_visible_pages = pages;

		self
	}

	/// Enables preemptive refreshes; negative windows are clamped to zero.
	pub fn preemptive_refresh_window(mut self, window: Duration) -> Self {
		self.preemptive_refresh_window =
			Some(if window.is_negative() { Duration::ZERO } else { window });

		self
	}

	/// Sets the per-request timeout.
	pub fn request_timeout(mut self, timeout: StdDuration) -> Self {
		self.request_timeout = Some(timeout);

		self
	}

	/// Accepts plain HTTP for non-loopback hosts.
	pub fn allow_insecure_http(mut self, allow: bool) -> Self {
		self.allow_insecure_http = allow;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		let base_url = normalize_base_url(self.base_url, self.allow_insecure_http)?;

		if self.page_size == 0 {
			return Err(ClientConfigError::ZeroPageSize);
		}
		if self.max_visible_pages == 0 {
			return Err(ClientConfigError::ZeroVisiblePages);
		}

		Ok(ClientConfig {
			base_url,
			page_size: self.page_size,
			max_visible_pages: self.max_visible_pages,
			preemptive_refresh_window: self.preemptive_refresh_window,
			request_timeout: self.request_timeout,
		})
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

fn default_base_url() -> Url {
	Url::parse(DEFAULT_BASE_URL).expect("Default base URL must parse.")
}

fn normalize_base_url(mut url: Url, allow_insecure_http: bool) -> Result<Url, ClientConfigError> {
	match url.scheme() {
		"https" => {},
		"http" if allow_insecure_http || is_loopback(&url) => {},
		"http" => return Err(ClientConfigError::InsecureBaseUrl { url: url.to_string() }),
		_ => return Err(ClientConfigError::UnsupportedScheme { url: url.to_string() }),
	}

	if url.cannot_be_a_base() {
		return Err(ClientConfigError::UnsupportedScheme { url: url.to_string() });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url.set_query(None);
	url.set_fragment(None);

	Ok(url)
}

fn is_loopback(url: &Url) -> bool {
	match url.host_str() {
		Some("localhost") => true,
		Some(host) => host
			.trim_start_matches('[')
			.trim_end_matches(']')
			.parse::<IpAddr>()
			.map(|ip| ip.is_loopback())
			.unwrap_or(false),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_target_local_backend() {
		let config = ClientConfig::builder().build().expect("Default config should validate.");

		assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
		assert_eq!(config.page_size, 10);
		assert_eq!(config.preemptive_refresh_window, None);
		assert_eq!(config.request_timeout, None);
		assert_eq!(config, ClientConfig::default());
	}

	#[test]
	fn base_url_gains_trailing_slash_and_joins_endpoints() {
		let config = ClientConfig::builder()
			.base_url_str("https://budget.example.com/backend")
			.expect("Base URL should parse.")
			.build()
			.expect("HTTPS base URL should validate.");

		assert_eq!(config.base_url.as_str(), "https://budget.example.com/backend/");
		assert_eq!(
			config.endpoint("/api/v1/budgets/").expect("Endpoint should join.").as_str(),
			"https://budget.example.com/backend/api/v1/budgets/",
		);
	}

	#[test]
	fn plain_http_requires_loopback_or_opt_in() {
		let remote = Url::parse("http://budget.example.com/").expect("URL fixture should parse.");
		let err = ClientConfig::builder()
			.base_url(remote.clone())
			.build()
			.expect_err("Plain HTTP to a remote host should be rejected.");

		assert!(matches!(err, ClientConfigError::InsecureBaseUrl { .. }));

		ClientConfig::builder()
			.base_url(remote)
			.allow_insecure_http(true)
			.build()
			.expect("Opt-in should accept plain HTTP.");

		for raw in ["http://127.0.0.1:8000/", "http://[::1]:8000/"] {
			ClientConfig::builder()
				.base_url_str(raw)
				.expect("Loopback URL should parse.")
				.build()
				.expect("Loopback hosts should accept plain HTTP.");
		}
	}

	#[test]
	fn rejects_unsupported_schemes_and_zero_sizes() {
		let err = ClientConfig::builder()
			.base_url_str("ftp://example.com/")
			.expect("URL should parse.")
			.build()
			.expect_err("FTP should be rejected.");

		assert!(matches!(err, ClientConfigError::UnsupportedScheme { .. }));
		assert_eq!(
			ClientConfig::builder().page_size(0).build(),
			Err(ClientConfigError::ZeroPageSize)
		);
		assert_eq!(
			ClientConfig::builder().max_visible_pages(0).build(),
			Err(ClientConfigError::ZeroVisiblePages)
		);
	}

	#[test]
	fn env_lookup_overrides_defaults() {
		let config = ClientConfig::from_lookup(|name| match name {
			ENV_BASE_URL => Some("https://api.example.com".into()),
			ENV_PAGE_SIZE => Some("25".into()),
			ENV_REFRESH_WINDOW_SECS => Some("30".into()),
			ENV_TIMEOUT_SECS => Some("15".into()),
			_ => None,
		})
		.expect("Environment config should validate.");

		assert_eq!(config.base_url.as_str(), "https://api.example.com/");
		assert_eq!(config.page_size, 25);
		assert_eq!(config.preemptive_refresh_window, Some(Duration::seconds(30)));
		assert_eq!(config.request_timeout, Some(StdDuration::from_secs(15)));

		let err = ClientConfig::from_lookup(|name| {
			(name == ENV_PAGE_SIZE).then(|| "many".to_owned())
		})
		.expect_err("Non-numeric page size should be rejected.");

		assert_eq!(
			err,
			ClientConfigError::InvalidEnvVar { name: ENV_PAGE_SIZE, value: "many".into() }
		);
	}
}
