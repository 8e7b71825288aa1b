//! Session-aware API client: bearer attachment, single-flight refresh, and one retry per 401.
//!
//! Every authenticated call goes through [`ApiClient::execute`]. The stored access token is
//! attached as a bearer header; when the backend answers `401`, the client exchanges the stored
//! refresh token for a new access token and resubmits the original request exactly once. A
//! second `401` is surfaced as [`Error::Unauthorized`] without another refresh. Concurrent
//! callers share one refresh guard: whoever acquires it after the access token already changed
//! reuses the rotated token instead of refreshing again. When the refresh itself fails the
//! stored credentials are cleared and the [`SessionHook`] is told to send the user back to
//! login.

mod metrics;

pub use self::metrics::SessionMetrics;

// self
use crate::{
	_prelude::*,
	api::{LOGIN_PATH, REFRESH_PATH},
	auth::{SessionTokens, TokenSecret},
	config::ClientConfig,
	error::ConfigError,
	ext::{LoggingSessionHook, SessionExpiry, SessionHook},
	http::{ApiRequest, RawResponse, ReqwestHttpClient},
	obs::{self, CallOutcome, CallSpan, Operation},
	store::{CompareAndSwapOutcome, CredentialStore},
};

#[derive(Serialize)]
struct LoginRequest<'a> {
	username: &'a str,
	password: &'a str,
}

#[derive(Deserialize)]
struct LoginGrant {
	access: String,
	refresh: String,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
	refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshGrant {
	access: String,
	#[serde(default)]
	refresh: Option<String>,
}

/// Client for the budget tracker backend.
///
/// Clones share the credential store, refresh guard, session hook, and metrics, so a clone can
/// be handed to each view or task.
#[derive(Clone)]
pub struct ApiClient {
	/// Validated client configuration.
	pub config: Arc<ClientConfig>,
	/// HTTP client wrapper used for every outbound request.
	pub http_client: ReqwestHttpClient,
	/// Credential store holding the session's token pair.
	pub store: Arc<dyn CredentialStore>,
	/// Callback invoked when the session cannot be renewed.
	pub hook: Arc<dyn SessionHook>,
	/// Shared counters for refresh outcomes.
	pub session_metrics: Arc<SessionMetrics>,
	refresh_guard: Arc<AsyncMutex<()>>,
}
impl ApiClient {
	/// Creates a client with a reqwest transport honoring
	/// [`ClientConfig::request_timeout`] and a logging session hook.
	pub fn new(config: ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
		let http_client = match config.request_timeout {
			Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
			None => ReqwestHttpClient::default(),
		};

		Ok(Self::with_http_client(config, store, http_client))
	}

	/// Creates a client from `BUDGET_TRACKER_*` environment variables.
	pub fn from_env(store: Arc<dyn CredentialStore>) -> Result<Self> {
		let config = ClientConfig::from_env().map_err(ConfigError::from)?;

		Self::new(config, store)
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		config: ClientConfig,
		store: Arc<dyn CredentialStore>,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self {
			config: Arc::new(config),
			http_client,
			store,
			hook: Arc::new(LoggingSessionHook),
			session_metrics: Default::default(),
			refresh_guard: Default::default(),
		}
	}

	/// Replaces the session hook.
	pub fn with_session_hook(mut self, hook: Arc<dyn SessionHook>) -> Self {
		self.hook = hook;

		self
	}

	/// Exchanges a username/password pair for a token pair and stores it.
	pub async fn login(&self, username: &str, password: &str) -> Result<SessionTokens> {
		const OP: Operation = Operation::Login;

		let span = CallSpan::new(OP, "login").with_path(LOGIN_PATH);

		obs::record_call_outcome(OP, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request =
					ApiRequest::post(LOGIN_PATH).with_json(&LoginRequest { username, password })?;
				let response = self.http_client.dispatch(&self.config, &request, None).await?;

				// The backend reports bad credentials as 400.
				if matches!(response.status(), 400 | 401) {
					return Err(Error::InvalidCredentials);
				}

				let grant: LoginGrant = response.error_for_status()?.json()?;
				let tokens = SessionTokens::new(grant.access, grant.refresh);

				self.store.save(tokens.clone()).await?;

				Ok(tokens)
			})
			.await;

		match &result {
			Ok(_) => tracing::info!(username, "Logged in."),
			Err(err) => tracing::warn!(username, error = %err, "Login failed."),
		}

		obs::record_result(OP, &result);

		result
	}

	/// Drops the stored credentials.
	pub async fn logout(&self) -> Result<()> {
		self.store.clear().await?;

		tracing::info!("Logged out.");

		Ok(())
	}

	/// Returns `true` when credentials are stored.
	pub async fn is_authenticated(&self) -> Result<bool> {
		Ok(self.store.load().await?.is_some())
	}

	/// Forces a refresh of the stored access token under the single-flight guard.
	pub async fn refresh_access_token(&self) -> Result<SessionTokens> {
		let _singleflight = self.refresh_guard.lock().await;
		let Some(current) = self.store.load().await? else {
			return Err(self.expire_session("no stored credentials to refresh").await);
		};

		self.refresh_locked(current, "refresh_access_token").await
	}

	/// Sends `request`, refreshing and retrying once if the backend rejects the access token.
	///
	/// Non-2xx responses other than the handled `401` become
	/// [`ApiError::Status`](crate::error::ApiError::Status).
	pub async fn execute(&self, request: &ApiRequest) -> Result<RawResponse> {
		const OP: Operation = Operation::Request;

		let span = CallSpan::new(OP, "execute").with_path(&request.path);

		obs::record_call_outcome(OP, CallOutcome::Attempt);

		let result = span.instrument(self.execute_with_retry(request)).await;

		if let Err(err) = &result {
			tracing::warn!(
				method = %request.method,
				path = %request.path,
				error = %err,
				"Backend call failed."
			);
		}

		obs::record_result(OP, &result);

		result
	}

	/// Sends `request` and decodes the JSON response body.
	pub async fn send_json<T>(&self, request: &ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		Ok(self.execute(request).await?.json()?)
	}

	/// Sends `request` and discards the response body.
	pub async fn send_empty(&self, request: &ApiRequest) -> Result<()> {
		self.execute(request).await.map(|_| ())
	}

	async fn execute_with_retry(&self, request: &ApiRequest) -> Result<RawResponse> {
		if !request.requires_auth() {
			let response = self.http_client.dispatch(&self.config, request, None).await?;

			return Ok(response.error_for_status()?);
		}

		let bearer = self.bearer_for_dispatch().await?;
		let response = self.http_client.dispatch(&self.config, request, bearer.as_ref()).await?;

		if !response.is_unauthorized() {
			return Ok(response.error_for_status()?);
		}

		tracing::debug!(
			path = %request.path,
			"Access token rejected; refreshing before one retry."
		);

		let fresh = self.renew_after_unauthorized(bearer.as_ref()).await?;

		self.session_metrics.record_unauthorized_retry();

		let retried = self.http_client.dispatch(&self.config, request, Some(&fresh)).await?;

		if retried.is_unauthorized() {
			return Err(Error::Unauthorized);
		}

		Ok(retried.error_for_status()?)
	}

	/// Picks the token to attach, renewing first when it is inside the preemptive window.
	async fn bearer_for_dispatch(&self) -> Result<Option<TokenSecret>> {
		let Some(tokens) = self.store.load().await? else {
			return Ok(None);
		};
		let Some(window) = self.config.preemptive_refresh_window else {
			return Ok(Some(tokens.access));
		};

		if !tokens.expires_within(window, OffsetDateTime::now_utc()) {
			return Ok(Some(tokens.access));
		}

		let _singleflight = self.refresh_guard.lock().await;

		match self.store.load().await? {
			Some(current) if current.access != tokens.access => Ok(Some(current.access)),
			Some(current) => self
				.refresh_locked(current, "preemptive")
				.await
				.map(|rotated| Some(rotated.access)),
			None => Ok(None),
		}
	}

	/// Resolves the token for the single retry after `stale` was rejected.
	async fn renew_after_unauthorized(&self, stale: Option<&TokenSecret>) -> Result<TokenSecret> {
		let _singleflight = self.refresh_guard.lock().await;
		let Some(current) = self.store.load().await? else {
			return Err(match stale {
				// Whoever cleared the credentials (logout or a failed refresh) already handled it.
				Some(_) => Error::SessionExpired {
					reason: "credentials were cleared while the request was in flight".into(),
				},
				None => self.expire_session("no stored credentials").await,
			});
		};

		if stale.is_none_or(|sent| *sent != current.access) {
			return Ok(current.access);
		}

		self.refresh_locked(current, "unauthorized").await.map(|rotated| rotated.access)
	}

	/// Exchanges the refresh token and rotates the store. Callers must hold the refresh guard.
	async fn refresh_locked(
		&self,
		current: SessionTokens,
		stage: &'static str,
	) -> Result<SessionTokens> {
		const OP: Operation = Operation::Refresh;

		let span = CallSpan::new(OP, stage).with_path(REFRESH_PATH);

		obs::record_call_outcome(OP, CallOutcome::Attempt);
		self.session_metrics.record_attempt();

		let result = span
			.instrument(async {
				let rotated = match self.exchange_refresh(&current).await {
					Ok(rotated) => rotated,
					Err(err) => {
						self.session_metrics.record_failure();

						return Err(self.expire_session(format!("refresh failed: {err}")).await);
					},
				};
				let outcome = self
					.store
					.compare_and_swap_access(current.access.expose(), rotated.clone())
					.await
					.inspect_err(|_| self.session_metrics.record_failure())?;

				match outcome {
					CompareAndSwapOutcome::Updated => {
						self.session_metrics.record_success();

						Ok(rotated)
					},
					CompareAndSwapOutcome::AccessMismatch => {
						// A login replaced the credentials mid-refresh; the newer pair wins.
						self.session_metrics.record_success();

						self.store.load().await?.ok_or_else(|| Error::SessionExpired {
							reason: "credentials were cleared during refresh".into(),
						})
					},
					CompareAndSwapOutcome::Missing => {
						self.session_metrics.record_failure();

						Err(Error::SessionExpired {
							reason: "credentials were cleared during refresh".into(),
						})
					},
				}
			})
			.await;

		obs::record_result(OP, &result);

		result
	}

	async fn exchange_refresh(&self, current: &SessionTokens) -> Result<SessionTokens> {
		let request = ApiRequest::post(REFRESH_PATH)
			.with_json(&RefreshRequest { refresh: current.refresh.expose() })?;
		let response = self.http_client.dispatch(&self.config, &request, None).await?;
		let grant: RefreshGrant = response.error_for_status()?.json()?;

		Ok(current.rotate(grant.access, grant.refresh))
	}

	/// Clears credentials, notifies the hook, and returns the error to surface.
	async fn expire_session(&self, reason: impl Into<String>) -> Error {
		let expiry = SessionExpiry::new(reason);

		if let Err(err) = self.store.clear().await {
			tracing::warn!(error = %err, "Failed to clear stored credentials.");
		}

		tracing::warn!(reason = %expiry.reason, "Session could not be renewed; login required.");

		self.hook.session_expired(&expiry);

		Error::SessionExpired { reason: expiry.reason }
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("config", &self.config)
			.field("session_metrics", &self.session_metrics)
			.finish()
	}
}
