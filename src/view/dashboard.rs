//! Dashboard totals.

// self
use crate::{_prelude::*, model::TransactionSummary, session::ApiClient, view::log_failure};

/// State of the dashboard: overall income, expense and balance.
#[derive(Clone, Debug)]
pub struct DashboardView {
	client: ApiClient,
	summary: Option<TransactionSummary>,
}
impl DashboardView {
	/// Creates an empty dashboard; call [`reload`](Self::reload) to fetch it.
	pub fn new(client: ApiClient) -> Self {
		Self { client, summary: None }
	}

	/// Totals, once fetched.
	pub fn summary(&self) -> Option<&TransactionSummary> {
		self.summary.as_ref()
	}

	/// Fetches the totals.
	pub async fn reload(&mut self) -> Result<()> {
		let summary =
			log_failure("dashboard", "reload", self.client.transaction_summary().await)?;

		self.summary = Some(summary);

		Ok(())
	}
}
