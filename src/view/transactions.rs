//! Filtered, server-paginated transaction list.

// self
use crate::{
	_prelude::*,
	model::{EntityId, Transaction},
	query::{TransactionFilter, TransactionQuery, total_pages},
	session::ApiClient,
	view::{PaginationIndicator, create_pagination_indicators, log_failure},
};

const VIEW: &str = "transactions";

/// State of the transaction list screen.
#[derive(Clone, Debug)]
pub struct TransactionListView {
	client: ApiClient,
	filter: TransactionFilter,
	page: u32,
	total_pages: u32,
	count: u64,
	transactions: Vec<Transaction>,
}
impl TransactionListView {
	/// Creates an empty view on page 1 with no filter; call [`load`](Self::load) to fill it.
	pub fn new(client: ApiClient) -> Self {
		Self {
			client,
			filter: TransactionFilter::default(),
			page: 1,
			total_pages: 1,
			count: 0,
			transactions: Vec::new(),
		}
	}

	/// Active filter.
	pub fn filter(&self) -> &TransactionFilter {
		&self.filter
	}

	/// Current 1-based page.
	pub fn page(&self) -> u32 {
		self.page
	}

	/// Number of pages for the active filter; at least one.
	pub fn total_pages(&self) -> u32 {
		self.total_pages
	}

	/// Rows matching the active filter across all pages.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// Rows on the current page.
	pub fn transactions(&self) -> &[Transaction] {
		&self.transactions
	}

	/// Fetches `page` with `filter`. On failure the previous rows stay in place.
	pub async fn load(&mut self, page: u32, filter: TransactionFilter) -> Result<()> {
		let query = TransactionQuery::new(page, filter);
		let fetched = log_failure(VIEW, "load", self.client.list_transactions(&query).await)?;

		self.total_pages = total_pages(fetched.count, self.client.config.page_size);
		self.count = fetched.count;
		self.transactions = fetched.results;
		self.page = query.page;
		self.filter = query.filter;

		tracing::debug!(
			page = self.page,
			total_pages = self.total_pages,
			count = self.count,
			"Transactions loaded."
		);

		Ok(())
	}

	/// Switches to `filter` and returns to the first page.
	pub async fn apply_filters(&mut self, filter: TransactionFilter) -> Result<()> {
		self.load(1, filter).await
	}

	/// Drops every filter and returns to the first page.
	pub async fn clear_filters(&mut self) -> Result<()> {
		self.load(1, TransactionFilter::default()).await
	}

	/// Moves to `page`, keeping the active filter.
	pub async fn go_to_page(&mut self, page: u32) -> Result<()> {
		self.load(page, self.filter.clone()).await
	}

	/// Re-fetches the current page, typically after a create or update.
	pub async fn reload(&mut self) -> Result<()> {
		self.go_to_page(self.page).await
	}

	/// Deletes a transaction and re-fetches the current page.
	///
	/// Deleting the last row of the last page steps back one page.
	pub async fn delete(&mut self, id: EntityId) -> Result<()> {
		log_failure(VIEW, "delete", self.client.delete_transaction(id).await)?;

		let page =
			if self.page > 1 && self.transactions.len() == 1 { self.page - 1 } else { self.page };

		self.load(page, self.filter.clone()).await
	}

	/// Pagination bar for the current page.
	pub fn pagination(&self) -> Vec<PaginationIndicator> {
		create_pagination_indicators(
			self.page,
			self.total_pages,
			self.client.config.max_visible_pages,
		)
	}
}
