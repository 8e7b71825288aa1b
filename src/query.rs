//! Query-string builder for the paginated, filterable transaction listing.

// self
use crate::{
	_prelude::*,
	model::{EntityId, format_iso_date},
};

/// Optional server-side filters for the transaction listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
	/// Only rows booked against this category.
	pub category: Option<EntityId>,
	/// Inclusive lower date bound.
	pub start_date: Option<Date>,
	/// Inclusive upper date bound.
	pub end_date: Option<Date>,
	/// Inclusive lower amount bound.
	pub min_amount: Option<Decimal>,
	/// Inclusive upper amount bound.
	pub max_amount: Option<Decimal>,
}
impl TransactionFilter {
	/// Returns `true` when no filter is set.
	pub fn is_empty(&self) -> bool {
		self == &Self::default()
	}

	/// Query pairs for the set filters, using the backend's camelCase names.
	pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();

		if let Some(category) = self.category {
			pairs.push(("category", category.to_string()));
		}
		if let Some(date) = self.start_date {
			pairs.push(("startDate", format_iso_date(date)));
		}
		if let Some(date) = self.end_date {
			pairs.push(("endDate", format_iso_date(date)));
		}
		if let Some(amount) = self.min_amount {
			pairs.push(("minAmount", amount.to_string()));
		}
		if let Some(amount) = self.max_amount {
			pairs.push(("maxAmount", amount.to_string()));
		}

		pairs
	}
}

/// One page request against the transaction listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionQuery {
	/// 1-based page number.
	pub page: u32,
	/// Filters applied to every page.
	pub filter: TransactionFilter,
}
impl TransactionQuery {
	/// Creates a query, clamping page `0` to `1`.
	pub fn new(page: u32, filter: TransactionFilter) -> Self {
		Self { page: page.max(1), filter }
	}

	/// Query pairs in wire order: `page` first, then the set filters.
	pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![("page", self.page.max(1).to_string())];

		pairs.extend(self.filter.to_pairs());

		pairs
	}
}
impl Default for TransactionQuery {
	fn default() -> Self {
		Self::new(1, TransactionFilter::default())
	}
}

/// Number of pages needed for `count` rows; an empty listing still has one page.
pub fn total_pages(count: u64, page_size: u32) -> u32 {
	let page_size = u64::from(page_size.max(1));

	u32::try_from(count.div_ceil(page_size)).unwrap_or(u32::MAX).max(1)
}
