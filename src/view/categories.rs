//! Category list with an income/expense toggle.

// self
use crate::{
	_prelude::*,
	model::{Category, CategoryKind, EntityId, NewCategory},
	session::ApiClient,
	view::log_failure,
};

const VIEW: &str = "categories";

/// Which categories the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
	/// Every category.
	#[default]
	All,
	/// Only one kind.
	Only(CategoryKind),
}
impl CategoryFilter {
	/// Returns `true` if `category` passes the filter.
	pub fn matches(self, category: &Category) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Only(kind) => category.kind == kind,
		}
	}
}

/// State of the category screen.
#[derive(Clone, Debug)]
pub struct CategoryListView {
	client: ApiClient,
	categories: Vec<Category>,
	filter: CategoryFilter,
}
impl CategoryListView {
	/// Creates an empty list; call [`reload`](Self::reload) to fetch it.
	pub fn new(client: ApiClient) -> Self {
		Self { client, categories: Vec::new(), filter: CategoryFilter::All }
	}

	/// Every fetched category, unfiltered.
	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	/// Active kind filter.
	pub fn filter(&self) -> CategoryFilter {
		self.filter
	}

	/// Changes the kind filter; no fetch is needed.
	pub fn set_filter(&mut self, filter: CategoryFilter) {
		self.filter = filter;
	}

	/// Categories passing the active filter.
	pub fn visible(&self) -> impl Iterator<Item = &Category> {
		self.categories.iter().filter(|category| self.filter.matches(category))
	}

	/// Fetches the category list.
	pub async fn reload(&mut self) -> Result<()> {
		self.categories = log_failure(VIEW, "reload", self.client.list_categories().await)?;

		Ok(())
	}

	/// Creates a category and re-fetches the list.
	pub async fn create(&mut self, category: &NewCategory) -> Result<()> {
		log_failure(VIEW, "create", self.client.create_category(category).await)?;

		self.reload().await
	}

	/// Replaces a category and re-fetches the list.
	pub async fn update(&mut self, id: EntityId, category: &NewCategory) -> Result<()> {
		log_failure(VIEW, "update", self.client.update_category(id, category).await)?;

		self.reload().await
	}

	/// Deletes a category and re-fetches the list.
	pub async fn delete(&mut self, id: EntityId) -> Result<()> {
		log_failure(VIEW, "delete", self.client.delete_category(id).await)?;

		self.reload().await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn filter_matches_by_kind() {
		let salary = Category { id: 1, name: "Salary".into(), kind: CategoryKind::Income };
		let rent = Category { id: 2, name: "Rent".into(), kind: CategoryKind::Expense };

		assert!(CategoryFilter::All.matches(&salary));
		assert!(CategoryFilter::All.matches(&rent));
		assert!(CategoryFilter::Only(CategoryKind::Income).matches(&salary));
		assert!(!CategoryFilter::Only(CategoryKind::Income).matches(&rent));
	}
}
