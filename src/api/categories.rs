//! Category endpoints.

// self
use crate::{
	_prelude::*,
	api::{CATEGORIES_PATH, detail_path},
	http::ApiRequest,
	model::{Category, EntityId, NewCategory, Page},
	session::ApiClient,
};

impl ApiClient {
	/// Lists the user's categories.
	pub async fn list_categories(&self) -> Result<Vec<Category>> {
		let page: Page<Category> = self.send_json(&ApiRequest::get(CATEGORIES_PATH)).await?;

		Ok(page.results)
	}

	/// Creates a category.
	pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
		self.send_json(&ApiRequest::post(CATEGORIES_PATH).with_json(category)?).await
	}

	/// Replaces a category.
	pub async fn update_category(&self, id: EntityId, category: &NewCategory) -> Result<Category> {
		self.send_json(&ApiRequest::put(detail_path(CATEGORIES_PATH, id)).with_json(category)?)
			.await
	}

	/// Deletes a category.
	pub async fn delete_category(&self, id: EntityId) -> Result<()> {
		self.send_empty(&ApiRequest::delete(detail_path(CATEGORIES_PATH, id))).await
	}
}
