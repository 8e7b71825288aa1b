//! Budget endpoints.

// self
use crate::{
	_prelude::*,
	api::{BUDGET_SUMMARY_PATH, BUDGETS_PATH, detail_path},
	http::ApiRequest,
	model::{Budget, BudgetPeriod, BudgetSummary, EntityId, NewBudget, Page},
	session::ApiClient,
};

impl ApiClient {
	/// Lists budgets, optionally restricted to one period.
	pub async fn list_budgets(&self, period: Option<BudgetPeriod>) -> Result<Vec<Budget>> {
		let mut request = ApiRequest::get(BUDGETS_PATH);

		if let Some(period) = period {
			request = request.with_query(period.query_pairs());
		}

		let page: Page<Budget> = self.send_json(&request).await?;

		Ok(page.results)
	}

	/// Creates a budget.
	pub async fn create_budget(&self, budget: &NewBudget) -> Result<Budget> {
		self.send_json(&ApiRequest::post(BUDGETS_PATH).with_json(budget)?).await
	}

	/// Replaces a budget.
	pub async fn update_budget(&self, id: EntityId, budget: &NewBudget) -> Result<Budget> {
		self.send_json(&ApiRequest::put(detail_path(BUDGETS_PATH, id)).with_json(budget)?).await
	}

	/// Deletes a budget.
	pub async fn delete_budget(&self, id: EntityId) -> Result<()> {
		self.send_empty(&ApiRequest::delete(detail_path(BUDGETS_PATH, id))).await
	}

	/// Fetches budget versus spending for `period`.
	pub async fn budget_summary(&self, period: BudgetPeriod) -> Result<BudgetSummary> {
		self.send_json(&ApiRequest::get(BUDGET_SUMMARY_PATH).with_query(period.query_pairs()))
			.await
	}
}
