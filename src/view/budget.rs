//! Monthly budget screen.

// self
use crate::{
	_prelude::*,
	form::BudgetForm,
	model::{Budget, BudgetPeriod, BudgetSummary, NewBudget},
	session::ApiClient,
	view::log_failure,
};

const VIEW: &str = "budget";

/// State of the budget screen: the selected month, the budget set for it, and its summary.
#[derive(Clone, Debug)]
pub struct BudgetView {
	client: ApiClient,
	period: BudgetPeriod,
	budget: Option<Budget>,
	summary: Option<BudgetSummary>,
}
impl BudgetView {
	/// Creates a view for the current month; call [`select`](Self::select) to fetch it.
	pub fn new(client: ApiClient) -> Self {
		Self::for_period(client, BudgetPeriod::current())
	}

	/// Creates a view for `period` without fetching.
	pub fn for_period(client: ApiClient, period: BudgetPeriod) -> Self {
		Self { client, period, budget: None, summary: None }
	}

	/// Selected period.
	pub fn period(&self) -> BudgetPeriod {
		self.period
	}

	/// Budget set for the selected period; `None` when none exists or nothing was fetched yet.
	pub fn budget(&self) -> Option<&Budget> {
		self.budget.as_ref()
	}

	/// Summary for the selected period, once fetched.
	pub fn summary(&self) -> Option<&BudgetSummary> {
		self.summary.as_ref()
	}

	/// Editor contents for the selected period, pre-filled with the current amount if any.
	pub fn form(&self) -> BudgetForm {
		match &self.budget {
			Some(budget) => BudgetForm::from_budget(budget),
			None => BudgetForm::for_period(self.period),
		}
	}

	/// Selects `period` and fetches its budget and summary.
	pub async fn select(&mut self, period: BudgetPeriod) -> Result<()> {
		let budget = log_failure(VIEW, "select", self.fetch_budget(period).await)?;
		let summary = log_failure(VIEW, "select", self.client.budget_summary(period).await)?;

		self.period = period;
		self.budget = budget;
		self.summary = Some(summary);

		Ok(())
	}

	/// Re-fetches the budget and summary for the selected period.
	pub async fn reload(&mut self) -> Result<()> {
		self.select(self.period).await
	}

	/// Sets the selected period's budget to `amount`, then re-fetches.
	///
	/// Updates the period's budget when one exists, or creates it otherwise. A view that was
	/// never loaded looks the budget up first.
	pub async fn save(&mut self, amount: Decimal) -> Result<()> {
		let payload = NewBudget::for_period(self.period, amount);
		let existing = match self.summary {
			Some(_) => self.budget.clone(),
			None => log_failure(VIEW, "save", self.fetch_budget(self.period).await)?,
		};
		let saved = match existing {
			Some(budget) => self.client.update_budget(budget.id, &payload).await,
			None => self.client.create_budget(&payload).await,
		};

		log_failure(VIEW, "save", saved)?;

		tracing::info!(period = %self.period, %amount, "Budget saved.");

		self.reload().await
	}

	async fn fetch_budget(&self, period: BudgetPeriod) -> Result<Option<Budget>> {
		let budgets = self.client.list_budgets(Some(period)).await?;

		Ok(budgets.into_iter().find(|budget| budget.period() == period))
	}
}
