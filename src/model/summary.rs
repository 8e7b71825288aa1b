//! Aggregates shown on the dashboard and the budget page.
//!
//! The backend computes both summaries itself; the local versions here reproduce its rules so a
//! front-end can derive them from already-fetched rows.

// self
use crate::{
	_prelude::*,
	model::{Budget, BudgetPeriod, Category, CategoryKind, Transaction},
};

/// Income, expense and balance totals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
	/// Sum of income transactions.
	pub total_income: Decimal,
	/// Sum of expense transactions.
	pub total_expense: Decimal,
	/// `total_income - total_expense`.
	pub balance: Decimal,
}
impl TransactionSummary {
	/// Totals `transactions` by category kind. Rows whose category cannot be resolved are skipped.
	pub fn from_transactions(transactions: &[Transaction], categories: &[Category]) -> Self {
		let mut total_income = Decimal::ZERO;
		let mut total_expense = Decimal::ZERO;

		for transaction in transactions {
			match transaction.category.kind(categories) {
				Some(CategoryKind::Income) => total_income += transaction.amount,
				Some(CategoryKind::Expense) => total_expense += transaction.amount,
				None => tracing::debug!(
					transaction = transaction.id,
					category = transaction.category.id(),
					"Skipping transaction with unknown category."
				),
			}
		}

		Self { total_income, total_expense, balance: total_income - total_expense }
	}
}

/// Budget versus actual spending for one month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
	/// Month, 1-12.
	pub month: u8,
	/// Calendar year.
	pub year: i32,
	/// Budgeted amount; zero when no budget is set.
	pub budget: Decimal,
	/// Expenses booked in the period.
	pub actual_expense: Decimal,
	/// `budget - actual_expense`; negative when over budget.
	pub remaining: Decimal,
}
impl BudgetSummary {
	/// Computes the summary for `period` from budgets and transactions already in hand.
	pub fn compute(
		period: BudgetPeriod,
		budgets: &[Budget],
		transactions: &[Transaction],
		categories: &[Category],
	) -> Self {
		let budget = budgets
			.iter()
			.find(|budget| budget.period() == period)
			.map_or(Decimal::ZERO, |budget| budget.amount);
		let actual_expense = transactions
			.iter()
			.filter(|transaction| period.contains(transaction.date))
			.filter(|transaction| {
				transaction.category.kind(categories) == Some(CategoryKind::Expense)
			})
			.map(|transaction| transaction.amount)
			.sum::<Decimal>();

		Self {
			month: period.month,
			year: period.year,
			budget,
			actual_expense,
			remaining: budget - actual_expense,
		}
	}

	/// Returns the period the summary covers.
	pub fn period(&self) -> BudgetPeriod {
		BudgetPeriod { month: self.month, year: self.year }
	}

	/// Returns `true` when spending exceeds the budget.
	pub fn is_over_budget(&self) -> bool {
		self.remaining.is_sign_negative() && !self.remaining.is_zero()
	}

	/// Spent fraction of the budget, or `None` when no budget is set.
	pub fn utilization(&self) -> Option<Decimal> {
		self.actual_expense.checked_div(self.budget)
	}
}
