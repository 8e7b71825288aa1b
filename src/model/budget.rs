//! Monthly spending limits.

// self
use crate::{_prelude::*, model::EntityId};

/// A calendar month, the unit budgets are set for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BudgetPeriod {
	/// Month, 1-12.
	pub month: u8,
	/// Calendar year.
	pub year: i32,
}
impl BudgetPeriod {
	/// Creates a period after checking the month range.
	pub fn new(month: u8, year: i32) -> Option<Self> {
		Month::try_from(month).ok().map(|_| Self { month, year })
	}

	/// Returns the period containing `date`.
	pub fn containing(date: Date) -> Self {
		Self { month: u8::from(date.month()), year: date.year() }
	}

	/// Returns the current UTC month.
	pub fn current() -> Self {
		Self::containing(OffsetDateTime::now_utc().date())
	}

	/// Returns `true` if `date` falls inside the period.
	pub fn contains(&self, date: Date) -> bool {
		u8::from(date.month()) == self.month && date.year() == self.year
	}

	/// Query pairs for endpoints filtered by period.
	pub fn query_pairs(&self) -> [(&'static str, String); 2] {
		[("month", self.month.to_string()), ("year", self.year.to_string())]
	}
}
impl Display for BudgetPeriod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{:02}/{}", self.month, self.year)
	}
}

/// Budget set for one period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
	/// Backend identifier.
	pub id: EntityId,
	/// Spending limit.
	pub amount: Decimal,
	/// Month, 1-12.
	pub month: u8,
	/// Calendar year.
	pub year: i32,
}
impl Budget {
	/// Returns the period the budget applies to.
	pub fn period(&self) -> BudgetPeriod {
		BudgetPeriod { month: self.month, year: self.year }
	}
}

/// Payload for creating or replacing a budget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewBudget {
	/// Spending limit.
	pub amount: Decimal,
	/// Month, 1-12.
	pub month: u8,
	/// Calendar year.
	pub year: i32,
}
impl NewBudget {
	/// Builds a payload for `period`.
	pub fn for_period(period: BudgetPeriod, amount: Decimal) -> Self {
		Self { amount, month: period.month, year: period.year }
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn period_validates_month_and_matches_dates() {
		assert!(BudgetPeriod::new(0, 2025).is_none());
		assert!(BudgetPeriod::new(13, 2025).is_none());

		let april = BudgetPeriod::new(4, 2025).expect("April should be a valid period.");

		assert!(april.contains(macros::date!(2025 - 04 - 30)));
		assert!(!april.contains(macros::date!(2025 - 05 - 01)));
		assert!(!april.contains(macros::date!(2024 - 04 - 15)));
		assert_eq!(april.to_string(), "04/2025");
		assert_eq!(BudgetPeriod::containing(macros::date!(2025 - 04 - 02)), april);
	}

	#[test]
	fn budget_amount_accepts_decimal_strings() {
		let budget: Budget =
			serde_json::from_str(r#"{"id":1,"amount":"1500.00","month":4,"year":2025,"user":1}"#)
				.expect("Budget payload should deserialize.");

		assert_eq!(budget.amount, Decimal::new(1500, 0));
		assert_eq!(budget.period(), BudgetPeriod { month: 4, year: 2025 });
	}
}
