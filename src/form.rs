//! Raw text forms and the basic field checks that turn them into write payloads.
//!
//! Only presence, number, date and month-range checks happen here; everything else is left
//! to the backend, whose validation errors surface as
//! [`ApiError::Status`](crate::error::ApiError::Status).

// self
use crate::{
	_prelude::*,
	model::{
		Budget, BudgetPeriod, CategoryKind, EntityId, NewBudget, NewCategory, NewTransaction,
		Transaction, format_iso_date, parse_iso_date,
	},
	query::TransactionFilter,
};

/// Which check a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationErrorKind {
	/// The field was blank.
	Required,
	/// The field is not a number.
	NotANumber,
	/// The field is not a `YYYY-MM-DD` date.
	NotADate,
	/// The value is outside the accepted range.
	OutOfRange,
}
impl ValidationErrorKind {
	fn describe(self) -> &'static str {
		match self {
			ValidationErrorKind::Required => "is required",
			ValidationErrorKind::NotANumber => "must be a number",
			ValidationErrorKind::NotADate => "must be a date formatted as YYYY-MM-DD",
			ValidationErrorKind::OutOfRange => "is out of range",
		}
	}
}

/// Field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Field `{field}` {}.", .kind.describe())]
pub struct ValidationError {
	/// Form field name.
	pub field: &'static str,
	/// Failed check.
	pub kind: ValidationErrorKind,
}
impl ValidationError {
	/// Creates a failure for `field`.
	pub const fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
		Self { field, kind }
	}
}

/// Transaction editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionForm {
	/// Amount text.
	pub amount: String,
	/// Selected category id.
	pub category: String,
	/// Optional description.
	pub detail: String,
	/// Booking date text.
	pub date: String,
}
impl TransactionForm {
	/// Pre-fills the editor from an existing transaction.
	pub fn from_transaction(transaction: &Transaction) -> Self {
		Self {
			amount: transaction.amount.to_string(),
			category: transaction.category.id().to_string(),
			detail: transaction.detail.clone(),
			date: format_iso_date(transaction.date),
		}
	}

	/// Checks the fields and builds the payload.
	pub fn validate(&self) -> Result<NewTransaction, ValidationError> {
		Ok(NewTransaction {
			amount: decimal("amount", required("amount", &self.amount)?)?,
			category: id("category", required("category", &self.category)?)?,
			detail: self.detail.trim().to_owned(),
			date: date("date", required("date", &self.date)?)?,
		})
	}
}

/// Category editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
	/// Category name.
	pub name: String,
	/// `income` or `expense`.
	pub kind: String,
}
impl CategoryForm {
	/// Checks the fields and builds the payload.
	pub fn validate(&self) -> Result<NewCategory, ValidationError> {
		let name = required("name", &self.name)?.to_owned();
		let kind = required("type", &self.kind)?
			.parse::<CategoryKind>()
			.map_err(|_| ValidationError::new("type", ValidationErrorKind::OutOfRange))?;

		Ok(NewCategory { name, kind })
	}
}

/// Budget editor contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BudgetForm {
	/// Amount text.
	pub amount: String,
	/// Month text, 1-12.
	pub month: String,
	/// Year text.
	pub year: String,
}
impl BudgetForm {
	/// Pre-fills the editor for `period`, leaving the amount blank.
	pub fn for_period(period: BudgetPeriod) -> Self {
		Self {
			amount: String::new(),
			month: period.month.to_string(),
			year: period.year.to_string(),
		}
	}

	/// Pre-fills the editor with an existing budget.
	pub fn from_budget(budget: &Budget) -> Self {
		Self { amount: budget.amount.to_string(), ..Self::for_period(budget.period()) }
	}

	/// Checks the fields and builds the payload.
	pub fn validate(&self) -> Result<NewBudget, ValidationError> {
		let amount = decimal("amount", required("amount", &self.amount)?)?;
		let month = required("month", &self.month)?
			.parse::<u8>()
			.map_err(|_| ValidationError::new("month", ValidationErrorKind::NotANumber))?;
		let year = required("year", &self.year)?
			.parse::<i32>()
			.map_err(|_| ValidationError::new("year", ValidationErrorKind::NotANumber))?;
		let period = BudgetPeriod::new(month, year)
			.ok_or(ValidationError::new("month", ValidationErrorKind::OutOfRange))?;

		Ok(NewBudget::for_period(period, amount))
	}
}

/// Transaction filter panel contents. Blank fields mean "no filter".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
	/// Category id.
	pub category: String,
	/// Lower date bound.
	pub start_date: String,
	/// Upper date bound.
	pub end_date: String,
	/// Lower amount bound.
	pub min_amount: String,
	/// Upper amount bound.
	pub max_amount: String,
}
impl FilterForm {
	/// Checks the set fields and builds the filter.
	pub fn validate(&self) -> Result<TransactionFilter, ValidationError> {
		Ok(TransactionFilter {
			category: optional(&self.category).map(|raw| id("category", raw)).transpose()?,
			start_date: optional(&self.start_date).map(|raw| date("startDate", raw)).transpose()?,
			end_date: optional(&self.end_date).map(|raw| date("endDate", raw)).transpose()?,
			min_amount: optional(&self.min_amount)
				.map(|raw| decimal("minAmount", raw))
				.transpose()?,
			max_amount: optional(&self.max_amount)
				.map(|raw| decimal("maxAmount", raw))
				.transpose()?,
		})
	}
}

fn optional(raw: &str) -> Option<&str> {
	Some(raw.trim()).filter(|value| !value.is_empty())
}

fn required<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, ValidationError> {
	optional(raw).ok_or(ValidationError::new(field, ValidationErrorKind::Required))
}

fn decimal(field: &'static str, raw: &str) -> Result<Decimal, ValidationError> {
	raw.parse().map_err(|_| ValidationError::new(field, ValidationErrorKind::NotANumber))
}

fn id(field: &'static str, raw: &str) -> Result<EntityId, ValidationError> {
	raw.parse().map_err(|_| ValidationError::new(field, ValidationErrorKind::NotANumber))
}

fn date(field: &'static str, raw: &str) -> Result<Date, ValidationError> {
	parse_iso_date(raw).ok_or(ValidationError::new(field, ValidationErrorKind::NotADate))
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	fn transaction_form() -> TransactionForm {
		TransactionForm {
			amount: "12.50".into(),
			category: "3".into(),
			detail: "  Lunch ".into(),
			date: "2025-04-02".into(),
		}
	}

	#[test]
	fn transaction_form_builds_payload() {
		let payload = transaction_form().validate().expect("Complete form should validate.");

		assert_eq!(payload.amount, Decimal::new(1250, 2));
		assert_eq!(payload.category, 3);
		assert_eq!(payload.detail, "Lunch");
		assert_eq!(payload.date, macros::date!(2025 - 04 - 02));
	}

	#[test]
	fn transaction_form_reports_first_failing_field() {
		let blank_amount = TransactionForm { amount: " ".into(), ..transaction_form() };

		assert_eq!(
			blank_amount.validate(),
			Err(ValidationError::new("amount", ValidationErrorKind::Required))
		);

		let bad_amount = TransactionForm { amount: "12,5x".into(), ..transaction_form() };

		assert_eq!(
			bad_amount.validate(),
			Err(ValidationError::new("amount", ValidationErrorKind::NotANumber))
		);

		let bad_date = TransactionForm { date: "04/02/2025".into(), ..transaction_form() };

		assert_eq!(
			bad_date.validate(),
			Err(ValidationError::new("date", ValidationErrorKind::NotADate))
		);

		let detail_is_optional = TransactionForm { detail: String::new(), ..transaction_form() };

		assert!(detail_is_optional.validate().is_ok());
	}

	#[test]
	fn category_form_requires_known_kind() {
		let form = CategoryForm { name: "Rent".into(), kind: "expense".into() };

		assert_eq!(
			form.validate(),
			Ok(NewCategory { name: "Rent".into(), kind: CategoryKind::Expense })
		);
		assert_eq!(
			CategoryForm { name: String::new(), ..form.clone() }.validate(),
			Err(ValidationError::new("name", ValidationErrorKind::Required))
		);
		assert_eq!(
			CategoryForm { kind: "savings".into(), ..form }.validate(),
			Err(ValidationError::new("type", ValidationErrorKind::OutOfRange))
		);
	}

	#[test]
	fn budget_form_checks_month_range() {
		let form = BudgetForm { amount: "1500".into(), month: "12".into(), year: "2025".into() };

		assert_eq!(
			form.validate(),
			Ok(NewBudget { amount: Decimal::new(1500, 0), month: 12, year: 2025 })
		);
		assert_eq!(
			BudgetForm { month: "13".into(), ..form.clone() }.validate(),
			Err(ValidationError::new("month", ValidationErrorKind::OutOfRange))
		);
		assert_eq!(
			BudgetForm { year: "next".into(), ..form }.validate(),
			Err(ValidationError::new("year", ValidationErrorKind::NotANumber))
		);
	}

	#[test]
	fn budget_form_prefills_from_existing_budget() {
		let budget = Budget { id: 8, amount: Decimal::new(120050, 2), month: 4, year: 2025 };
		let form = BudgetForm::from_budget(&budget);

		assert_eq!(
			form,
			BudgetForm { amount: "1200.50".into(), month: "4".into(), year: "2025".into() }
		);
		assert_eq!(form.validate(), Ok(NewBudget::for_period(budget.period(), budget.amount)));
		assert_eq!(BudgetForm::for_period(budget.period()).amount, "");
	}

	#[test]
	fn filter_form_ignores_blank_fields() {
		assert_eq!(FilterForm::default().validate(), Ok(TransactionFilter::default()));

		let filter = FilterForm {
			category: "2".into(),
			start_date: "2025-01-01".into(),
			max_amount: "99.99".into(),
			..Default::default()
		}
		.validate()
		.expect("Partially filled filter should validate.");

		assert_eq!(filter.category, Some(2));
		assert_eq!(filter.start_date, Some(macros::date!(2025 - 01 - 01)));
		assert_eq!(filter.end_date, None);
		assert_eq!(filter.max_amount, Some(Decimal::new(9999, 2)));
		assert_eq!(
			FilterForm { end_date: "yesterday".into(), ..Default::default() }.validate(),
			Err(ValidationError::new("endDate", ValidationErrorKind::NotADate))
		);
	}

	#[test]
	fn validation_error_message_names_field() {
		let err = ValidationError::new("amount", ValidationErrorKind::NotANumber);

		assert_eq!(err.to_string(), "Field `amount` must be a number.");
	}
}
