//! Typed wrappers over the backend's REST endpoints.
//!
//! Every call goes through [`ApiClient::execute`](crate::session::ApiClient::execute), so each
//! one inherits bearer attachment and the refresh-on-401 retry.

pub mod budgets;
pub mod categories;
pub mod transactions;

// self
use crate::model::EntityId;

/// Login endpoint; exempt from bearer attachment.
pub const LOGIN_PATH: &str = "api/v1/auth/login/";
/// Token refresh endpoint; exempt from bearer attachment.
pub const REFRESH_PATH: &str = "api/v1/auth/refresh/";
/// Category collection.
pub const CATEGORIES_PATH: &str = "api/v1/categories/";
/// Transaction collection.
pub const TRANSACTIONS_PATH: &str = "api/v1/transactions/";
/// Income/expense totals.
pub const TRANSACTION_SUMMARY_PATH: &str = "api/v1/transactions/summary/";
/// Budget collection.
pub const BUDGETS_PATH: &str = "api/v1/budgets/";
/// Budget versus spending for one month.
pub const BUDGET_SUMMARY_PATH: &str = "api/v1/budgets/summary/";

/// Path of a single resource inside `collection`.
pub fn detail_path(collection: &str, id: EntityId) -> String {
	format!("{collection}{id}/")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::http::ApiRequest;

	#[test]
	fn detail_paths_keep_trailing_slash() {
		assert_eq!(detail_path(TRANSACTIONS_PATH, 42), "api/v1/transactions/42/");
		assert_eq!(detail_path(BUDGETS_PATH, 1), "api/v1/budgets/1/");
	}

	#[test]
	fn only_auth_endpoints_skip_the_bearer() {
		assert!(!ApiRequest::post(LOGIN_PATH).requires_auth());
		assert!(!ApiRequest::post(REFRESH_PATH).requires_auth());

		for path in [
			CATEGORIES_PATH,
			TRANSACTIONS_PATH,
			TRANSACTION_SUMMARY_PATH,
			BUDGETS_PATH,
			BUDGET_SUMMARY_PATH,
		] {
			assert!(ApiRequest::get(path).requires_auth(), "{path} should carry the bearer.");
		}
	}
}
