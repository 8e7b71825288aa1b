mod common;

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use budget_tracker_client::{
	model::{BudgetPeriod, CategoryKind},
	query::TransactionFilter,
	rust_decimal::Decimal,
	view::{
		BudgetView, CategoryFilter, CategoryListView, DashboardView, PaginationIndicator,
		TransactionListView,
	},
};
use common::*;

const TRANSACTIONS: &str = "/api/v1/transactions/";

fn rows(ids: std::ops::RangeInclusive<u64>) -> serde_json::Value {
	ids.map(|id| {
		json!({ "id": id, "amount": "10.00", "category": 1, "detail": "", "date": "2025-04-01" })
	})
	.collect()
}

#[tokio::test]
async fn transaction_list_tracks_pages_and_filters() -> Result<()> {
	let server = MockServer::start_async().await;
	let harness = logged_in(&server);
	let first = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(TRANSACTIONS)
				.query_param("page", "1")
				.query_param_missing("category");
			then.status(200).json_body(json!({ "count": 25, "results": rows(1..=10) }));
		})
		.await;
	let third = server
		.mock_async(|when, then| {
			when.method(GET).path(TRANSACTIONS).query_param("page", "3");
			then.status(200).json_body(json!({ "count": 25, "results": rows(21..=25) }));
		})
		.await;
	let filtered = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(TRANSACTIONS)
				.query_param("page", "1")
				.query_param("category", "1");
			then.status(200).json_body(json!({ "count": 3, "results": rows(1..=3) }));
		})
		.await;
	let mut view = TransactionListView::new(harness.client.clone());

	view.load(0, TransactionFilter::default()).await?;

	assert_eq!(view.page(), 1);
	assert_eq!(view.total_pages(), 3);
	assert_eq!(view.count(), 25);
	assert_eq!(view.transactions().len(), 10);

	view.go_to_page(3).await?;

	assert_eq!(view.page(), 3);
	assert_eq!(view.transactions().len(), 5);
	assert_eq!(
		view.pagination(),
		[
			PaginationIndicator::BackButton(2),
			PaginationIndicator::Page(1),
			PaginationIndicator::Page(2),
			PaginationIndicator::CurrPage(3)
		]
	);

	view.apply_filters(TransactionFilter { category: Some(1), ..Default::default() }).await?;

	assert_eq!(view.page(), 1);
	assert_eq!(view.total_pages(), 1);
	assert_eq!(view.filter().category, Some(1));

	view.clear_filters().await?;

	assert!(view.filter().is_empty());

	first.assert_calls_async(2).await;
	third.assert_calls_async(1).await;
	filtered.assert_calls_async(1).await;

	Ok(())
}

#[tokio::test]
async fn failed_fetch_keeps_previous_rows() -> Result<()> {
	let server = MockServer::start_async().await;
	let harness = logged_in(&server);
	let first = server
		.mock_async(|when, then| {
			when.method(GET).path(TRANSACTIONS).query_param("page", "1");
			then.status(200).json_body(json!({ "count": 15, "results": rows(1..=10) }));
		})
		.await;
	let broken = server
		.mock_async(|when, then| {
			when.method(GET).path(TRANSACTIONS).query_param("page", "2");
			then.status(500).body("Internal Server Error");
		})
		.await;
	let mut view = TransactionListView::new(harness.client.clone());

	view.load(1, TransactionFilter::default()).await?;

	let err = view.go_to_page(2).await.expect_err("Server error should be returned.");

	assert_eq!(err.to_string(), "Backend returned HTTP 500: Internal Server Error.");
	assert_eq!(view.page(), 1);
	assert_eq!(view.transactions().len(), 10);

	first.assert_async().await;
	broken.assert_async().await;

	Ok(())
}

#[tokio::test]
async fn deleting_last_row_steps_back_a_page() -> Result<()> {
	let server = MockServer::start_async().await;
	let harness = logged_in(&server);
	let second_before = server
		.mock_async(|when, then| {
			when.method(GET).path(TRANSACTIONS).query_param("page", "2");
			then.status(200).json_body(json!({ "count": 11, "results": rows(11..=11) }));
		})
		.await;
	let deleted = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/v1/transactions/11/");
			then.status(204);
		})
		.await;
	let first = server
		.mock_async(|when, then| {
			when.method(GET).path(TRANSACTIONS).query_param("page", "1");
			then.status(200).json_body(json!({ "count": 10, "results": rows(1..=10) }));
		})
		.await;
	let mut view = TransactionListView::new(harness.client.clone());

	view.go_to_page(2).await?;
	view.delete(11).await?;

	assert_eq!(view.page(), 1);
	assert_eq!(view.total_pages(), 1);

	second_before.assert_async().await;
	deleted.assert_async().await;
	first.assert_async().await;

	Ok(())
}

#[tokio::test]
async fn budget_save_updates_existing_or_creates() -> Result<()> {
	let server = MockServer::start_async().await;
	let harness = logged_in(&server);
	let april = BudgetPeriod { month: 4, year: 2025 };
	let may = BudgetPeriod { month: 5, year: 2025 };
	let april_budgets = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/").query_param("month", "4");
			then.status(200)
				.json_body(json!([{ "id": 8, "amount": "1000.00", "month": 4, "year": 2025 }]));
		})
		.await;
	let may_budgets = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/").query_param("month", "5");
			then.status(200).json_body(json!([]));
		})
		.await;
	let put = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/api/v1/budgets/8/")
				.json_body(json!({ "amount": "1200", "month": 4, "year": 2025 }));
			then.status(200)
				.json_body(json!({ "id": 8, "amount": "1200.00", "month": 4, "year": 2025 }));
		})
		.await;
	let post = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/v1/budgets/")
				.json_body(json!({ "amount": "800", "month": 5, "year": 2025 }));
			then.status(201)
				.json_body(json!({ "id": 9, "amount": "800.00", "month": 5, "year": 2025 }));
		})
		.await;
	let april_summary = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/summary/").query_param("month", "4");
			then.status(200).json_body(json!({
				"month": 4, "year": 2025, "budget": 1200.0, "actual_expense": 300.0, "remaining": 900.0
			}));
		})
		.await;
	let may_summary = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/summary/").query_param("month", "5");
			then.status(200).json_body(json!({
				"month": 5, "year": 2025, "budget": 800.0, "actual_expense": 0.0, "remaining": 800.0
			}));
		})
		.await;
	let mut view = BudgetView::for_period(harness.client.clone(), april);

	view.save(Decimal::new(1200, 0)).await?;

	let summary = view.summary().expect("Summary should be fetched after saving.");

	assert_eq!(summary.remaining, Decimal::new(900, 0));
	assert_eq!(view.budget().map(|budget| budget.id), Some(8));

	view.select(may).await?;

	assert!(view.budget().is_none());

	view.save(Decimal::new(800, 0)).await?;

	assert_eq!(view.period(), may);
	assert_eq!(view.summary().map(|summary| summary.budget), Some(Decimal::new(800, 0)));

	april_budgets.assert_calls_async(2).await;
	may_budgets.assert_calls_async(2).await;
	put.assert_async().await;
	post.assert_async().await;
	april_summary.assert_async().await;
	may_summary.assert_calls_async(2).await;

	Ok(())
}

#[tokio::test]
async fn budget_view_tells_missing_budget_from_zero_budget() -> Result<()> {
	let server = MockServer::start_async().await;
	let harness = logged_in(&server);
	let march_budgets = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/").query_param("month", "3");
			then.status(200)
				.json_body(json!([{ "id": 4, "amount": "0.00", "month": 3, "year": 2025 }]));
		})
		.await;
	let june_budgets = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/").query_param("month", "6");
			then.status(200).json_body(json!([]));
		})
		.await;
	let summaries = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/budgets/summary/");
			then.status(200).json_body(json!({
				"month": 3, "year": 2025, "budget": 0.0, "actual_expense": 40.0, "remaining": -40.0
			}));
		})
		.await;
	let march = BudgetPeriod { month: 3, year: 2025 };
	let mut view = BudgetView::for_period(harness.client.clone(), march);

	assert_eq!(view.form().amount, "");

	view.reload().await?;

	let budget = view.budget().expect("March has a budget, even if it is zero.");

	assert_eq!(budget.amount, Decimal::ZERO);
	assert_eq!(view.form().amount, "0.00");
	assert_eq!(view.form().month, "3");

	view.select(BudgetPeriod { month: 6, year: 2025 }).await?;

	assert!(view.budget().is_none());
	assert_eq!(view.form().amount, "");
	assert_eq!(view.form().month, "6");

	march_budgets.assert_async().await;
	june_budgets.assert_async().await;
	summaries.assert_calls_async(2).await;

	Ok(())
}

#[tokio::test]
async fn dashboard_and_categories_render_fetched_state() -> Result<()> {
	let server = MockServer::start_async().await;
	let harness = logged_in(&server);
	let summary = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/transactions/summary/");
			then.status(200).json_body(json!({
				"total_income": 2500.0, "total_expense": 900.0, "balance": 1600.0
			}));
		})
		.await;
	let categories = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/categories/");
			then.status(200).json_body(json!([
				{ "id": 1, "name": "Salary", "type": "income" },
				{ "id": 2, "name": "Rent", "type": "expense" },
				{ "id": 3, "name": "Food", "type": "expense" }
			]));
		})
		.await;
	let mut dashboard = DashboardView::new(harness.client.clone());

	assert!(dashboard.summary().is_none());

	dashboard.reload().await?;

	assert_eq!(dashboard.summary().map(|summary| summary.balance), Some(Decimal::new(1600, 0)));

	let mut list = CategoryListView::new(harness.client.clone());

	list.reload().await?;
	list.set_filter(CategoryFilter::Only(CategoryKind::Expense));

	let visible = list.visible().map(|category| category.name.as_str()).collect::<Vec<_>>();

	assert_eq!(visible, ["Rent", "Food"]);
	assert_eq!(list.categories().len(), 3);

	summary.assert_async().await;
	categories.assert_async().await;

	Ok(())
}
