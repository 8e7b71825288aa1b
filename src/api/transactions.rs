//! Transaction endpoints.

// self
use crate::{
	_prelude::*,
	api::{TRANSACTION_SUMMARY_PATH, TRANSACTIONS_PATH, detail_path},
	http::ApiRequest,
	model::{EntityId, NewTransaction, Page, Transaction, TransactionSummary},
	query::TransactionQuery,
	session::ApiClient,
};

impl ApiClient {
	/// Fetches one filtered page of transactions.
	pub async fn list_transactions(&self, query: &TransactionQuery) -> Result<Page<Transaction>> {
		self.send_json(&ApiRequest::get(TRANSACTIONS_PATH).with_query(query.to_pairs())).await
	}

	/// Fetches a single transaction.
	pub async fn get_transaction(&self, id: EntityId) -> Result<Transaction> {
		self.send_json(&ApiRequest::get(detail_path(TRANSACTIONS_PATH, id))).await
	}

	/// Records a transaction.
	pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction> {
		self.send_json(&ApiRequest::post(TRANSACTIONS_PATH).with_json(transaction)?).await
	}

	/// Replaces a transaction.
	pub async fn update_transaction(
		&self,
		id: EntityId,
		transaction: &NewTransaction,
	) -> Result<Transaction> {
		self.send_json(
			&ApiRequest::put(detail_path(TRANSACTIONS_PATH, id)).with_json(transaction)?,
		)
		.await
	}

	/// Deletes a transaction.
	pub async fn delete_transaction(&self, id: EntityId) -> Result<()> {
		self.send_empty(&ApiRequest::delete(detail_path(TRANSACTIONS_PATH, id))).await
	}

	/// Fetches income/expense totals across all of the user's transactions.
	pub async fn transaction_summary(&self) -> Result<TransactionSummary> {
		self.send_json(&ApiRequest::get(TRANSACTION_SUMMARY_PATH)).await
	}
}
