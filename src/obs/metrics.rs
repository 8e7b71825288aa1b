// self
use crate::obs::{CallOutcome, Operation};

/// Records a call outcome via the global metrics recorder (when enabled).
pub fn record_call_outcome(operation: Operation, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"budget_tracker_call_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records the outcome of a finished call from its result.
pub fn record_result<T, E>(operation: Operation, result: &Result<T, E>) {
	let outcome = if result.is_ok() { CallOutcome::Success } else { CallOutcome::Failure };

	record_call_outcome(operation, outcome);
}
