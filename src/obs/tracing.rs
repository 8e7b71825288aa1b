// crates.io
use tracing::{Instrument, Span, instrument::Instrumented};
// self
use crate::{_prelude::*, obs::Operation};

/// A span builder used by session-layer calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	span: Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		let span = tracing::info_span!(
			"budget_tracker.call",
			operation = operation.as_str(),
			stage,
			path = tracing::field::Empty,
		);

		Self { span }
	}

	/// Records the request path on the span.
	pub fn with_path(self, path: &str) -> Self {
		self.span.record("path", path);

		self
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		fut.instrument(self.span.clone())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::{CallSpan, Operation};

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(Operation::Refresh, "instrument_wraps_future").with_path("x/");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
