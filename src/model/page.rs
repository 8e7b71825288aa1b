//! One page of a server-paginated listing.

// self
use crate::_prelude::*;

/// Page of results together with the total row count across all pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page<T> {
	/// Total number of rows matching the query.
	pub count: u64,
	/// Rows on this page.
	pub results: Vec<T>,
}
impl<T> Page<T> {
	/// Returns `true` when the page holds no rows.
	pub fn is_empty(&self) -> bool {
		self.results.is_empty()
	}
}
impl<T> Default for Page<T> {
	fn default() -> Self {
		Self { count: 0, results: Vec::new() }
	}
}
impl<'de, T> Deserialize<'de> for Page<T>
where
	T: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire<T> {
			Envelope { count: u64, results: Vec<T> },
			Bare(Vec<T>),
		}

		Ok(match Wire::deserialize(deserializer)? {
			Wire::Envelope { count, results } => Self { count, results },
			Wire::Bare(results) => Self { count: results.len() as u64, results },
		})
	}
}
