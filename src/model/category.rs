//! Categories tag every transaction as income or expense.

// self
use crate::{_prelude::*, model::EntityId};

/// Whether a category counts toward income or expenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
	/// Money coming in.
	Income,
	/// Money going out.
	Expense,
}
impl CategoryKind {
	/// Returns the wire label (`income` / `expense`).
	pub const fn as_str(self) -> &'static str {
		match self {
			CategoryKind::Income => "income",
			CategoryKind::Expense => "expense",
		}
	}
}
impl Display for CategoryKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for CategoryKind {
	type Err = UnknownCategoryKind;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"income" => Ok(CategoryKind::Income),
			"expense" => Ok(CategoryKind::Expense),
			_ => Err(UnknownCategoryKind(s.to_owned())),
		}
	}
}

/// Error returned when a label is neither `income` nor `expense`.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown category type `{0}`.")]
pub struct UnknownCategoryKind(pub String);

/// User-defined category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	/// Backend identifier.
	pub id: EntityId,
	/// Display name.
	pub name: String,
	/// Income/expense tag.
	#[serde(rename = "type")]
	pub kind: CategoryKind,
}

/// Payload for creating or replacing a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewCategory {
	/// Display name.
	pub name: String,
	/// Income/expense tag.
	#[serde(rename = "type")]
	pub kind: CategoryKind,
}

/// Looks up a category's kind by id.
pub fn category_kind(categories: &[Category], id: EntityId) -> Option<CategoryKind> {
	categories.iter().find(|category| category.id == id).map(|category| category.kind)
}
