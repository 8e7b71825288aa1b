//! Income/expense entries recorded against a category.

// self
use crate::{
	_prelude::*,
	model::{Category, CategoryKind, EntityId, category_kind, iso_date},
};

/// Category reference as returned by the backend: a bare id or the embedded object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
	/// Foreign key only.
	Id(EntityId),
	/// Category embedded in the transaction.
	Embedded(Category),
}
impl CategoryRef {
	/// Returns the referenced category id.
	pub fn id(&self) -> EntityId {
		match self {
			CategoryRef::Id(id) => *id,
			CategoryRef::Embedded(category) => category.id,
		}
	}

	/// Resolves the kind, consulting `categories` when only the id is known.
	pub fn kind(&self, categories: &[Category]) -> Option<CategoryKind> {
		match self {
			CategoryRef::Id(id) => category_kind(categories, *id),
			CategoryRef::Embedded(category) => Some(category.kind),
		}
	}
}

/// Recorded transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
	/// Backend identifier.
	pub id: EntityId,
	/// Amount; always positive, the category decides the direction.
	pub amount: Decimal,
	/// Category the transaction is booked against.
	pub category: CategoryRef,
	/// Free-form description.
	#[serde(default)]
	pub detail: String,
	/// Booking date.
	#[serde(with = "iso_date")]
	pub date: Date,
	/// Day the entry was created on the backend.
	#[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
	pub added_date: Option<Date>,
}

/// Payload for creating or replacing a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
	/// Amount.
	pub amount: Decimal,
	/// Category id.
	pub category: EntityId,
	/// Free-form description.
	pub detail: String,
	/// Booking date.
	#[serde(with = "iso_date")]
	pub date: Date,
}
