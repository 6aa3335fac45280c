pub mod page;

use crate::{
	macros::property,
	property::{PropertySpec, ANY, COUNT, PAGE},
	BaseType, ObjectType, Variant,
};

crate::strenum! {
	pub enum CollectionType {
		Collection,
		CollectionPage,
		OrderedCollection,
		OrderedCollectionPage;
	};
}

pub(crate) static COLLECTION : &[PropertySpec] = &[
	PropertySpec::functional("totalItems", COUNT),
	PropertySpec::functional("current", PAGE),
	PropertySpec::functional("first", PAGE),
	PropertySpec::functional("last", PAGE),
	PropertySpec::many("items", ANY),
];

pub(crate) static ORDERED_COLLECTION : &[PropertySpec] = &[
	PropertySpec::many("orderedItems", ANY),
];

pub trait Collection : super::Object {
	fn collection_type(&self) -> Option<CollectionType> {
		match self.base_type() {
			BaseType::Object(ObjectType::Collection(x)) => Some(x),
			_ => None,
		}
	}

	property! { total_items::totalItems }
	property! { current }
	property! { first }
	property! { last }
	property! { items }
	property! { ordered_items::orderedItems }

	fn total_items_count(&self) -> Option<u64> {
		match self.total_items()?.first()? {
			Variant::NonNegativeInteger(x) => Some(*x),
			_ => None,
		}
	}

	/// items of ordered collections, plain items otherwise
	fn all_items(&self) -> Option<&crate::Slot> {
		self.ordered_items().or_else(|| self.items())
	}
}

impl Collection for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Capability, Collection, CollectionType, Entity};

	#[test]
	fn ordered_collection_with_first_page() {
		let outbox = Entity::from_json(json!({
			"type": "OrderedCollection",
			"id": "https://example.org/users/alice/outbox",
			"totalItems": 2,
			"first": {
				"type": "OrderedCollectionPage",
				"orderedItems": ["https://example.org/notes/1", "https://example.org/notes/2"],
			},
		})).unwrap();
		assert_eq!(outbox.collection_type(), Some(CollectionType::OrderedCollection));
		assert_eq!(outbox.total_items_count(), Some(2));
		let first = outbox.first().unwrap().first().unwrap();
		assert_eq!(first.capability(), Some(Capability::CollectionPage));
		let page = first.entity().unwrap();
		assert_eq!(page.all_items().unwrap().len(), 2);
	}

	#[test]
	fn unordered_collections_have_no_ordered_items() {
		let coll = Entity::from_json(json!({
			"type": "Collection",
			"items": [{"type": "Note"}],
			"orderedItems": [],
		})).unwrap();
		assert!(coll.ordered_items().is_none());
		assert_eq!(coll.all_items().unwrap().len(), 1);
		assert_eq!(coll.unknown().get("orderedItems"), Some(&json!([])));
	}

	#[test]
	fn first_page_must_be_a_page() {
		let coll = Entity::from_json(json!({
			"type": "Collection",
			"first": {"type": "Collection"},
		})).unwrap();
		assert!(coll.first().unwrap().first().is_some_and(crate::Variant::is_unknown));
	}
}
