use crate::{
	macros::property,
	property::{PropertySpec, Range, COUNT, PAGE},
	Capability, Codec,
};

pub(crate) static COLLECTION_PAGE : &[PropertySpec] = &[
	PropertySpec::functional("partOf", &[
		Range::Entity(Capability::Collection),
		Range::Entity(Capability::Link),
		Range::Scalar(Codec::AnyUri),
	]),
	PropertySpec::functional("next", PAGE),
	PropertySpec::functional("prev", PAGE),
];

pub(crate) static ORDERED_COLLECTION_PAGE : &[PropertySpec] = &[
	PropertySpec::functional("startIndex", COUNT),
];

pub trait CollectionPage : super::Collection {
	property! { part_of::partOf }
	property! { next }
	property! { prev }
	property! { start_index::startIndex }
}

impl CollectionPage for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{CollectionPage, Entity};

	#[test]
	fn page_navigation() {
		let page = Entity::from_json(json!({
			"type": "OrderedCollectionPage",
			"partOf": "https://example.org/outbox",
			"next": "https://example.org/outbox?page=2",
			"startIndex": 0,
		})).unwrap();
		assert_eq!(page.part_of().unwrap().ids(), vec!["https://example.org/outbox"]);
		assert_eq!(page.next().unwrap().ids(), vec!["https://example.org/outbox?page=2"]);
		assert!(page.prev().unwrap().is_empty());
		assert!(page.start_index().is_some());

		let plain = Entity::from_json(json!({"type": "CollectionPage"})).unwrap();
		assert!(plain.start_index().is_none());
	}
}
