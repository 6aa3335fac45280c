use crate::{Collection, Link, Object, Variant};

fn total_items(slot: Option<&crate::Slot>) -> Option<i32> {
	let count = slot?
		.first()?
		.entity()?
		.total_items_count()?
		.min(i32::MAX as u64)
		as i32;
	Some(count)
}

fn url_of(slot: Option<&crate::Slot>) -> Option<String> {
	match slot?.first()? {
		Variant::Entity(crate::Capability::Link, link) => Some(link.link()?.to_string()),
		Variant::Entity(_, image) => image.url()?.first()?.id().map(|x| x.to_string()),
		x => x.id().map(|x| x.to_string()),
	}
}

pub trait Shortcuts : crate::Object {
	fn likes_count(&self) -> Option<i32> {
		total_items(self.likes())
	}

	fn shares_count(&self) -> Option<i32> {
		total_items(self.shares())
	}

	fn replies_count(&self) -> Option<i32> {
		total_items(self.replies())
	}

	fn image_url(&self) -> Option<String> {
		url_of(self.image())
	}

	fn icon_url(&self) -> Option<String> {
		url_of(self.icon())
	}
}

impl<T: crate::Object> Shortcuts for T {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::Shortcuts;
	use crate::Entity;

	#[test]
	fn counters_come_from_embedded_collections() {
		let note = Entity::from_json(json!({
			"type": "Note",
			"likes": {"type": "Collection", "totalItems": 3},
			"shares": {"type": "OrderedCollection", "totalItems": 1},
			"replies": "https://example.org/notes/1/replies",
		})).unwrap();
		assert_eq!(note.likes_count(), Some(3));
		assert_eq!(note.shares_count(), Some(1));
		assert_eq!(note.replies_count(), None);
	}

	#[test]
	fn image_and_icon_urls() {
		let person = Entity::from_json(json!({
			"type": "Person",
			"icon": {"type": "Image", "url": "https://example.org/avatar.png"},
			"image": {"type": "Link", "href": "https://example.org/banner.png"},
		})).unwrap();
		assert_eq!(person.icon_url().as_deref(), Some("https://example.org/avatar.png"));
		assert_eq!(person.image_url().as_deref(), Some("https://example.org/banner.png"));

		let bare = Entity::from_json(json!({"type": "Note", "icon": "https://example.org/icon.png"})).unwrap();
		assert_eq!(bare.icon_url().as_deref(), Some("https://example.org/icon.png"));
	}
}
