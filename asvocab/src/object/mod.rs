pub mod activity;
pub mod actor;
pub mod collection;
pub mod document;
pub mod place;
pub mod profile;
pub mod relationship;
pub mod tombstone;

use crate::{
	macros::property,
	property::{PropertySpec, Range, ANY, COLLECTION, IRI, OBJECT, TEXT, TIME},
	BaseType, Capability, Codec,
};

use activity::ActivityType;
use actor::ActorType;
use collection::CollectionType;
use document::DocumentType;

crate::strenum! {
	pub enum ObjectType {
		Object,
		Article,
		Event,
		Note,
		Place,
		Profile,
		Relationship,
		Tombstone;

		Activity(ActivityType),
		Actor(ActorType),
		Collection(CollectionType),
		Document(DocumentType)
	};
}

const VISUAL : &[Range] = &[
	Range::Entity(Capability::Image),
	Range::Entity(Capability::Link),
	Range::Scalar(Codec::AnyUri),
];

pub(crate) static OBJECT_PROPERTIES : &[PropertySpec] = &[
	PropertySpec::functional("id", IRI),
	PropertySpec::many("attachment", ANY),
	PropertySpec::many("attributedTo", ANY),
	PropertySpec::many("audience", ANY),
	PropertySpec::many("bcc", ANY),
	PropertySpec::many("bto", ANY),
	PropertySpec::many("cc", ANY),
	PropertySpec::many("content", TEXT),
	PropertySpec::many("context", ANY),
	PropertySpec::functional("duration", &[Range::Scalar(Codec::Duration), Range::Scalar(Codec::AnyUri)]),
	PropertySpec::functional("endTime", TIME),
	PropertySpec::many("generator", ANY),
	PropertySpec::many("icon", VISUAL),
	PropertySpec::many("image", VISUAL),
	PropertySpec::many("inReplyTo", ANY),
	PropertySpec::functional("likes", COLLECTION),
	PropertySpec::many("location", ANY),
	PropertySpec::functional("mediaType", &[Range::Scalar(Codec::MimeMediaType), Range::Scalar(Codec::AnyUri)]),
	PropertySpec::many("name", TEXT),
	PropertySpec::many("preview", ANY),
	PropertySpec::functional("published", TIME),
	PropertySpec::functional("replies", COLLECTION),
	PropertySpec::functional("shares", COLLECTION),
	PropertySpec::functional("source", OBJECT),
	PropertySpec::functional("startTime", TIME),
	PropertySpec::many("summary", TEXT),
	PropertySpec::many("tag", ANY),
	PropertySpec::many("to", ANY),
	PropertySpec::functional("updated", TIME),
	PropertySpec::many("url", &[Range::Entity(Capability::Link), Range::Scalar(Codec::AnyUri)]),
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub(crate) static OBJECT_MISCELLANEOUS : &[PropertySpec] = &[
	PropertySpec::functional("sensitive", crate::property::FLAG),
	PropertySpec::functional("quoteUrl", IRI),
];

#[cfg(feature = "ostatus")]
pub(crate) static OBJECT_OSTATUS : &[PropertySpec] = &[
	PropertySpec::functional("conversation", ANY),
];

/// property tables shared by every object kind, extensions included
pub(crate) fn layers() -> Vec<&'static [PropertySpec]> {
	#[allow(unused_mut)]
	let mut out = vec![OBJECT_PROPERTIES];
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	out.push(OBJECT_MISCELLANEOUS);
	#[cfg(feature = "ostatus")]
	out.push(OBJECT_OSTATUS);
	out
}

pub trait Object : crate::Base {
	fn object_type(&self) -> Option<ObjectType> {
		match self.base_type() {
			BaseType::Object(x) => Some(x),
			BaseType::Link(_) => None,
		}
	}

	property! { attachment }
	property! { attributed_to::attributedTo }
	property! { audience }
	property! { bcc }
	property! { bto }
	property! { cc }
	property! { content }
	property! { context }
	property! { duration }
	property! { end_time::endTime }
	property! { generator }
	property! { icon }
	property! { image }
	property! { in_reply_to::inReplyTo }
	property! { likes }
	property! { location }
	property! { media_type::mediaType }
	property! { name }
	property! { preview }
	property! { published }
	property! { replies }
	property! { shares }
	property! { source }
	property! { start_time::startTime }
	property! { summary }
	property! { tag }
	property! { to }
	property! { updated }
	property! { url }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	property! { sensitive }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	property! { quote_url::quoteUrl }
	#[cfg(feature = "ostatus")]
	property! { conversation }

	/// the published timestamp, when it was given as a dateTime
	fn published_at(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		match self.published()?.first()? {
			crate::Variant::DateTime(x) => Some(*x),
			_ => None,
		}
	}
}

impl Object for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Entity, Object, ObjectType, Variant};

	#[test]
	fn note_exposes_object_properties() {
		let note = Entity::from_json(json!({
			"type": "Note",
			"id": "https://example.org/notes/1",
			"content": "hello world",
			"published": "2024-06-04T17:09:20Z",
			"attributedTo": "https://example.org/users/alice",
			"image": {"type": "Image", "url": "https://example.org/cat.png"},
		})).unwrap();
		assert_eq!(note.object_type(), Some(ObjectType::Note));
		assert_eq!(note.content().unwrap().strings().collect::<Vec<_>>(), vec!["hello world"]);
		assert_eq!(note.attributed_to().unwrap().ids(), vec!["https://example.org/users/alice"]);
		assert!(note.published_at().is_some());
		assert!(matches!(note.image().unwrap().first(), Some(Variant::Entity(crate::Capability::Image, _))));
	}

	#[test]
	fn icons_that_arent_images_fall_to_link_or_unknown() {
		let note = Entity::from_json(json!({
			"type": "Note",
			"icon": [
				{"type": "Link", "href": "https://example.org/icon.png"},
				{"type": "Video", "url": "https://example.org/icon.mp4"},
			],
		})).unwrap();
		let icon = note.icon().unwrap();
		assert!(icon.values()[0].as_link().is_some());
		assert!(icon.values()[1].is_unknown());
	}

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	#[test]
	fn miscellaneous_terms_are_recognized() {
		let note = Entity::from_json(json!({
			"type": "Note",
			"sensitive": true,
			"quoteUrl": "https://example.org/notes/0",
		})).unwrap();
		assert_eq!(note.sensitive().unwrap().first(), Some(&Variant::Boolean(true)));
		assert_eq!(note.quote_url().unwrap().ids(), vec!["https://example.org/notes/0"]);
		assert!(note.unknown().is_empty());
	}
}
