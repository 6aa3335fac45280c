use crate::{
	macros::property,
	property::{PropertySpec, Range, ANY, IRI},
	BaseType, Codec,
};

#[cfg(feature = "activitypub-miscellaneous-terms")]
crate::strenum! {
	pub enum LinkType {
		Link,
		Hashtag,
		Mention;
	};
}

#[cfg(not(feature = "activitypub-miscellaneous-terms"))]
crate::strenum! {
	pub enum LinkType {
		Link,
		Mention;
	};
}

pub(crate) static LINK : &[PropertySpec] = &[
	PropertySpec::functional("id", IRI),
	PropertySpec::functional("href", IRI),
	PropertySpec::functional("hreflang", &[Range::Scalar(Codec::Bcp47)]),
	PropertySpec::functional("mediaType", &[Range::Scalar(Codec::MimeMediaType)]),
	PropertySpec::many("name", &[Range::Scalar(Codec::String), Range::Scalar(Codec::LangString)]),
	PropertySpec::many("preview", ANY),
	PropertySpec::many("rel", &[Range::Scalar(Codec::LinkRelation)]),
	PropertySpec::functional("height", crate::property::COUNT),
	PropertySpec::functional("width", crate::property::COUNT),
];

pub trait Link : crate::Base {
	fn link_type(&self) -> Option<LinkType> {
		match self.base_type() {
			BaseType::Link(x) => Some(x),
			BaseType::Object(_) => None,
		}
	}

	/// the href as plain string, if it's set
	fn link(&self) -> Option<&str> {
		self.href()?.iris().next().map(|x| x.as_str())
	}

	property! { href }
	property! { hreflang }
	property! { rel }
	property! { height }
	property! { width }
	property! { link_media_type::mediaType }
	property! { link_name::name }
	property! { link_preview::preview }
}

impl Link for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Entity, Link, LinkType};

	#[test]
	fn mention_exposes_link_properties() {
		let mention = Entity::from_json(json!({
			"type": "Mention",
			"href": "https://example.org/users/alice",
			"name": "@alice",
			"rel": ["me", "author"],
			"height": 12,
		})).unwrap();
		assert_eq!(mention.link_type(), Some(LinkType::Mention));
		assert_eq!(mention.link(), Some("https://example.org/users/alice"));
		assert_eq!(mention.link_name().unwrap().strings().collect::<Vec<_>>(), vec!["@alice"]);
		assert_eq!(mention.rel().unwrap().len(), 2);
		assert_eq!(mention.height().unwrap().first(), Some(&crate::Variant::NonNegativeInteger(12)));
	}

	#[test]
	fn link_properties_dont_exist_on_objects() {
		let note = Entity::from_json(json!({"type": "Note"})).unwrap();
		assert!(note.href().is_none());
		assert!(note.link_type().is_none());
	}
}
