use crate::{
	macros::property,
	property::{PropertySpec, Range, COLLECTION, FLAG, IRI},
	BaseType, Capability, Codec, ObjectType,
};

crate::strenum! {
	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};
}

const INBOX : &[Range] = &[
	Range::Entity(Capability::OrderedCollection),
	Range::Scalar(Codec::AnyUri),
];

pub(crate) static ACTOR : &[PropertySpec] = &[
	PropertySpec::functional("inbox", INBOX),
	PropertySpec::functional("outbox", INBOX),
	PropertySpec::functional("following", COLLECTION),
	PropertySpec::functional("followers", COLLECTION),
	PropertySpec::functional("liked", COLLECTION),
	PropertySpec::many("streams", COLLECTION),
	PropertySpec::functional("preferredUsername", &[Range::Scalar(Codec::String), Range::Scalar(Codec::LangString)]),
	// endpoint maps carry no type, so embedded ones end up unknown
	PropertySpec::functional("endpoints", IRI),
	PropertySpec::functional("discoverable", FLAG),
];

#[cfg(feature = "activitypub-miscellaneous-terms")]
pub(crate) static ACTOR_MISCELLANEOUS : &[PropertySpec] = &[
	PropertySpec::functional("movedTo", crate::property::OBJECT),
	PropertySpec::functional("manuallyApprovesFollowers", FLAG),
];

#[cfg(feature = "activitypub-counters")]
pub(crate) static ACTOR_COUNTERS : &[PropertySpec] = &[
	PropertySpec::functional("followersCount", crate::property::COUNT),
	PropertySpec::functional("followingCount", crate::property::COUNT),
	PropertySpec::functional("statusesCount", crate::property::COUNT),
];

pub(crate) fn layers() -> Vec<&'static [PropertySpec]> {
	#[allow(unused_mut)]
	let mut out = vec![ACTOR];
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	out.push(ACTOR_MISCELLANEOUS);
	#[cfg(feature = "activitypub-counters")]
	out.push(ACTOR_COUNTERS);
	out
}

pub trait Actor : super::Object {
	fn actor_type(&self) -> Option<ActorType> {
		match self.base_type() {
			BaseType::Object(ObjectType::Actor(x)) => Some(x),
			_ => None,
		}
	}

	property! { inbox }
	property! { outbox }
	property! { following }
	property! { followers }
	property! { liked }
	property! { streams }
	property! { preferred_username::preferredUsername }
	property! { endpoints }
	property! { discoverable }

	#[cfg(feature = "activitypub-miscellaneous-terms")]
	property! { moved_to::movedTo }
	#[cfg(feature = "activitypub-miscellaneous-terms")]
	property! { manually_approves_followers::manuallyApprovesFollowers }

	#[cfg(feature = "activitypub-counters")]
	property! { followers_count::followersCount }
	#[cfg(feature = "activitypub-counters")]
	property! { following_count::followingCount }
	#[cfg(feature = "activitypub-counters")]
	property! { statuses_count::statusesCount }

	/// preferred username as plain string, if one is set
	fn username(&self) -> Option<&str> {
		self.preferred_username()?.strings().next()
	}
}

impl Actor for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Actor, ActorType, Capability, Entity, Variant};

	#[test]
	fn person_with_collections_and_endpoints() {
		let person = Entity::from_json(json!({
			"type": "Person",
			"id": "https://example.org/users/alice",
			"preferredUsername": "alice",
			"preferredUsernameMap": {"en": "alice", "ja": "アリス"},
			"inbox": "https://example.org/users/alice/inbox",
			"outbox": {"type": "OrderedCollection", "totalItems": 3},
			"followers": {"type": "Collection", "totalItems": 10},
			"endpoints": {"sharedInbox": "https://example.org/inbox"},
			"publicKey": {"id": "https://example.org/users/alice#main-key"},
		})).unwrap();
		assert_eq!(person.actor_type(), Some(ActorType::Person));
		assert_eq!(person.username(), Some("alice"));
		assert_eq!(person.preferred_username().unwrap().language("ja"), Some("アリス"));
		assert_eq!(person.inbox().unwrap().ids(), vec!["https://example.org/users/alice/inbox"]);
		assert_eq!(person.outbox().unwrap().first().unwrap().capability(), Some(Capability::OrderedCollection));
		assert_eq!(person.followers().unwrap().first().unwrap().capability(), Some(Capability::Collection));
		assert!(person.endpoints().unwrap().first().is_some_and(Variant::is_unknown));
		assert!(person.unknown().contains_key("publicKey"));
	}

	#[test]
	fn plain_collection_isnt_an_inbox() {
		let person = Entity::from_json(json!({
			"type": "Service",
			"inbox": {"type": "Collection"},
		})).unwrap();
		assert_eq!(person.actor_type(), Some(ActorType::Service));
		assert!(person.inbox().unwrap().first().is_some_and(Variant::is_unknown));
	}
}
