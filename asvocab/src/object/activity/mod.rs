pub mod accept;
pub mod ignore;
pub mod intransitive;
pub mod offer;
pub mod reject;

use crate::{
	macros::property,
	property::{PropertySpec, ANY},
	BaseType, ObjectType,
};

use accept::AcceptType;
use ignore::IgnoreType;
use intransitive::IntransitiveActivityType;
use offer::OfferType;
use reject::RejectType;

crate::strenum! {
	pub enum ActivityType {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};
}

pub(crate) static ACTIVITY : &[PropertySpec] = &[
	PropertySpec::many("actor", ANY),
	PropertySpec::many("instrument", ANY),
	PropertySpec::many("origin", ANY),
	PropertySpec::many("result", ANY),
	PropertySpec::many("target", ANY),
];

pub(crate) static TRANSITIVE : &[PropertySpec] = &[
	PropertySpec::many("object", ANY),
];

pub trait Activity : super::Object {
	fn activity_type(&self) -> Option<ActivityType> {
		match self.base_type() {
			BaseType::Object(ObjectType::Activity(x)) => Some(x),
			_ => None,
		}
	}

	property! { actor }
	property! { instrument }
	property! { origin }
	property! { result }
	property! { target }
	// only transitive activities carry an object
	property! { object }
}

impl Activity for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Activity, ActivityType, Capability, Entity, Object, Variant};

	#[test]
	fn dislike_with_mention_actor_lands_in_link_branch() {
		let dislike = Entity::from_json(json!({
			"type": "Dislike",
			"actor": {"type": "Mention", "href": "https://example.org/users/alice"},
			"object": {"type": "Note", "content": "bad take"},
		})).unwrap();
		assert_eq!(dislike.activity_type(), Some(ActivityType::Dislike));

		let actor = dislike.actor().unwrap();
		assert_eq!(actor.len(), 1);
		assert_eq!(actor.first().unwrap().capability(), Some(Capability::Link));
		assert_eq!(actor.ids(), vec!["https://example.org/users/alice"]);

		let object = dislike.object().unwrap().first().and_then(Variant::as_object).unwrap();
		assert_eq!(object.content().unwrap().strings().collect::<Vec<_>>(), vec!["bad take"]);
	}

	#[test]
	fn nested_activity_types() {
		let block = Entity::from_json(json!({"type": "Block", "object": "https://example.org/users/bob"})).unwrap();
		assert_eq!(
			block.activity_type(),
			Some(ActivityType::Ignore(crate::IgnoreType::Block)),
		);
		assert_eq!(crate::Ignore::ignore_type(&block), Some(crate::IgnoreType::Block));
		assert_eq!(crate::Accept::accept_type(&block), None);
		assert_eq!(block.object().unwrap().ids(), vec!["https://example.org/users/bob"]);
	}

	#[test]
	fn objects_have_no_activity_properties() {
		let note = Entity::from_json(json!({"type": "Note"})).unwrap();
		assert!(note.actor().is_none());
		assert!(note.activity_type().is_none());
	}
}
