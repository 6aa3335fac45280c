use crate::{
	macros::property,
	property::{PropertySpec, Range, ANY},
	Capability, Codec,
};

crate::strenum! {
	pub enum IntransitiveActivityType {
		IntransitiveActivity,
		Arrive,
		Question,
		Travel;
	};
}

pub(crate) static QUESTION : &[PropertySpec] = &[
	PropertySpec::many("oneOf", ANY),
	PropertySpec::many("anyOf", ANY),
	PropertySpec::many("closed", &[
		Range::Entity(Capability::Object),
		Range::Entity(Capability::Link),
		Range::Scalar(Codec::DateTime),
		Range::Scalar(Codec::Boolean),
		Range::Scalar(Codec::AnyUri),
	]),
];

pub trait IntransitiveActivity : super::Activity {
	fn intransitive_activity_type(&self) -> Option<IntransitiveActivityType> {
		match self.activity_type()? {
			super::ActivityType::IntransitiveActivity(x) => Some(x),
			_ => None,
		}
	}
}

impl IntransitiveActivity for crate::Entity {}

/// Polls: exclusive (`oneOf`) or inclusive (`anyOf`) options.
pub trait Question : IntransitiveActivity {
	property! { one_of::oneOf }
	property! { any_of::anyOf }
	property! { closed }

	fn is_question(&self) -> bool {
		matches!(self.intransitive_activity_type(), Some(IntransitiveActivityType::Question))
	}
}

impl Question for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Entity, Question, Variant};

	#[test]
	fn question_options_and_closing() {
		let question = Entity::from_json(json!({
			"type": "Question",
			"name": "cats or dogs?",
			"oneOf": [
				{"type": "Note", "name": "cats"},
				{"type": "Note", "name": "dogs"},
			],
			"closed": "2024-01-01T00:00:00Z",
		})).unwrap();
		assert!(question.is_question());
		assert_eq!(question.one_of().unwrap().len(), 2);
		assert!(question.any_of().unwrap().is_empty());
		assert!(matches!(question.closed().unwrap().first(), Some(Variant::DateTime(_))));

		let closed = Entity::from_json(json!({"type": "Question", "closed": true})).unwrap();
		assert_eq!(closed.closed().unwrap().first(), Some(&Variant::Boolean(true)));
	}

	#[test]
	fn questions_have_no_object() {
		let question = Entity::from_json(json!({
			"type": "Question",
			"object": "https://example.org/notes/1",
		})).unwrap();
		assert!(question.property("object").is_none());
		assert_eq!(question.unknown().get("object"), Some(&json!("https://example.org/notes/1")));
	}
}
