use crate::{macros::property, property::{PropertySpec, ANY, OBJECT}};

pub(crate) static RELATIONSHIP : &[PropertySpec] = &[
	PropertySpec::functional("subject", ANY),
	PropertySpec::many("object", ANY),
	PropertySpec::many("relationship", OBJECT),
];

pub trait Relationship : super::Object {
	property! { subject }
	property! { relationship }
	// named apart from the activity one, both traits are usually in scope
	property! { relationship_object::object }
}

impl Relationship for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Entity, Relationship};

	#[test]
	fn relationship_links_subject_and_object() {
		let rel = Entity::from_json(json!({
			"type": "Relationship",
			"subject": "https://example.org/users/alice",
			"relationship": "http://purl.org/vocab/relationship/acquaintanceOf",
			"object": {"type": "Person", "id": "https://example.org/users/bob"},
		})).unwrap();
		assert_eq!(rel.subject().unwrap().ids(), vec!["https://example.org/users/alice"]);
		assert_eq!(rel.relationship().unwrap().len(), 1);
		assert_eq!(rel.relationship_object().unwrap().ids(), vec!["https://example.org/users/bob"]);
	}
}
