use crate::{macros::property, property::{PropertySpec, OBJECT}};

pub(crate) static PROFILE : &[PropertySpec] = &[
	PropertySpec::functional("describes", OBJECT),
];

pub trait Profile : super::Object {
	property! { describes }
}

impl Profile for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{Entity, Profile};

	#[test]
	fn profile_describes_an_embedded_person() {
		let profile = Entity::from_json(json!({
			"type": "Profile",
			"summary": "Sally's profile",
			"describes": {"type": "Person", "name": "Sally Smith"},
		})).unwrap();
		let described = profile.describes().unwrap().first().and_then(crate::Variant::as_object).unwrap();
		assert_eq!(described.kind().as_str(), "Person");
	}
}
