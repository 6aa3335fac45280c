use crate::{
	macros::property,
	property::{PropertySpec, Range, TIME},
	Capability, Codec,
};

pub(crate) static TOMBSTONE : &[PropertySpec] = &[
	PropertySpec::many("formerType", &[Range::Entity(Capability::Object), Range::Scalar(Codec::String)]),
	PropertySpec::functional("deleted", TIME),
];

pub trait Tombstone : super::Object {
	property! { former_type::formerType }
	property! { deleted }

	/// former type tags that name a vocabulary type
	fn former_kinds(&self) -> Vec<crate::BaseType> {
		let Some(slot) = self.former_type() else { return Vec::new() };
		slot.strings()
			.filter_map(|x| crate::BaseType::try_from(x).ok())
			.collect()
	}
}

impl Tombstone for crate::Entity {}

#[cfg(test)]
mod test {
	use serde_json::json;

	use crate::{BaseType, Entity, ObjectType, Tombstone};

	#[test]
	fn tombstone_remembers_former_type() {
		let tomb = Entity::from_json(json!({
			"type": "Tombstone",
			"formerType": "Note",
			"deleted": "2016-03-17T00:00:00Z",
		})).unwrap();
		assert_eq!(tomb.former_kinds(), vec![BaseType::Object(ObjectType::Note)]);
		assert!(tomb.deleted().unwrap().first().is_some());
	}
}
