use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde_json::Value;

use crate::{codec, unknown, Capability, Entity, Iri};

/// One value of a property: exactly one branch out of the closed set a property may declare.
///
/// Embedded entities remember which capability branch they populated, so a `Mention` landing in
/// `actor` is a `Link` value, not an `Object` one.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
	Entity(Capability, Box<Entity>),
	Iri(Iri),
	String(String),
	Float(f64),
	DateTime(DateTime<FixedOffset>),
	Duration(TimeDelta),
	MediaType(String),
	Boolean(bool),
	NonNegativeInteger(u64),
	LanguageTag(String),
	LinkRelation(String),
	Unit(String),
	/// anything not matching the property's range, kept verbatim
	Unknown(Value),
}

impl Variant {
	pub fn object(entity: Entity) -> Self {
		Variant::Entity(Capability::Object, Box::new(entity))
	}

	pub fn link(entity: Entity) -> Self {
		Variant::Entity(Capability::Link, Box::new(entity))
	}

	pub fn kind_name(&self) -> &'static str {
		match self {
			Variant::Entity(capability, _) => capability.name(),
			Variant::Iri(_) => "IRI",
			Variant::String(_) => "string",
			Variant::Float(_) => "float",
			Variant::DateTime(_) => "dateTime",
			Variant::Duration(_) => "duration",
			Variant::MediaType(_) => "mimeMediaTypeValue",
			Variant::Boolean(_) => "boolean",
			Variant::NonNegativeInteger(_) => "nonNegativeInteger",
			Variant::LanguageTag(_) => "bcp47",
			Variant::LinkRelation(_) => "linkRelation",
			Variant::Unit(_) => "unit",
			Variant::Unknown(_) => "unknown",
		}
	}

	pub fn serialize(&self) -> crate::Result<Value> {
		Ok(match self {
			Variant::Entity(_, entity) => entity.to_json()?,
			Variant::Iri(iri) => Value::String(iri.as_str().to_string()),
			Variant::DateTime(x) => Value::String(codec::format_datetime(x)),
			Variant::Duration(x) => Value::String(codec::format_duration(x)),
			Variant::Float(x) => codec::serialize_float(*x)?,
			Variant::Boolean(x) => Value::Bool(*x),
			Variant::NonNegativeInteger(x) => Value::Number((*x).into()),
			Variant::String(x)
			| Variant::MediaType(x)
			| Variant::LanguageTag(x)
			| Variant::LinkRelation(x)
			| Variant::Unit(x) => Value::String(x.clone()),
			Variant::Unknown(x) => unknown::serialize(x),
		})
	}

	pub fn capability(&self) -> Option<Capability> {
		match self {
			Variant::Entity(capability, _) => Some(*capability),
			_ => None,
		}
	}

	pub fn entity(&self) -> Option<&Entity> {
		match self {
			Variant::Entity(_, entity) => Some(&**entity),
			_ => None,
		}
	}

	pub fn entity_mut(&mut self) -> Option<&mut Entity> {
		match self {
			Variant::Entity(_, entity) => Some(&mut **entity),
			_ => None,
		}
	}

	/// embedded entity, only if it populated the Object branch
	pub fn as_object(&self) -> Option<&Entity> {
		match self {
			Variant::Entity(Capability::Object, entity) => Some(&**entity),
			_ => None,
		}
	}

	/// embedded entity, only if it populated the Link branch
	pub fn as_link(&self) -> Option<&Entity> {
		match self {
			Variant::Entity(Capability::Link, entity) => Some(&**entity),
			_ => None,
		}
	}

	pub fn as_iri(&self) -> Option<&Iri> {
		match self {
			Variant::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Variant::String(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_unknown(&self) -> Option<&Value> {
		match self {
			Variant::Unknown(x) => Some(x),
			_ => None,
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Variant::Unknown(_))
	}

	/// IRI this value points to: the IRI itself, the id of an embedded object or the href of an
	/// embedded link
	pub fn id(&self) -> Option<&str> {
		match self {
			Variant::Iri(x) => Some(x.as_str()),
			Variant::Entity(Capability::Link, entity) => entity.property("href")
				.and_then(|x| x.first())
				.and_then(Variant::as_iri)
				.map(Iri::as_str)
				.or_else(|| entity.id()),
			Variant::Entity(_, entity) => entity.id(),
			_ => None,
		}
	}
}

impl From<Iri> for Variant {
	fn from(value: Iri) -> Self {
		Variant::Iri(value)
	}
}

impl From<String> for Variant {
	fn from(value: String) -> Self {
		Variant::String(value)
	}
}

impl From<&str> for Variant {
	fn from(value: &str) -> Self {
		Variant::String(value.to_string())
	}
}

impl From<f64> for Variant {
	fn from(value: f64) -> Self {
		Variant::Float(value)
	}
}

impl From<bool> for Variant {
	fn from(value: bool) -> Self {
		Variant::Boolean(value)
	}
}

impl From<u64> for Variant {
	fn from(value: u64) -> Self {
		Variant::NonNegativeInteger(value)
	}
}

impl From<DateTime<FixedOffset>> for Variant {
	fn from(value: DateTime<FixedOffset>) -> Self {
		Variant::DateTime(value)
	}
}

impl From<DateTime<Utc>> for Variant {
	fn from(value: DateTime<Utc>) -> Self {
		Variant::DateTime(value.fixed_offset())
	}
}

impl From<TimeDelta> for Variant {
	fn from(value: TimeDelta) -> Self {
		Variant::Duration(value)
	}
}

impl From<Value> for Variant {
	fn from(value: Value) -> Self {
		Variant::Unknown(value)
	}
}
