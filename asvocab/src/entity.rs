use serde_json::{Map, Value};

use crate::{codec, registry, unknown, BaseType, Catalog, Error, Iri, Resolver, Result, Slot, Variant};

/// One typed vocabulary object: its kind, the type tags it was given, one slot per declared
/// property and whatever else the document carried.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
	kind: BaseType,
	types: Vec<String>,
	slots: Vec<Slot>,
	unknown: Map<String, Value>,
}

impl Entity {
	pub fn new(kind: BaseType) -> Self {
		Entity {
			kind,
			types: Vec::new(),
			slots: kind.properties().into_iter().map(Slot::new).collect(),
			unknown: Map::new(),
		}
	}

	/// empty entity for given type tag, compacted and expanded forms accepted
	pub fn named(tag: &str) -> Result<Self> {
		Catalog::default()
			.kind(tag)
			.map(Entity::new)
			.ok_or_else(|| Error::InvalidKind(tag.to_string()))
	}

	pub fn from_json(value: Value) -> Result<Self> {
		Resolver::default().entity(&value)
	}

	pub fn from_json_as(kind: BaseType, value: Value) -> Result<Self> {
		Resolver::default().entity_as(kind, &value)
	}

	pub fn kind(&self) -> BaseType {
		self.kind
	}

	pub fn id(&self) -> Option<&str> {
		self.property("id")?
			.iris()
			.next()
			.map(Iri::as_str)
	}

	pub fn property(&self, name: &str) -> Option<&Slot> {
		self.slots.iter().find(|x| x.name() == name)
	}

	pub fn property_mut(&mut self, name: &str) -> Option<&mut Slot> {
		self.slots.iter_mut().find(|x| x.name() == name)
	}

	/// like `property_mut`, but undeclared properties are an error
	pub fn slot_mut(&mut self, name: &str) -> Result<&mut Slot> {
		let kind = self.kind;
		self.property_mut(name)
			.ok_or_else(|| Error::NoSuchProperty { kind, property: name.to_string() })
	}

	/// every declared slot, in serialization order
	pub fn properties(&self) -> std::slice::Iter<'_, Slot> {
		self.slots.iter()
	}

	pub fn types(&self) -> &[String] {
		&self.types
	}

	pub fn types_mut(&mut self) -> &mut Vec<String> {
		&mut self.types
	}

	pub fn unknown(&self) -> &Map<String, Value> {
		&self.unknown
	}

	pub fn unknown_mut(&mut self) -> &mut Map<String, Value> {
		&mut self.unknown
	}

	/// builder-style append, fails on undeclared properties and illegal values
	pub fn with(mut self, name: &str, value: impl Into<Variant>) -> Result<Self> {
		self.slot_mut(name)?.append(value)?;
		Ok(self)
	}

	/// builder-style unknown extension field
	pub fn with_unknown(mut self, key: &str, value: Value) -> Self {
		self.unknown.insert(key.to_string(), value);
		self
	}

	/// type tags to emit: the stored ones plus the canonical name, unless already present
	pub fn type_tags(&self) -> Vec<String> {
		let canonical = self.kind.as_str();
		let mut out = self.types.clone();
		if !out.iter().any(|x| registry::compact(x) == canonical) {
			out.push(canonical.to_string());
		}
		out
	}

	pub fn to_json(&self) -> Result<Value> {
		let mut out = Map::new();

		for (key, value) in &self.unknown {
			if key == "@context" {
				continue;
			}
			out.insert(key.clone(), unknown::serialize(value));
		}

		let mut tags = self.type_tags();
		let tags = if tags.len() == 1 {
			Value::String(tags.remove(0))
		} else {
			Value::Array(tags.into_iter().map(Value::String).collect())
		};
		out.insert("type".to_string(), tags);

		for slot in &self.slots {
			let value = match slot.values() {
				[] => None,
				[x] => Some(x.serialize()),
				many => Some(
					many.iter()
						.map(Variant::serialize)
						.collect::<Result<Vec<Value>>>()
						.map(Value::Array)
				),
			};
			if let Some(value) = value {
				let value = value.map_err(|e| e.within(self.kind, slot.name()))?;
				out.insert(slot.name().to_string(), value);
			}
			if let Some(languages) = slot.language_map() {
				out.insert(slot.spec().map_key(), codec::language_map_value(languages));
			}
		}

		Ok(Value::Object(out))
	}
}

impl serde::Serialize for Entity {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let value = self.to_json().map_err(serde::ser::Error::custom)?;
		serde::Serialize::serialize(&value, serializer)
	}
}

impl<'de> serde::Deserialize<'de> for Entity {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
		Entity::from_json(value).map_err(serde::de::Error::custom)
	}
}

impl TryFrom<Value> for Entity {
	type Error = Error;

	fn try_from(value: Value) -> Result<Self> {
		Entity::from_json(value)
	}
}
