use serde_json::{Map, Value};

use crate::{
	config::{FunctionalArrays, ResolverConfig},
	error::json_kind,
	property::PropertySpec,
	unknown, BaseType, Capability, Catalog, Entity, Error, Registry, Result, Variant,
};

static CATALOG : Catalog = Catalog { accept_prefixed_types: true };
static STRICT_CATALOG : Catalog = Catalog { accept_prefixed_types: false };

/// Turns raw JSON values into variants and entities, following each property's declared range.
///
/// Heterogeneous input never fails: anything a property can't make sense of is kept in the
/// unknown branch. Only structural problems inside embedded entities surface as errors.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
	registry: &'a dyn Registry,
	functional_arrays: FunctionalArrays,
}

impl Default for Resolver<'static> {
	fn default() -> Self {
		Resolver { registry: &CATALOG, functional_arrays: FunctionalArrays::default() }
	}
}

impl std::fmt::Debug for Resolver<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Resolver")
			.field("functional_arrays", &self.functional_arrays)
			.finish_non_exhaustive()
	}
}

impl Resolver<'static> {
	/// resolver over the built-in catalog, configured as given
	pub fn from_config(config: &ResolverConfig) -> Self {
		let registry = if config.accept_prefixed_types { &CATALOG } else { &STRICT_CATALOG };
		Resolver { registry, functional_arrays: config.functional_arrays }
	}
}

impl<'a> Resolver<'a> {
	pub fn new(registry: &'a dyn Registry, config: &ResolverConfig) -> Self {
		Resolver { registry, functional_arrays: config.functional_arrays }
	}

	/// resolves one raw value for given property, first matching alternative wins
	pub fn variant(&self, spec: &'static PropertySpec, raw: &Value) -> Result<Variant> {
		match raw {
			Value::Object(map) => {
				let Some(tags) = map.get("type") else {
					tracing::debug!("untyped map in '{}', keeping it as unknown", spec.name);
					return Ok(Variant::Unknown(unknown::deserialize(raw)));
				};
				let Ok(candidates) = type_tags(tags) else {
					tracing::debug!("malformed type {tags} in '{}', keeping it as unknown", spec.name);
					return Ok(Variant::Unknown(unknown::deserialize(raw)));
				};
				for tag in &candidates {
					for capability in spec.capabilities() {
						if let Some(mut entity) = self.registry.resolve(tag, capability) {
							self.populate(&mut entity, map)?;
							return Ok(Variant::Entity(capability, Box::new(entity)));
						}
					}
				}
				tracing::debug!("no type in {tags} fits '{}', keeping it as unknown", spec.name);
				Ok(Variant::Unknown(unknown::deserialize(raw)))
			},
			Value::Null => Ok(Variant::Unknown(Value::Null)),
			x => Ok(
				spec.codecs()
					.find_map(|codec| codec.deserialize(x))
					.unwrap_or_else(|| Variant::Unknown(unknown::deserialize(x)))
			),
		}
	}

	/// resolves a property value, arrays element-wise in order
	pub fn values(&self, spec: &'static PropertySpec, raw: &Value) -> Result<Vec<Variant>> {
		let Value::Array(arr) = raw else {
			return Ok(vec![self.variant(spec, raw)?]);
		};

		let arr = if spec.functional && arr.len() > 1 {
			match self.functional_arrays {
				FunctionalArrays::Reject => return Err(Error::FunctionalMultiplicity { property: spec.name, count: arr.len() }),
				FunctionalArrays::First => {
					tracing::warn!("functional property '{}' got {} values, keeping the first", spec.name, arr.len());
					&arr[..1]
				},
			}
		} else {
			&arr[..]
		};

		arr.iter()
			.map(|x| self.variant(spec, x))
			.collect()
	}

	/// fills an entity from a raw map; on error the entity may be half populated, callers
	/// should only hand out fresh entities filled successfully
	pub fn populate(&self, entity: &mut Entity, map: &Map<String, Value>) -> Result<()> {
		let kind = entity.kind();
		for (key, value) in map {
			if key == "@context" {
				continue;
			}

			if key == "type" {
				*entity.types_mut() = type_tags(value)?;
				continue;
			}

			if let Some(slot) = entity.property_mut(key) {
				let spec = slot.spec();
				let values = self.values(spec, value)
					.map_err(|e| e.within(kind, spec.name))?;
				slot.fill(values);
				continue;
			}

			if let Some(name) = key.strip_suffix("Map") {
				let languages = entity.property(name)
					.filter(|x| x.spec().has_language_map())
					.and_then(|_| crate::codec::language_map(value));
				if let (Some(languages), Some(slot)) = (languages, entity.property_mut(name)) {
					slot.fill_language_map(languages);
					continue;
				}
			}

			entity.unknown_mut().insert(key.clone(), unknown::deserialize(value));
		}
		Ok(())
	}

	/// resolves a whole document, picking its kind from its own type tags
	pub fn entity(&self, raw: &Value) -> Result<Entity> {
		let map = raw.as_object().ok_or(Error::NotAnObject(json_kind(raw)))?;
		let tags = match map.get("type") {
			Some(x) => type_tags(x)?,
			None => Vec::new(),
		};
		for tag in &tags {
			for capability in [Capability::Object, Capability::Link] {
				if let Some(mut entity) = self.registry.resolve(tag, capability) {
					self.populate(&mut entity, map)?;
					return Ok(entity);
				}
			}
		}
		Err(Error::UnknownType(tags))
	}

	/// resolves a document as given kind, regardless of its type tags
	pub fn entity_as(&self, kind: BaseType, raw: &Value) -> Result<Entity> {
		let map = raw.as_object().ok_or(Error::NotAnObject(json_kind(raw)))?;
		let mut entity = Entity::new(kind);
		self.populate(&mut entity, map)?;
		Ok(entity)
	}

	/// replaces an entity's content with given document, leaving it untouched on failure
	pub fn deserialize_into(&self, entity: &mut Entity, raw: &Value) -> Result<()> {
		*entity = self.entity_as(entity.kind(), raw)?;
		Ok(())
	}
}

/// type discriminator as sequence of tags, anything but strings is malformed
pub fn type_tags(value: &Value) -> Result<Vec<String>> {
	match value {
		Value::String(x) => Ok(vec![x.clone()]),
		Value::Array(arr) => arr.iter()
			.map(|x| x.as_str().map(|x| x.to_string()))
			.collect::<Option<Vec<_>>>()
			.ok_or_else(|| Error::MalformedType(value.clone())),
		_ => Err(Error::MalformedType(value.clone())),
	}
}
