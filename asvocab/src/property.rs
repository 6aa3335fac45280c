use crate::{codec::LanguageMap, Capability, Codec, Entity, Error, Iri, Result, Variant};

/// One alternative a property can hold, in declared precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
	Entity(Capability),
	Scalar(Codec),
}

/// Static description of one vocabulary property: its JSON name, whether it's functional and the
/// ordered set of shapes it accepts.
#[derive(Debug, PartialEq, Eq)]
pub struct PropertySpec {
	pub name: &'static str,
	pub functional: bool,
	pub range: &'static [Range],
}

impl PropertySpec {
	pub const fn functional(name: &'static str, range: &'static [Range]) -> Self {
		PropertySpec { name, functional: true, range }
	}

	pub const fn many(name: &'static str, range: &'static [Range]) -> Self {
		PropertySpec { name, functional: false, range }
	}

	pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
		self.range.iter().filter_map(|x| match x {
			Range::Entity(capability) => Some(*capability),
			Range::Scalar(_) => None,
		})
	}

	pub fn codecs(&self) -> impl Iterator<Item = Codec> + '_ {
		self.range.iter().filter_map(|x| match x {
			Range::Scalar(codec) => Some(*codec),
			Range::Entity(_) => None,
		})
	}

	/// properties with rdf:langString in range also take a `<name>Map` of language alternatives
	pub fn has_language_map(&self) -> bool {
		self.range.contains(&Range::Scalar(Codec::LangString))
	}

	pub fn map_key(&self) -> String {
		format!("{}Map", self.name)
	}

	/// embedded entities must sit in the first branch their kind satisfies, the same one
	/// deserialization would pick for them
	pub fn accepts(&self, variant: &Variant) -> bool {
		match variant {
			Variant::Unknown(_) => true,
			Variant::Entity(capability, entity) => self.branch_for(entity.kind()) == Some(*capability),
			x => self.codecs().any(|c| c.accepts(x)),
		}
	}

	/// first entity branch of this range that given kind can fill
	pub fn branch_for(&self, kind: crate::BaseType) -> Option<Capability> {
		let held = kind.capabilities();
		self.capabilities().find(|x| held.contains(x))
	}
}

pub(crate) const IRI : &[Range] = &[Range::Scalar(Codec::AnyUri)];
pub(crate) const ANY : &[Range] = &[
	Range::Entity(Capability::Object),
	Range::Entity(Capability::Link),
	Range::Scalar(Codec::AnyUri),
];
pub(crate) const OBJECT : &[Range] = &[
	Range::Entity(Capability::Object),
	Range::Scalar(Codec::AnyUri),
];
pub(crate) const TEXT : &[Range] = &[
	Range::Scalar(Codec::String),
	Range::Scalar(Codec::LangString),
	Range::Scalar(Codec::AnyUri),
];
pub(crate) const COLLECTION : &[Range] = &[
	Range::Entity(Capability::OrderedCollection),
	Range::Entity(Capability::Collection),
	Range::Scalar(Codec::AnyUri),
];
pub(crate) const PAGE : &[Range] = &[
	Range::Entity(Capability::CollectionPage),
	Range::Entity(Capability::Link),
	Range::Scalar(Codec::AnyUri),
];
pub(crate) const TIME : &[Range] = &[
	Range::Scalar(Codec::DateTime),
	Range::Scalar(Codec::AnyUri),
];
pub(crate) const COUNT : &[Range] = &[Range::Scalar(Codec::NonNegativeInteger)];
pub(crate) const FLAG : &[Range] = &[Range::Scalar(Codec::Boolean)];
pub(crate) const FLOAT : &[Range] = &[Range::Scalar(Codec::Float)];

/// Current value(s) of one property on one entity.
///
/// Functional slots hold at most one variant, non-functional ones an ordered sequence. The
/// language map lives beside the variants and never interferes with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
	spec: &'static PropertySpec,
	values: Vec<Variant>,
	language_map: Option<LanguageMap>,
}

impl Slot {
	pub fn new(spec: &'static PropertySpec) -> Self {
		Slot { spec, values: Vec::new(), language_map: None }
	}

	pub fn spec(&self) -> &'static PropertySpec {
		self.spec
	}

	pub fn name(&self) -> &'static str {
		self.spec.name
	}

	pub fn is_functional(&self) -> bool {
		self.spec.functional
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// true if there's anything to emit: values or a language map
	pub fn is_populated(&self) -> bool {
		!self.values.is_empty() || self.language_map.is_some()
	}

	pub fn values(&self) -> &[Variant] {
		&self.values
	}

	pub fn first(&self) -> Option<&Variant> {
		self.values.first()
	}

	pub fn get(&self, index: usize) -> Option<&Variant> {
		self.values.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut Variant> {
		self.values.get_mut(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
		self.values.iter()
	}

	fn check(&self, variant: &Variant) -> Result<()> {
		if self.spec.accepts(variant) {
			Ok(())
		} else {
			Err(Error::IllegalVariant { property: self.spec.name, variant: variant.kind_name() })
		}
	}

	fn check_room(&self) -> Result<()> {
		if self.spec.functional && !self.values.is_empty() {
			Err(Error::FunctionalMultiplicity { property: self.spec.name, count: self.values.len() + 1 })
		} else {
			Ok(())
		}
	}

	/// replaces every value with given one
	pub fn set(&mut self, value: impl Into<Variant>) -> Result<()> {
		let value = value.into();
		self.check(&value)?;
		self.values = vec![value];
		Ok(())
	}

	pub fn append(&mut self, value: impl Into<Variant>) -> Result<()> {
		let value = value.into();
		self.check(&value)?;
		self.check_room()?;
		self.values.push(value);
		Ok(())
	}

	pub fn prepend(&mut self, value: impl Into<Variant>) -> Result<()> {
		self.insert(0, value)
	}

	/// inserts at given position, past-the-end indexes append
	pub fn insert(&mut self, index: usize, value: impl Into<Variant>) -> Result<()> {
		let value = value.into();
		self.check(&value)?;
		self.check_room()?;
		self.values.insert(index.min(self.values.len()), value);
		Ok(())
	}

	pub fn remove(&mut self, index: usize) -> Option<Variant> {
		if index < self.values.len() {
			Some(self.values.remove(index))
		} else {
			None
		}
	}

	pub fn swap(&mut self, a: usize, b: usize) {
		if a < self.values.len() && b < self.values.len() {
			self.values.swap(a, b);
		}
	}

	pub fn clear(&mut self) {
		self.values.clear();
	}

	pub(crate) fn fill(&mut self, values: Vec<Variant>) {
		self.values = values;
	}

	pub fn language_map(&self) -> Option<&LanguageMap> {
		self.language_map.as_ref()
	}

	pub fn language(&self, tag: &str) -> Option<&str> {
		self.language_map.as_ref()?.get(tag).map(|x| x.as_str())
	}

	pub fn set_language(&mut self, tag: &str, text: &str) -> Result<()> {
		self.check_language_map()?;
		self.language_map
			.get_or_insert_with(LanguageMap::new)
			.insert(tag.to_string(), text.to_string());
		Ok(())
	}

	pub fn set_language_map(&mut self, map: Option<LanguageMap>) -> Result<()> {
		self.check_language_map()?;
		self.language_map = map;
		Ok(())
	}

	pub fn clear_language_map(&mut self) {
		self.language_map = None;
	}

	fn check_language_map(&self) -> Result<()> {
		if self.spec.has_language_map() {
			Ok(())
		} else {
			Err(Error::IllegalVariant { property: self.spec.name, variant: Codec::LangString.name() })
		}
	}

	pub(crate) fn fill_language_map(&mut self, map: LanguageMap) {
		self.language_map = Some(map);
	}

	pub fn strings(&self) -> impl Iterator<Item = &str> {
		self.values.iter().filter_map(Variant::as_str)
	}

	pub fn iris(&self) -> impl Iterator<Item = &Iri> {
		self.values.iter().filter_map(Variant::as_iri)
	}

	pub fn entities(&self) -> impl Iterator<Item = &Entity> {
		self.values.iter().filter_map(Variant::entity)
	}

	/// every IRI referenced by this slot, either directly or as id of embedded entities
	pub fn ids(&self) -> Vec<String> {
		self.values.iter()
			.filter_map(|x| Some(x.id()?.to_string()))
			.collect()
	}
}

impl<'a> IntoIterator for &'a Slot {
	type Item = &'a Variant;
	type IntoIter = std::slice::Iter<'a, Variant>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

#[cfg(test)]
mod test {
	use crate::{Capability, Entity, Error, Iri, Variant, BaseType, ObjectType};

	fn note() -> Entity {
		Entity::new(BaseType::Object(ObjectType::Note))
	}

	#[test]
	fn functional_slots_hold_one_value() {
		let mut note = note();
		let published = note.property_mut("published").unwrap();
		published.append(chrono::Utc::now()).unwrap();
		assert!(matches!(
			published.append(chrono::Utc::now()),
			Err(Error::FunctionalMultiplicity { property: "published", count: 2 })
		));
		published.set(Iri::parse("https://example.org/time").unwrap()).unwrap();
		assert_eq!(published.len(), 1);
		assert!(published.first().unwrap().as_iri().is_some());
	}

	#[test]
	fn non_functional_slots_keep_insertion_order() {
		let mut note = note();
		let to = note.property_mut("to").unwrap();
		to.append(Iri::parse("https://b.example").unwrap()).unwrap();
		to.prepend(Iri::parse("https://a.example").unwrap()).unwrap();
		to.insert(99, Iri::parse("https://c.example").unwrap()).unwrap();
		assert_eq!(to.ids(), vec!["https://a.example", "https://b.example", "https://c.example"]);
		to.swap(0, 2);
		assert_eq!(to.ids(), vec!["https://c.example", "https://b.example", "https://a.example"]);
		assert!(to.remove(1).is_some());
		assert!(to.remove(5).is_none());
		assert_eq!(to.len(), 2);
	}

	#[test]
	fn slots_reject_values_outside_their_range() {
		let mut note = note();
		let to = note.property_mut("to").unwrap();
		assert!(matches!(
			to.append(true),
			Err(Error::IllegalVariant { property: "to", variant: "boolean" })
		));
		// a Mention is never an Object, no matter the branch it's pushed into
		let mention = Entity::new(BaseType::Link(crate::LinkType::Mention));
		assert!(to.append(Variant::Entity(Capability::Object, Box::new(mention.clone()))).is_err());
		assert!(to.append(Variant::link(mention)).is_ok());
		// unknown values are always accepted
		assert!(to.append(serde_json::json!(42)).is_ok());
	}

	#[test]
	fn entities_go_in_their_first_matching_branch() {
		let mut note = note();
		let likes = note.property_mut("likes").unwrap();
		let ordered = Entity::new(BaseType::Object(ObjectType::Collection(crate::CollectionType::OrderedCollection)));
		assert_eq!(likes.spec().branch_for(ordered.kind()), Some(Capability::OrderedCollection));
		assert!(matches!(
			likes.set(Variant::Entity(Capability::Collection, Box::new(ordered.clone()))),
			Err(Error::IllegalVariant { property: "likes", .. })
		));
		likes.set(Variant::Entity(Capability::OrderedCollection, Box::new(ordered))).unwrap();

		let plain = Entity::new(BaseType::Object(ObjectType::Collection(crate::CollectionType::Collection)));
		assert_eq!(likes.spec().branch_for(plain.kind()), Some(Capability::Collection));
		assert!(likes.set(Variant::object(plain)).is_err());
	}

	#[test]
	fn language_maps_only_where_declared() {
		let mut note = note();
		note.property_mut("content").unwrap().set_language("en", "hi").unwrap();
		assert_eq!(note.property("content").unwrap().language("en"), Some("hi"));
		assert!(note.property_mut("to").unwrap().set_language("en", "hi").is_err());
	}
}
