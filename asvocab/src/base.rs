use crate::{
	property::PropertySpec, ActivityType, Capability, CollectionType, DocumentType,
	IntransitiveActivityType, LinkType, ObjectType, Slot,
};

crate::strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

impl BaseType {
	/// every embedded-entity branch this kind can populate
	pub fn capabilities(&self) -> Vec<Capability> {
		let object = match self {
			BaseType::Link(_) => return vec![Capability::Link],
			BaseType::Object(x) => x,
		};

		let mut out = vec![Capability::Object];
		match object {
			ObjectType::Activity(_) => out.push(Capability::Activity),
			ObjectType::Actor(_) => out.push(Capability::Actor),
			ObjectType::Collection(x) => {
				out.push(Capability::Collection);
				if matches!(x, CollectionType::OrderedCollection | CollectionType::OrderedCollectionPage) {
					out.push(Capability::OrderedCollection);
				}
				if matches!(x, CollectionType::CollectionPage | CollectionType::OrderedCollectionPage) {
					out.push(Capability::CollectionPage);
				}
				if matches!(x, CollectionType::OrderedCollectionPage) {
					out.push(Capability::OrderedCollectionPage);
				}
			},
			ObjectType::Document(x) => {
				out.push(Capability::Document);
				if matches!(x, DocumentType::Image) {
					out.push(Capability::Image);
				}
			},
			_ => {},
		}
		out
	}

	/// property tables making up this kind, outermost vocabulary layer first
	pub fn layers(&self) -> Vec<&'static [PropertySpec]> {
		let object = match self {
			BaseType::Link(_) => return vec![crate::link::LINK],
			BaseType::Object(x) => x,
		};

		let mut out = crate::object::layers();
		match object {
			ObjectType::Activity(x) => {
				out.push(crate::object::activity::ACTIVITY);
				match x {
					ActivityType::IntransitiveActivity(IntransitiveActivityType::Question) =>
						out.push(crate::object::activity::intransitive::QUESTION),
					ActivityType::IntransitiveActivity(_) => {},
					_ => out.push(crate::object::activity::TRANSITIVE),
				}
			},
			ObjectType::Actor(_) => out.extend(crate::object::actor::layers()),
			ObjectType::Collection(x) => {
				out.push(crate::object::collection::COLLECTION);
				if matches!(x, CollectionType::OrderedCollection | CollectionType::OrderedCollectionPage) {
					out.push(crate::object::collection::ORDERED_COLLECTION);
				}
				if matches!(x, CollectionType::CollectionPage | CollectionType::OrderedCollectionPage) {
					out.push(crate::object::collection::page::COLLECTION_PAGE);
				}
				if matches!(x, CollectionType::OrderedCollectionPage) {
					out.push(crate::object::collection::page::ORDERED_COLLECTION_PAGE);
				}
			},
			ObjectType::Place => out.push(crate::object::place::PLACE),
			ObjectType::Profile => out.push(crate::object::profile::PROFILE),
			ObjectType::Relationship => out.push(crate::object::relationship::RELATIONSHIP),
			ObjectType::Tombstone => out.push(crate::object::tombstone::TOMBSTONE),
			_ => {},
		}
		out
	}

	/// every property declared for this kind, in serialization order
	pub fn properties(&self) -> Vec<&'static PropertySpec> {
		self.layers()
			.into_iter()
			.flat_map(|x| x.iter())
			.collect()
	}
}

/// Root of every vocabulary entity: its canonical kind and generic property access.
pub trait Base {
	fn base_type(&self) -> BaseType;
	fn property(&self, name: &str) -> Option<&Slot>;
	fn property_mut(&mut self, name: &str) -> Option<&mut Slot>;

	fn id(&self) -> Option<&str> {
		self.property("id")?
			.first()?
			.as_iri()
			.map(|x| x.as_str())
	}

	fn id_mut(&mut self) -> Option<&mut Slot> {
		self.property_mut("id")
	}

	fn is_link(&self) -> bool {
		matches!(self.base_type(), BaseType::Link(_))
	}

	fn is_object(&self) -> bool {
		matches!(self.base_type(), BaseType::Object(_))
	}
}

impl Base for crate::Entity {
	fn base_type(&self) -> BaseType {
		self.kind()
	}

	fn property(&self, name: &str) -> Option<&Slot> {
		crate::Entity::property(self, name)
	}

	fn property_mut(&mut self, name: &str) -> Option<&mut Slot> {
		crate::Entity::property_mut(self, name)
	}

	fn id(&self) -> Option<&str> {
		crate::Entity::id(self)
	}
}

#[cfg(test)]
mod test {
	use crate::{ActivityType, BaseType, Capability, CollectionType, IntransitiveActivityType, ObjectType};

	fn names(kind: BaseType) -> Vec<&'static str> {
		kind.properties().into_iter().map(|x| x.name).collect()
	}

	#[test]
	fn tag_strings_roundtrip() {
		for kind in BaseType::variants() {
			assert_eq!(BaseType::try_from(kind.as_str()).ok(), Some(kind));
		}
		assert!(BaseType::try_from("Banana").is_err());
	}

	#[test]
	fn transitive_activities_carry_object() {
		let dislike = BaseType::Object(ObjectType::Activity(ActivityType::Dislike));
		assert!(names(dislike).contains(&"object"));
		assert!(names(dislike).contains(&"actor"));

		let arrive = BaseType::Object(ObjectType::Activity(ActivityType::IntransitiveActivity(IntransitiveActivityType::Arrive)));
		assert!(!names(arrive).contains(&"object"));
		assert!(names(arrive).contains(&"actor"));

		let question = BaseType::Object(ObjectType::Activity(ActivityType::IntransitiveActivity(IntransitiveActivityType::Question)));
		assert!(names(question).contains(&"oneOf"));
		assert!(!names(dislike).contains(&"oneOf"));
	}

	#[test]
	fn property_names_are_unique_per_kind() {
		for kind in BaseType::variants() {
			let mut all = names(kind);
			let count = all.len();
			all.sort();
			all.dedup();
			assert_eq!(all.len(), count, "duplicate property on {kind}");
		}
	}

	#[test]
	fn ordered_pages_have_every_collection_capability() {
		let page = BaseType::Object(ObjectType::Collection(CollectionType::OrderedCollectionPage));
		assert_eq!(page.capabilities(), vec![
			Capability::Object,
			Capability::Collection,
			Capability::OrderedCollection,
			Capability::CollectionPage,
			Capability::OrderedCollectionPage,
		]);
		let names = names(page);
		for name in ["totalItems", "orderedItems", "partOf", "next", "startIndex"] {
			assert!(names.contains(&name), "missing {name}");
		}
	}
}
