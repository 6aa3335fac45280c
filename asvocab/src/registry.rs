use std::collections::HashMap;

use crate::{BaseType, Entity};

pub const AS_NAMESPACE : &str = "https://www.w3.org/ns/activitystreams#";
pub const AS_PREFIX : &str = "as:";

/// Shape an embedded entity can populate inside a property. A property lists the capabilities it
/// accepts, a type tag resolves to an entity only for capabilities its kind actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
	Object,
	Link,
	Activity,
	Actor,
	Collection,
	OrderedCollection,
	CollectionPage,
	OrderedCollectionPage,
	Document,
	Image,
}

impl Capability {
	pub fn name(&self) -> &'static str {
		match self {
			Capability::Object => "Object",
			Capability::Link => "Link",
			Capability::Activity => "Activity",
			Capability::Actor => "Actor",
			Capability::Collection => "Collection",
			Capability::OrderedCollection => "OrderedCollection",
			Capability::CollectionPage => "CollectionPage",
			Capability::OrderedCollectionPage => "OrderedCollectionPage",
			Capability::Document => "Document",
			Capability::Image => "Image",
		}
	}
}

impl std::fmt::Display for Capability {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Maps a type tag and a requested capability to a fresh, empty entity.
pub trait Registry : Send + Sync {
	fn resolve(&self, tag: &str, capability: Capability) -> Option<Entity>;
}

lazy_static::lazy_static! {
	static ref INDEX: HashMap<&'static str, BaseType> = BaseType::variants()
		.into_iter()
		.map(|x| (x.as_str(), x))
		.collect();
}

/// strips the `as:` prefix or the full activitystreams namespace from a type tag
pub fn compact(tag: &str) -> &str {
	tag.strip_prefix(AS_PREFIX)
		.or_else(|| tag.strip_prefix(AS_NAMESPACE))
		.unwrap_or(tag)
}

/// The built-in registry over the closed vocabulary catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
	pub accept_prefixed_types: bool,
}

impl Default for Catalog {
	fn default() -> Self {
		Catalog { accept_prefixed_types: true }
	}
}

impl Catalog {
	pub fn kind(&self, tag: &str) -> Option<BaseType> {
		let tag = if self.accept_prefixed_types { compact(tag) } else { tag };
		INDEX.get(tag).copied()
	}
}

impl Registry for Catalog {
	fn resolve(&self, tag: &str, capability: Capability) -> Option<Entity> {
		let kind = self.kind(tag)?;
		if kind.capabilities().contains(&capability) {
			Some(Entity::new(kind))
		} else {
			None
		}
	}
}

impl From<&crate::config::ResolverConfig> for Catalog {
	fn from(config: &crate::config::ResolverConfig) -> Self {
		Catalog { accept_prefixed_types: config.accept_prefixed_types }
	}
}
