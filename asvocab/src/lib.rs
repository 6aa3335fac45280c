//! Typed ActivityStreams 2.0 vocabulary with lossless json round-trips.
//!
//! Every vocabulary property can hold one of several shapes: an embedded entity, a bare IRI, a
//! string, a language map or something this crate doesn't know about. Values are resolved once,
//! against the property's declared range, into a [`Variant`] which remembers which branch was
//! populated, and serialize back to the same json they came from.
//!
//! ```
//! use asvocab::{Activity, Entity};
//!
//! let dislike = Entity::from_json(serde_json::json!({
//! 	"type": "Dislike",
//! 	"actor": {"type": "Mention", "href": "https://example.org/users/alice"},
//! 	"object": "https://example.org/notes/1",
//! })).unwrap();
//! assert_eq!(dislike.actor().unwrap().ids(), vec!["https://example.org/users/alice"]);
//! ```

mod macros;
pub(crate) use macros::strenum;
pub use macros::TypeValueError;

mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{Config, FunctionalArrays, OutputConfig, ResolverConfig};

pub mod codec;
pub use codec::{Codec, Iri, LanguageMap};

pub mod unknown;

mod variant;
pub use variant::Variant;

pub mod property;
pub use property::{PropertySpec, Range, Slot};

mod entity;
pub use entity::Entity;

pub mod registry;
pub use registry::{Capability, Catalog, Registry};

pub mod resolver;
pub use resolver::Resolver;

mod base;
pub use base::{Base, BaseType};

mod link;
pub use link::{Link, LinkType};

pub mod target;
pub use target::Addressed;

#[cfg(feature = "jsonld")]
mod jsonld;
#[cfg(feature = "jsonld")]
pub use jsonld::LD;

#[cfg(feature = "shortcuts")]
mod shortcuts;
#[cfg(feature = "shortcuts")]
pub use shortcuts::Shortcuts;

mod object;
pub use object::{
	Object, ObjectType,
	activity::{
		Activity, ActivityType,
		accept::{Accept, AcceptType},
		ignore::{Ignore, IgnoreType},
		intransitive::{IntransitiveActivity, IntransitiveActivityType, Question},
		offer::{Offer, OfferType},
		reject::{Reject, RejectType},
	},
	actor::{Actor, ActorType},
	collection::{
		Collection, CollectionType,
		page::CollectionPage,
	},
	document::{Document, DocumentType},
	place::Place,
	profile::Profile,
	relationship::Relationship,
	tombstone::Tombstone,
};
