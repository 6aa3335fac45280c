pub const ACTIVITYSTREAMS_CONTEXT : &str = "https://www.w3.org/ns/activitystreams";
pub const SECURITY_CONTEXT : &str = "https://w3id.org/security/v1";

pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for serde_json::Value {
	fn ld_context(mut self) -> Self {
		let kind = self.get("type")
			.and_then(|x| crate::resolver::type_tags(x).ok())
			.and_then(|tags| tags.iter().find_map(|x| crate::Catalog::default().kind(x)));
		let Some(obj) = self.as_object_mut() else {
			tracing::warn!("cannot add @context to json value different than object");
			return self;
		};

		let mut ctx = serde_json::Map::new();
		#[cfg(feature = "activitypub-miscellaneous-terms")]
		{
			ctx.insert("sensitive".to_string(), serde_json::Value::String("as:sensitive".into()));
			ctx.insert("quoteUrl".to_string(), serde_json::Value::String("as:quoteUrl".into()));
			ctx.insert("Hashtag".to_string(), serde_json::Value::String("as:Hashtag".into()));
			ctx.insert("manuallyApprovesFollowers".to_string(), serde_json::Value::String("as:manuallyApprovesFollowers".into()));
			ctx.insert("movedTo".to_string(), serde_json::Value::String("as:movedTo".into()));
		}
		match kind {
			#[cfg(feature = "activitypub-counters")]
			Some(crate::BaseType::Object(crate::ObjectType::Actor(_))) => {
				ctx.insert("counters".to_string(), serde_json::Value::String("https://ns.alemi.dev/as/counters/#".into()));
				ctx.insert("followingCount".to_string(), serde_json::Value::String("counters:followingCount".into()));
				ctx.insert("followersCount".to_string(), serde_json::Value::String("counters:followersCount".into()));
				ctx.insert("statusesCount".to_string(), serde_json::Value::String("counters:statusesCount".into()));
			},
			#[cfg(feature = "ostatus")]
			Some(crate::BaseType::Object(
				crate::ObjectType::Note
				| crate::ObjectType::Article
				| crate::ObjectType::Event
				| crate::ObjectType::Document(crate::DocumentType::Page)
			)) => {
				ctx.insert("ostatus".to_string(), serde_json::Value::String("http://ostatus.org#".into()));
				ctx.insert("conversation".to_string(), serde_json::Value::String("ostatus:conversation".into()));
			},
			_ => {},
		}

		let mut context = vec![
			serde_json::Value::String(ACTIVITYSTREAMS_CONTEXT.into()),
			serde_json::Value::String(SECURITY_CONTEXT.into()),
		];
		if !ctx.is_empty() {
			context.push(serde_json::Value::Object(ctx));
		}
		obj.insert("@context".to_string(), serde_json::Value::Array(context));
		self
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::{LD, ACTIVITYSTREAMS_CONTEXT};
	use crate::Entity;

	#[test]
	fn context_is_attached_to_serialized_documents() {
		let note = Entity::from_json(json!({"type": "Note", "content": "hi"})).unwrap();
		let out = note.to_json().unwrap().ld_context();
		assert_eq!(out["@context"][0], json!(ACTIVITYSTREAMS_CONTEXT));
		assert_eq!(out["content"], json!("hi"));
		// and it's dropped again when reading back
		assert_eq!(Entity::from_json(out).unwrap(), note);
	}

	#[test]
	fn non_objects_are_left_alone() {
		assert_eq!(json!("hello").ld_context(), json!("hello"));
	}
}
