use crate::{BaseType, ObjectType};

crate::strenum! {
	pub enum DocumentType {
		Document,
		Audio,
		Image,
		Page,
		Video;
	};
}

pub trait Document : super::Object {
	fn document_type(&self) -> Option<DocumentType> {
		match self.base_type() {
			BaseType::Object(ObjectType::Document(x)) => Some(x),
			_ => None,
		}
	}
}

impl Document for crate::Entity {}
