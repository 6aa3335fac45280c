crate::strenum! {
	pub enum IgnoreType {
		Ignore,
		Block;
	};
}

pub trait Ignore : super::Activity {
	fn ignore_type(&self) -> Option<IgnoreType> {
		match self.activity_type()? {
			super::ActivityType::Ignore(x) => Some(x),
			_ => None,
		}
	}
}

impl Ignore for crate::Entity {}
