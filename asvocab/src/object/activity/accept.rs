crate::strenum! {
	pub enum AcceptType {
		Accept,
		TentativeAccept;
	};
}

pub trait Accept : super::Activity {
	fn accept_type(&self) -> Option<AcceptType> {
		match self.activity_type()? {
			super::ActivityType::Accept(x) => Some(x),
			_ => None,
		}
	}
}

impl Accept for crate::Entity {}
