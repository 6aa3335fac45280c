crate::strenum! {
	pub enum RejectType {
		Reject,
		TentativeReject;
	};
}

pub trait Reject : super::Activity {
	fn reject_type(&self) -> Option<RejectType> {
		match self.activity_type()? {
			super::ActivityType::Reject(x) => Some(x),
			_ => None,
		}
	}
}

impl Reject for crate::Entity {}
