crate::strenum! {
	pub enum OfferType {
		Offer,
		Invite;
	};
}

pub trait Offer : super::Activity {
	fn offer_type(&self) -> Option<OfferType> {
		match self.activity_type()? {
			super::ActivityType::Offer(x) => Some(x),
			_ => None,
		}
	}
}

impl Offer for crate::Entity {}
