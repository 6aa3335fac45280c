use crate::Object;

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// every target: to, bto, cc and bcc
	fn addressed(&self) -> Vec<String>;
	/// primary targets only: to and bto
	fn mentioning(&self) -> Vec<String>;

	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC || x == "as:Public" || x == "Public")
	}
}

impl<T: Object> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		let mut to = self.mentioning();
		to.append(&mut self.cc().map(|x| x.ids()).unwrap_or_default());
		to.append(&mut self.bcc().map(|x| x.ids()).unwrap_or_default());
		to
	}

	fn mentioning(&self) -> Vec<String> {
		let mut to = self.to().map(|x| x.ids()).unwrap_or_default();
		to.append(&mut self.bto().map(|x| x.ids()).unwrap_or_default());
		to
	}
}
