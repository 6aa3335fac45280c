use crate::{
	macros::property,
	property::{PropertySpec, Range, FLOAT},
	Codec,
};

pub(crate) static PLACE : &[PropertySpec] = &[
	PropertySpec::functional("accuracy", FLOAT),
	PropertySpec::functional("altitude", FLOAT),
	PropertySpec::functional("latitude", FLOAT),
	PropertySpec::functional("longitude", FLOAT),
	PropertySpec::functional("radius", FLOAT),
	PropertySpec::functional("units", &[Range::Scalar(Codec::Unit), Range::Scalar(Codec::AnyUri)]),
];

pub trait Place : super::Object {
	property! { accuracy }
	property! { altitude }
	property! { latitude }
	property! { longitude }
	property! { radius }
	property! { units }

	fn coordinates(&self) -> Option<(f64, f64)> {
		let lat = match self.latitude()?.first()? {
			crate::Variant::Float(x) => *x,
			_ => return None,
		};
		let lon = match self.longitude()?.first()? {
			crate::Variant::Float(x) => *x,
			_ => return None,
		};
		Some((lat, lon))
	}
}

impl Place for crate::Entity {}
