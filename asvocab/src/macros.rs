#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl $enum_name {
				pub fn as_str(&self) -> &'static str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_str(),)*
					}
				}

				/// every tag this enum can hold, nested ones included
				pub fn variants() -> Vec<Self> {
					#[allow(unused_mut)]
					let mut out : Vec<Self> = vec![$(Self::$flat,)*];
					$(
						out.extend($inner::variants().into_iter().map(Self::$deep));
					)*
					out
				}
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					self.as_str()
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_str())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

// generates `name()` and `name_mut()` slot accessors, `None` when the kind doesn't carry the property
macro_rules! property {
	($name:ident) => {
		$crate::macros::property! { $name::$name }
	};

	($name:ident::$rename:ident) => {
		fn $name(&self) -> Option<&$crate::Slot> {
			$crate::Base::property(self, stringify!($rename))
		}

		paste::item! {
			fn [< $name _mut >](&mut self) -> Option<&mut $crate::Slot> {
				$crate::Base::property_mut(self, stringify!($rename))
			}
		}
	};
}

pub(crate) use property;
