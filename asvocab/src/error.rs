#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("expected a json object, got {0}")]
	NotAnObject(&'static str),

	#[error("malformed 'type' discriminator: {0}")]
	MalformedType(serde_json::Value),

	#[error("no known vocabulary type among {0:?}")]
	UnknownType(Vec<String>),

	#[error("'{0}' is not a vocabulary type")]
	InvalidKind(String),

	#[error("functional property '{property}' received {count} values")]
	FunctionalMultiplicity {
		property: &'static str,
		count: usize,
	},

	#[error("property '{property}' cannot hold {variant} values")]
	IllegalVariant {
		property: &'static str,
		variant: &'static str,
	},

	#[error("type {kind} has no property '{property}'")]
	NoSuchProperty {
		kind: crate::BaseType,
		property: String,
	},

	#[error("non-finite float {0} cannot be represented")]
	NonFiniteFloat(f64),

	#[error("error on {kind}.{property}: {source}")]
	Property {
		kind: crate::BaseType,
		property: &'static str,
		#[source]
		source: Box<Error>,
	},

	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	pub(crate) fn within(self, kind: crate::BaseType, property: &'static str) -> Self {
		Error::Property { kind, property, source: Box::new(self) }
	}

	/// walks nested property errors down to the failure that caused them
	pub fn root_cause(&self) -> &Error {
		match self {
			Error::Property { source, .. } => source.root_cause(),
			x => x,
		}
	}

	/// dotted path of properties leading to the failure, outermost first
	pub fn path(&self) -> Vec<&'static str> {
		let mut out = Vec::new();
		let mut cursor = self;
		while let Error::Property { property, source, .. } = cursor {
			out.push(*property);
			cursor = source;
		}
		out
	}
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
