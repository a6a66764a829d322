use serde_json::Value;
use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors produced while converting typed values to and from JSON.
#[derive(Debug, Error)]
pub enum ConvertError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text is not a valid JSON document.
	#[error("json parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// Required member or tag key is absent from a JSON object.
	#[error("key not found: {key}")]
	MissingKey {
		/// Serialized key that was looked up.
		key: String,
	},
	/// JSON value kind does not match the expected shape.
	#[error("expected {expected}, got {got}")]
	TypeMismatch {
		/// Expected JSON kind.
		expected: &'static str,
		/// Actual JSON kind.
		got: &'static str,
	},
	/// Number does not fit the target scalar type.
	#[error("number {value} is out of range for {target}")]
	NumberOutOfRange {
		/// Rendered JSON number.
		value: String,
		/// Target scalar type name.
		target: &'static str,
	},
	/// Number written with a fraction or exponent was given for an integer type.
	#[error("expected integer for {target}, got {value}")]
	NotAnInteger {
		/// Rendered JSON number.
		value: String,
		/// Target integer type name.
		target: &'static str,
	},
	/// Float value has no JSON representation.
	#[error("non-finite float {value} cannot be represented in json")]
	NonFiniteFloat {
		/// Offending value.
		value: f64,
	},
	/// Array length differs from the tuple arity.
	#[error("expected array of length {expected}, got {got}")]
	TupleLength {
		/// Tuple arity.
		expected: usize,
		/// Actual array length.
		got: usize,
	},
	/// Static member value differs from the type's fixed value.
	#[error("the value of key {key} is {found}, not {expected}")]
	StaticMismatch {
		/// Static member key.
		key: String,
		/// Value present in the JSON object.
		found: Value,
		/// Fixed reference value declared by the type.
		expected: Value,
	},
	/// Enum value or name has no entry in the value table.
	#[error("{value} is not a valid value for the enum {enum_name}")]
	InvalidEnumValue {
		/// Serialized enum identity.
		enum_name: String,
		/// Raw discriminant (encode) or quoted name (decode).
		value: String,
	},
	/// Named sum-type JSON is not an object with exactly one key.
	#[error("a variant json needs to be an object with a single entry, got {got}")]
	NotASingleEntryObject {
		/// Description of what was found instead.
		got: String,
	},
	/// No sum-type candidate matched by name and static check.
	#[error("{}", render_no_match(.candidates, .errors))]
	NoMatchingVariant {
		/// Declared candidate names in declaration order.
		candidates: Vec<String>,
		/// Static-check failures in the order candidates were attempted.
		errors: Vec<StaticError>,
	},
	/// JSON array is longer than the sequence capacity.
	#[error("capacity exceeded: len={len}, capacity={capacity}")]
	CapacityExceeded {
		/// Capacity of the target sequence type.
		capacity: usize,
		/// Length of the JSON array.
		len: usize,
	},
	/// Type descriptor violates its own invariants.
	#[error("invalid descriptor for {type_name}: {reason}")]
	InvalidDescriptor {
		/// Serialized type name.
		type_name: String,
		/// What is wrong with it.
		reason: String,
	},
	/// Registry lookup failed.
	#[error("unknown type: {name}")]
	UnknownType {
		/// Requested registry name.
		name: String,
	},
}

/// Explanation of why one candidate type rejected a JSON value.
///
/// Collected as data while scanning sum-type candidates and only turned into a
/// failure by [`ConvertError::NoMatchingVariant`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StaticError {
	message: String,
}

impl StaticError {
	/// Build from a free-form explanation.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	/// Static member `key` holds `found` instead of `expected`.
	pub fn mismatch(key: &str, found: &Value, expected: &Value) -> Self {
		Self::from(ConvertError::StaticMismatch {
			key: key.to_owned(),
			found: found.clone(),
			expected: expected.clone(),
		})
	}

	/// Human-readable explanation.
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl From<ConvertError> for StaticError {
	fn from(err: ConvertError) -> Self {
		Self { message: err.to_string() }
	}
}

impl ConvertError {
	pub(crate) fn type_mismatch(expected: &'static str, got: &Value) -> Self {
		Self::TypeMismatch {
			expected,
			got: json_kind(got),
		}
	}
}

/// JSON kind name used in mismatch messages.
pub fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn render_no_match(candidates: &[String], errors: &[StaticError]) -> String {
	let mut out = format!("no matching variant among [{}]", candidates.join(", "));
	if !errors.is_empty() {
		let messages: Vec<&str> = errors.iter().map(StaticError::message).collect();
		out.push_str(&format!("; candidate errors: [{}]", messages.join(", ")));
	}
	out
}
