use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};

use crate::shape::{ConvertError, Result, StaticError};

/// Conversion strategy of a type, fixed per type rather than per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Direct structural mapping onto a JSON scalar, array, or object.
	Primitive,
	/// Descriptor-driven object with members and static members.
	Record,
	/// Symbolic name lookup through an enum value table.
	Enum,
	/// JSON null or the wrapped type.
	Optional,
	/// Single-entry object keyed by the active candidate's serial name.
	SumNamed,
	/// Bare candidate body, disambiguated by static members only.
	SumUniform,
	/// Bounded JSON array.
	FixedSequence,
}

impl Shape {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Primitive => "primitive",
			Self::Record => "record",
			Self::Enum => "enum",
			Self::Optional => "optional",
			Self::SumNamed => "sum-named",
			Self::SumUniform => "sum-uniform",
			Self::FixedSequence => "fixed-sequence",
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A type that converts to and from a generic JSON value.
///
/// Each participating type implements this once, choosing its [`Shape`]. The
/// record, enum and sum-type strategies provide free functions
/// (`record::encode`, `enumeration::decode`, ...) that impls delegate to, and
/// the `impl_*!` macros generate those impls for the common cases.
pub trait JsonConvert: Sized {
	/// Conversion strategy used for this type.
	const SHAPE: Shape;

	/// Serialized type name, used as sum-type key and in `type` static members.
	fn serial_name() -> Cow<'static, str>;

	/// Encode `self` as JSON.
	fn to_json(&self) -> Result<Value>;

	/// Decode a value of this type from JSON.
	fn from_json(json: &Value) -> Result<Self>;

	/// Check whether `json` is plausibly an instance of this type before decoding.
	///
	/// `Ok(Some(_))` is a rejection the caller may collect; `Err` aborts the caller.
	/// Types without static members fall back to a trial decode, whose failures
	/// are all rejections.
	fn static_check(json: &Value) -> Result<Option<StaticError>> {
		Ok(Self::from_json(json).err().map(StaticError::from))
	}

	/// Value to use when a record member of this type is absent.
	fn from_absent() -> Option<Self> {
		None
	}
}

/// Encode a value through its converter.
pub fn to_json<T: JsonConvert>(value: &T) -> Result<Value> {
	value.to_json()
}

/// Decode a value through its converter.
pub fn from_json<T: JsonConvert>(json: &Value) -> Result<T> {
	T::from_json(json)
}

/// Run the pre-decode static check of `T` against `json`.
pub fn static_check<T: JsonConvert>(json: &Value) -> Result<Option<StaticError>> {
	T::static_check(json)
}

/// Fetch and decode member `key` from a JSON object.
///
/// Absent keys fail with [`ConvertError::MissingKey`] unless the member type
/// supplies an absent value (optional members decode to `None`).
pub fn member_fetch<T: JsonConvert>(object: &Map<String, Value>, key: &str) -> Result<T> {
	match object.get(key) {
		Some(value) => T::from_json(value),
		None => T::from_absent().ok_or_else(|| ConvertError::MissingKey { key: key.to_owned() }),
	}
}

/// Structural JSON equality where numbers compare by value (`3 == 3.0`).
pub fn json_eq(left: &Value, right: &Value) -> bool {
	match (left, right) {
		(Value::Number(a), Value::Number(b)) => {
			if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
				return a == b;
			}
			if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
				return a == b;
			}
			match (a.as_f64(), b.as_f64()) {
				(Some(a), Some(b)) => a == b,
				_ => false,
			}
		}
		(Value::Array(a), Value::Array(b)) => a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_eq(a, b)),
		(Value::Object(a), Value::Object(b)) => a.len() == b.len() && a.iter().all(|(key, a)| b.get(key).is_some_and(|b| json_eq(a, b))),
		_ => left == right,
	}
}

pub(crate) fn expect_object<'a>(json: &'a Value) -> Result<&'a Map<String, Value>> {
	json.as_object().ok_or_else(|| ConvertError::type_mismatch("object", json))
}

pub(crate) fn expect_array<'a>(json: &'a Value) -> Result<&'a Vec<Value>> {
	json.as_array().ok_or_else(|| ConvertError::type_mismatch("array", json))
}
