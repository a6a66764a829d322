//! Enum conversion through a (symbolic name, value) table.

use std::borrow::Cow;

use serde_json::Value;

use crate::shape::{ConvertError, JsonConvert, Result};

/// A fieldless enum serialized as one of its symbolic names.
pub trait JsonEnum: JsonConvert + Copy + PartialEq + 'static {
	/// Value table in declared order.
	fn descriptor() -> EnumDescriptor<Self>;

	/// Raw discriminant, only used in error messages.
	fn discriminant(self) -> i64;
}

/// Serialized identity and value table of an enum.
#[derive(Debug, Clone)]
pub struct EnumDescriptor<T> {
	/// Enum's own serialized name.
	pub name: Cow<'static, str>,
	/// Entries in declared order.
	pub values: Vec<EnumValue<T>>,
}

/// One table entry.
#[derive(Debug, Clone, Copy)]
pub struct EnumValue<T> {
	/// Symbolic name written to JSON.
	pub serial_name: &'static str,
	/// Value the name stands for.
	pub value: T,
}

impl<T: PartialEq> EnumDescriptor<T> {
	/// Reject duplicate names or duplicate values.
	pub fn validate(&self) -> Result<()> {
		for (idx, entry) in self.values.iter().enumerate() {
			for later in &self.values[idx + 1..] {
				let reason = if later.serial_name == entry.serial_name {
					format!("duplicate name {}", entry.serial_name)
				} else if later.value == entry.value {
					format!("names {} and {} share a value", entry.serial_name, later.serial_name)
				} else {
					continue;
				};
				return Err(ConvertError::InvalidDescriptor {
					type_name: self.name.to_string(),
					reason,
				});
			}
		}
		Ok(())
	}
}

/// Encode as the first table name whose value equals `value`.
pub fn encode<T: JsonEnum>(value: &T) -> Result<Value> {
	let descriptor = T::descriptor();
	descriptor
		.values
		.iter()
		.find(|entry| entry.value == *value)
		.map(|entry| Value::String(entry.serial_name.to_owned()))
		.ok_or_else(|| ConvertError::InvalidEnumValue {
			enum_name: descriptor.name.to_string(),
			value: value.discriminant().to_string(),
		})
}

/// Decode from a JSON string by exact, case-sensitive name match.
pub fn decode<T: JsonEnum>(json: &Value) -> Result<T> {
	let name = json.as_str().ok_or_else(|| ConvertError::type_mismatch("string", json))?;
	let descriptor = T::descriptor();
	descriptor
		.values
		.iter()
		.find(|entry| entry.serial_name == name)
		.map(|entry| entry.value)
		.ok_or_else(|| ConvertError::InvalidEnumValue {
			enum_name: descriptor.name.to_string(),
			value: Value::from(name).to_string(),
		})
}
