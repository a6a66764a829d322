//! Runtime lookup of convertible types by name.

use std::borrow::Cow;

use serde_json::Value;

use crate::shape::{ConvertError, JsonConvert, Result, Shape, StaticError};

/// One registered type with its type-erased conversion entry points.
#[derive(Debug, Clone)]
pub struct RegisteredType {
	/// Registry key.
	pub name: Box<str>,
	/// Serialized type name.
	pub serial_name: Cow<'static, str>,
	/// Conversion strategy.
	pub shape: Shape,
	normalize: fn(&Value) -> Result<Value>,
	check: fn(&Value) -> Result<Option<StaticError>>,
}

impl RegisteredType {
	/// Decode `json` as this type and encode the result again.
	pub fn normalize(&self, json: &Value) -> Result<Value> {
		(self.normalize)(json)
	}

	/// Run this type's static check.
	pub fn check(&self, json: &Value) -> Result<Option<StaticError>> {
		(self.check)(json)
	}
}

/// Name-keyed table of registered types, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
	entries: Vec<RegisteredType>,
}

impl TypeRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `T` under `name`, rejecting duplicate names.
	///
	/// Returns the registry so registrations can be chained.
	pub fn register<T: JsonConvert>(&mut self, name: &str) -> Result<&mut Self> {
		if self.get(name).is_ok() {
			return Err(ConvertError::InvalidDescriptor {
				type_name: T::serial_name().into_owned(),
				reason: format!("registry name {name} is already taken"),
			});
		}
		self.entries.push(RegisteredType {
			name: name.into(),
			serial_name: T::serial_name(),
			shape: T::SHAPE,
			normalize: normalize::<T>,
			check: T::static_check,
		});
		Ok(self)
	}

	/// Look up a type by registry name.
	pub fn get(&self, name: &str) -> Result<&RegisteredType> {
		self.entries
			.iter()
			.find(|entry| &*entry.name == name)
			.ok_or_else(|| ConvertError::UnknownType { name: name.to_owned() })
	}

	/// Registered types in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &RegisteredType> {
		self.entries.iter()
	}

	/// Number of registered types.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

fn normalize<T: JsonConvert>(json: &Value) -> Result<Value> {
	T::from_json(json)?.to_json()
}
