use std::borrow::Cow;

use serde_json::Value;

use crate::shape::{JsonConvert, Result, Shape};

impl<T: JsonConvert> JsonConvert for Option<T> {
	const SHAPE: Shape = Shape::Optional;

	fn serial_name() -> Cow<'static, str> {
		Cow::Owned(format!("{}?", T::serial_name()))
	}

	fn to_json(&self) -> Result<Value> {
		match self {
			Some(value) => value.to_json(),
			None => Ok(Value::Null),
		}
	}

	fn from_json(json: &Value) -> Result<Self> {
		if json.is_null() {
			return Ok(None);
		}
		T::from_json(json).map(Some)
	}

	fn from_absent() -> Option<Self> {
		Some(None)
	}
}
