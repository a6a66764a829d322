//! Named flavor: `{ "<candidate serial name>": <candidate body> }`.

use serde_json::{Map, Value};

use crate::shape::variant::{SumType, first_match};
use crate::shape::{ConvertError, Result, json_kind};

/// Wrap the active alternative in a single-entry object keyed by its serial name.
pub fn encode<T: SumType>(value: &T) -> Result<Value> {
	let encoded = value.encode_active()?;
	let mut object = Map::with_capacity(1);
	object.insert(encoded.serial_name.into_owned(), encoded.body);
	Ok(Value::Object(object))
}

/// Decode the first candidate named by the object's only key whose static check passes.
pub fn decode<T: SumType>(json: &Value) -> Result<T> {
	let (key, body) = single_entry(json)?;
	first_match(&T::serial_name(), &T::candidates(), Some(key), body)
}

fn single_entry(json: &Value) -> Result<(&str, &Value)> {
	let got = match json {
		Value::Object(object) => match object.iter().next() {
			Some((key, body)) if object.len() == 1 => return Ok((key.as_str(), body)),
			_ => format!("object with {} entries", object.len()),
		},
		other => json_kind(other).to_owned(),
	};
	Err(ConvertError::NotASingleEntryObject { got })
}
