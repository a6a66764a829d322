//! Loading JSON documents from files and readers.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::shape::{JsonConvert, Result};

/// Parse a JSON document from `reader`.
pub fn read_json(reader: impl Read) -> Result<Value> {
	Ok(serde_json::from_reader(reader)?)
}

/// Parse the JSON document stored at `path`.
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value> {
	let file = File::open(path)?;
	read_json(BufReader::new(file))
}

/// Load the document at `path` and decode it as `T`.
pub fn decode_file<T: JsonConvert>(path: impl AsRef<Path>) -> Result<T> {
	T::from_json(&read_json_file(path)?)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{decode_file, read_json, read_json_file};
	use crate::shape::ConvertError;

	#[test]
	fn reads_from_any_reader() {
		let value = read_json(&br#"{"a": [1, 2]}"#[..]).expect("valid json");
		assert_eq!(value, json!({"a": [1, 2]}));
	}

	#[test]
	fn malformed_text_is_a_parse_error() {
		let err = read_json(&b"{"[..]).expect_err("truncated");
		assert!(matches!(err, ConvertError::Parse(_)));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let err = read_json_file("definitely/not/here.json").expect_err("missing file");
		assert!(matches!(err, ConvertError::Io(_)));
	}

	#[test]
	fn decodes_fixture_file() {
		let path = jsonshape_testkit::fixture_path("capacity_three.json");
		let items: Vec<i32> = decode_file(path).expect("fixture decodes");
		assert_eq!(items, [1, 2, 3]);
	}
}
