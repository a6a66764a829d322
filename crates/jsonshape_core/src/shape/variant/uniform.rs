//! Uniform flavor: every candidate shares one serial name, so the bare body is
//! written and static members alone pick the candidate on decode.

use serde_json::Value;

use crate::shape::variant::{Candidate, SumType, first_match};
use crate::shape::{ConvertError, Result};

/// Emit the active alternative's own JSON form without wrapping.
pub fn encode<T: SumType>(value: &T) -> Result<Value> {
	Ok(value.encode_active()?.body)
}

/// Run every candidate's static check against the whole value, first pass wins.
pub fn decode<T: SumType>(json: &Value) -> Result<T> {
	let sum_name = T::serial_name();
	let candidates = T::candidates();
	validate(&sum_name, &candidates)?;
	first_match(&sum_name, &candidates, None, json)
}

/// Require all candidates to share one serial name.
pub fn validate<T>(sum_name: &str, candidates: &[Candidate<T>]) -> Result<()> {
	let Some(first) = candidates.first() else {
		return Err(ConvertError::InvalidDescriptor {
			type_name: sum_name.to_owned(),
			reason: "sum type has no candidates".to_owned(),
		});
	};
	if let Some(other) = candidates.iter().find(|candidate| candidate.serial_name() != first.serial_name()) {
		return Err(ConvertError::InvalidDescriptor {
			type_name: sum_name.to_owned(),
			reason: format!("uniform candidates disagree on serial name: {} vs {}", first.serial_name(), other.serial_name()),
		});
	}
	Ok(())
}
