//! Tagged sum types over a closed, ordered candidate list.
//!
//! Both flavors resolve candidates by walking them in declared order and
//! returning the first one whose static check accepts the body. Later
//! candidates that could also decode the body are never tried.

pub mod named;
pub mod uniform;

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::shape::{ConvertError, JsonConvert, Result, Shape, StaticError};

type DecodeFn<T> = Box<dyn Fn(&Value) -> Result<T> + Send + Sync>;

/// A closed choice among candidate types.
pub trait SumType: JsonConvert + 'static {
	/// Candidates in declared order.
	fn candidates() -> Vec<Candidate<Self>>;

	/// Serial name and body of the active alternative.
	fn encode_active(&self) -> Result<Encoded>;
}

/// One alternative of a sum type.
pub struct Candidate<T> {
	serial_name: Cow<'static, str>,
	shape: Shape,
	check: fn(&Value) -> Result<Option<StaticError>>,
	decode: DecodeFn<T>,
}

/// Encoded active alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded {
	/// Serial name of the alternative's type.
	pub serial_name: Cow<'static, str>,
	/// The alternative's own JSON form.
	pub body: Value,
}

impl<T: 'static> Candidate<T> {
	/// Candidate of type `C`, lifted into the sum type by `wrap`.
	pub fn of<C, F>(wrap: F) -> Self
	where
		C: JsonConvert + 'static,
		F: Fn(C) -> T + Send + Sync + 'static,
	{
		Self {
			serial_name: C::serial_name(),
			shape: C::SHAPE,
			check: C::static_check,
			decode: Box::new(move |json: &Value| C::from_json(json).map(&wrap)),
		}
	}
}

impl<T> Candidate<T> {
	/// Serial name of the candidate type.
	pub fn serial_name(&self) -> &str {
		&self.serial_name
	}

	/// Conversion strategy of the candidate type.
	pub fn shape(&self) -> Shape {
		self.shape
	}
}

impl<T> fmt::Debug for Candidate<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Candidate")
			.field("serial_name", &self.serial_name)
			.field("shape", &self.shape)
			.finish_non_exhaustive()
	}
}

impl Encoded {
	/// Encode `value` as an alternative.
	pub fn of<C: JsonConvert>(value: &C) -> Result<Self> {
		Ok(Self {
			serial_name: C::serial_name(),
			body: value.to_json()?,
		})
	}
}

/// Decode `body` as the first candidate that passes its static check.
///
/// With `key` set, only candidates named `key` are considered. Static-value
/// mismatches are collected in attempt order. A missing static key, a body of
/// the wrong kind, or a decode failure after a passing check propagates as is.
fn first_match<T>(sum_name: &str, candidates: &[Candidate<T>], key: Option<&str>, body: &Value) -> Result<T> {
	let mut errors = Vec::new();
	for (index, candidate) in candidates.iter().enumerate() {
		if key.is_some_and(|key| candidate.serial_name != key) {
			continue;
		}
		match (candidate.check)(body)? {
			Some(err) => {
				trace!(sum = sum_name, index, candidate = %candidate.serial_name, error = %err, "candidate rejected");
				errors.push(err);
			}
			None => {
				debug!(sum = sum_name, index, candidate = %candidate.serial_name, "candidate selected");
				return (candidate.decode)(body);
			}
		}
	}

	debug!(sum = sum_name, rejected = errors.len(), "no candidate matched");
	Err(ConvertError::NoMatchingVariant {
		candidates: candidates.iter().map(|candidate| candidate.serial_name.to_string()).collect(),
		errors,
	})
}
