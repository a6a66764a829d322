//! Ordered sequence with a compile-time capacity bound.

use std::borrow::Cow;
use std::ops::Deref;

use serde_json::Value;

use crate::shape::convert::expect_array;
use crate::shape::{ConvertError, JsonConvert, Result, Shape};

/// A vector that never holds more than `N` elements.
///
/// ```
/// use jsonshape::shape::LimitedVec;
///
/// let mut items: LimitedVec<i32, 2> = LimitedVec::new();
/// items.push(1).unwrap();
/// items.push(2).unwrap();
/// assert!(items.is_full());
/// assert_eq!(items.push(3), Err(3)); // Full, returns the element
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LimitedVec<T, const N: usize> {
	items: Vec<T>,
}

impl<T, const N: usize> Default for LimitedVec<T, N> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, const N: usize> LimitedVec<T, N> {
	/// Upper bound on the number of elements.
	pub const CAPACITY: usize = N;

	/// Empty sequence.
	pub fn new() -> Self {
		Self { items: Vec::new() }
	}

	/// Take ownership of `items`, rejecting more than `N` elements.
	pub fn try_from_vec(items: Vec<T>) -> Result<Self> {
		if items.len() > N {
			return Err(ConvertError::CapacityExceeded { capacity: N, len: items.len() });
		}
		Ok(Self { items })
	}

	/// Append `value`, handing it back when the sequence is full.
	pub fn push(&mut self, value: T) -> std::result::Result<(), T> {
		if self.is_full() {
			return Err(value);
		}
		self.items.push(value);
		Ok(())
	}

	/// Remove and return the last element.
	pub fn pop(&mut self) -> Option<T> {
		self.items.pop()
	}

	/// Whether `len() == N`.
	pub fn is_full(&self) -> bool {
		self.items.len() >= N
	}

	/// Elements as a slice.
	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	/// Give back the inner vector.
	pub fn into_vec(self) -> Vec<T> {
		self.items
	}
}

impl<T, const N: usize> Deref for LimitedVec<T, N> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		&self.items
	}
}

impl<'a, T, const N: usize> IntoIterator for &'a LimitedVec<T, N> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: JsonConvert, const N: usize> JsonConvert for LimitedVec<T, N> {
	const SHAPE: Shape = Shape::FixedSequence;

	fn serial_name() -> Cow<'static, str> {
		Cow::Owned(format!("[{}; <={N}]", T::serial_name()))
	}

	fn to_json(&self) -> Result<Value> {
		let items = self.items.iter().map(JsonConvert::to_json).collect::<Result<Vec<_>>>()?;
		Ok(Value::Array(items))
	}

	fn from_json(json: &Value) -> Result<Self> {
		let items = expect_array(json)?;
		if items.len() > N {
			return Err(ConvertError::CapacityExceeded { capacity: N, len: items.len() });
		}
		let items = items.iter().map(T::from_json).collect::<Result<Vec<_>>>()?;
		Ok(Self { items })
	}
}
