//! Converters for types that map 1:1 onto JSON without a descriptor.

use std::borrow::Cow;

use serde_json::{Number, Value};

use crate::shape::convert::expect_array;
use crate::shape::{ConvertError, JsonConvert, Result, Shape};

macro_rules! impl_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl JsonConvert for $ty {
				const SHAPE: Shape = Shape::Primitive;

				fn serial_name() -> Cow<'static, str> {
					Cow::Borrowed(stringify!($ty))
				}

				fn to_json(&self) -> Result<Value> {
					Ok(Value::from(*self))
				}

				fn from_json(json: &Value) -> Result<Self> {
					let Value::Number(number) = json else {
						return Err(ConvertError::type_mismatch("number", json));
					};
					if number.is_f64() {
						return Err(ConvertError::NotAnInteger {
							value: number.to_string(),
							target: stringify!($ty),
						});
					}
					let out_of_range = || ConvertError::NumberOutOfRange {
						value: number.to_string(),
						target: stringify!($ty),
					};
					if let Some(value) = number.as_i64() {
						return <$ty>::try_from(value).map_err(|_| out_of_range());
					}
					match number.as_u64() {
						Some(value) => <$ty>::try_from(value).map_err(|_| out_of_range()),
						None => Err(out_of_range()),
					}
				}
			}
		)*
	};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl JsonConvert for f64 {
	const SHAPE: Shape = Shape::Primitive;

	fn serial_name() -> Cow<'static, str> {
		Cow::Borrowed("f64")
	}

	fn to_json(&self) -> Result<Value> {
		finite_number(*self)
	}

	fn from_json(json: &Value) -> Result<Self> {
		json.as_f64().ok_or_else(|| ConvertError::type_mismatch("number", json))
	}
}

impl JsonConvert for f32 {
	const SHAPE: Shape = Shape::Primitive;

	fn serial_name() -> Cow<'static, str> {
		Cow::Borrowed("f32")
	}

	fn to_json(&self) -> Result<Value> {
		// Shortest decimal form, so 0.1f32 prints as 0.1 rather than its f64 widening.
		let widened = self.to_string().parse::<f64>().unwrap_or(f64::from(*self));
		finite_number(widened)
	}

	fn from_json(json: &Value) -> Result<Self> {
		let value = json.as_f64().ok_or_else(|| ConvertError::type_mismatch("number", json))?;
		let narrowed = value as f32;
		if narrowed.is_finite() {
			Ok(narrowed)
		} else {
			Err(ConvertError::NumberOutOfRange {
				value: value.to_string(),
				target: "f32",
			})
		}
	}
}

impl JsonConvert for bool {
	const SHAPE: Shape = Shape::Primitive;

	fn serial_name() -> Cow<'static, str> {
		Cow::Borrowed("bool")
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::Bool(*self))
	}

	fn from_json(json: &Value) -> Result<Self> {
		json.as_bool().ok_or_else(|| ConvertError::type_mismatch("bool", json))
	}
}

impl JsonConvert for String {
	const SHAPE: Shape = Shape::Primitive;

	fn serial_name() -> Cow<'static, str> {
		Cow::Borrowed("string")
	}

	fn to_json(&self) -> Result<Value> {
		Ok(Value::String(self.clone()))
	}

	fn from_json(json: &Value) -> Result<Self> {
		json.as_str().map(str::to_owned).ok_or_else(|| ConvertError::type_mismatch("string", json))
	}
}

impl JsonConvert for Value {
	const SHAPE: Shape = Shape::Primitive;

	fn serial_name() -> Cow<'static, str> {
		Cow::Borrowed("json")
	}

	fn to_json(&self) -> Result<Value> {
		Ok(self.clone())
	}

	fn from_json(json: &Value) -> Result<Self> {
		Ok(json.clone())
	}
}

impl<T: JsonConvert> JsonConvert for Vec<T> {
	const SHAPE: Shape = Shape::Primitive;

	fn serial_name() -> Cow<'static, str> {
		Cow::Owned(format!("[{}]", T::serial_name()))
	}

	fn to_json(&self) -> Result<Value> {
		let items = self.iter().map(JsonConvert::to_json).collect::<Result<Vec<_>>>()?;
		Ok(Value::Array(items))
	}

	fn from_json(json: &Value) -> Result<Self> {
		expect_array(json)?.iter().map(T::from_json).collect()
	}
}

macro_rules! impl_tuple {
	($len:literal : [$($index:tt : $name:ident),+]) => {
		impl<$($name: JsonConvert),+> JsonConvert for ($($name,)+) {
			const SHAPE: Shape = Shape::Primitive;

			fn serial_name() -> Cow<'static, str> {
				let names: Vec<Cow<'static, str>> = vec![$($name::serial_name()),+];
				Cow::Owned(format!("({})", names.join(", ")))
			}

			fn to_json(&self) -> Result<Value> {
				Ok(Value::Array(vec![$(self.$index.to_json()?),+]))
			}

			fn from_json(json: &Value) -> Result<Self> {
				let items = expect_array(json)?;
				if items.len() != $len {
					return Err(ConvertError::TupleLength {
						expected: $len,
						got: items.len(),
					});
				}
				Ok(($($name::from_json(&items[$index])?,)+))
			}
		}
	};
}

impl_tuple!(1: [0: A]);
impl_tuple!(2: [0: A, 1: B]);
impl_tuple!(3: [0: A, 1: B, 2: C]);
impl_tuple!(4: [0: A, 1: B, 2: C, 3: D]);
impl_tuple!(5: [0: A, 1: B, 2: C, 3: D, 4: E]);
impl_tuple!(6: [0: A, 1: B, 2: C, 3: D, 4: E, 5: F]);

fn finite_number(value: f64) -> Result<Value> {
	Number::from_f64(value).map(Value::Number).ok_or(ConvertError::NonFiniteFloat { value })
}
