//! Declarative descriptor providers for the common non-generic cases.
//!
//! Generic records (one descriptor per specialization) implement
//! [`Record`](crate::shape::Record) and [`JsonConvert`](crate::shape::JsonConvert) by hand.

/// Implement `JsonConvert` + `Record` for a struct with named fields.
///
/// ```
/// use jsonshape::impl_record;
///
/// #[derive(Debug, PartialEq)]
/// struct Pixel {
/// 	x: u32,
/// 	y: u32,
/// }
///
/// impl_record!(Pixel as "pixel" static { "depth" => 8 } {
/// 	"x" => x,
/// 	"y" => y,
/// });
///
/// let json = jsonshape::shape::to_json(&Pixel { x: 1, y: 2 }).unwrap();
/// assert_eq!(json.to_string(), r#"{"depth":8,"x":1,"y":2}"#);
/// ```
#[macro_export]
macro_rules! impl_record {
	($ty:ident as $name:literal $(static { $($skey:literal => $sval:expr),* $(,)? })? { $($key:literal => $field:ident),* $(,)? }) => {
		impl $crate::shape::JsonConvert for $ty {
			const SHAPE: $crate::shape::Shape = $crate::shape::Shape::Record;

			fn serial_name() -> ::std::borrow::Cow<'static, str> {
				::std::borrow::Cow::Borrowed($name)
			}

			fn to_json(&self) -> $crate::shape::Result<$crate::serde_json::Value> {
				$crate::shape::record::encode(self)
			}

			fn from_json(json: &$crate::serde_json::Value) -> $crate::shape::Result<Self> {
				$crate::shape::record::decode(json)
			}

			fn static_check(json: &$crate::serde_json::Value) -> $crate::shape::Result<::std::option::Option<$crate::shape::StaticError>> {
				$crate::shape::record::static_check::<Self>(json)
			}
		}

		impl $crate::shape::Record for $ty {
			fn descriptor() -> $crate::shape::Result<$crate::shape::TypeDescriptor<Self>> {
				$crate::shape::TypeDescriptor::builder()
					$($(.static_member($skey, $sval))*)?
					$(.member($key, |value: &Self| &value.$field))*
					.build(|_reader| Ok($ty { $($field: _reader.read()?),* }))
			}
		}
	};
}

/// Implement `JsonConvert` + `JsonEnum` for a fieldless enum.
#[macro_export]
macro_rules! impl_enum {
	($ty:ident as $name:literal { $($key:literal => $variant:ident),+ $(,)? }) => {
		impl $crate::shape::JsonConvert for $ty {
			const SHAPE: $crate::shape::Shape = $crate::shape::Shape::Enum;

			fn serial_name() -> ::std::borrow::Cow<'static, str> {
				::std::borrow::Cow::Borrowed($name)
			}

			fn to_json(&self) -> $crate::shape::Result<$crate::serde_json::Value> {
				$crate::shape::enumeration::encode(self)
			}

			fn from_json(json: &$crate::serde_json::Value) -> $crate::shape::Result<Self> {
				$crate::shape::enumeration::decode(json)
			}
		}

		impl $crate::shape::JsonEnum for $ty {
			fn descriptor() -> $crate::shape::EnumDescriptor<Self> {
				$crate::shape::EnumDescriptor {
					name: ::std::borrow::Cow::Borrowed($name),
					values: ::std::vec![$($crate::shape::EnumValue {
						serial_name: $key,
						value: Self::$variant,
					}),+],
				}
			}

			fn discriminant(self) -> i64 {
				self as i64
			}
		}
	};
}

/// Implement a named-flavor sum type over single-field tuple variants.
#[macro_export]
macro_rules! impl_named_variant {
	($ty:ident as $name:literal { $($variant:ident($inner:ty)),+ $(,)? }) => {
		$crate::__impl_sum!(SumNamed, named, $ty, $name, $($variant($inner)),+);
	};
}

/// Implement a uniform-flavor sum type over single-field tuple variants.
#[macro_export]
macro_rules! impl_uniform_variant {
	($ty:ident as $name:literal { $($variant:ident($inner:ty)),+ $(,)? }) => {
		$crate::__impl_sum!(SumUniform, uniform, $ty, $name, $($variant($inner)),+);
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_sum {
	($shape:ident, $flavor:ident, $ty:ident, $name:literal, $($variant:ident($inner:ty)),+) => {
		impl $crate::shape::JsonConvert for $ty {
			const SHAPE: $crate::shape::Shape = $crate::shape::Shape::$shape;

			fn serial_name() -> ::std::borrow::Cow<'static, str> {
				::std::borrow::Cow::Borrowed($name)
			}

			fn to_json(&self) -> $crate::shape::Result<$crate::serde_json::Value> {
				$crate::shape::variant::$flavor::encode(self)
			}

			fn from_json(json: &$crate::serde_json::Value) -> $crate::shape::Result<Self> {
				$crate::shape::variant::$flavor::decode(json)
			}
		}

		impl $crate::shape::SumType for $ty {
			fn candidates() -> ::std::vec::Vec<$crate::shape::Candidate<Self>> {
				::std::vec![$($crate::shape::Candidate::of::<$inner, _>(Self::$variant)),+]
			}

			fn encode_active(&self) -> $crate::shape::Result<$crate::shape::Encoded> {
				match self {
					$(Self::$variant(value) => $crate::shape::Encoded::of(value),)+
				}
			}
		}
	};
}
