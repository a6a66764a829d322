use std::borrow::Cow;
use std::marker::PhantomData;

use jsonshape::serde_json::Value;
use jsonshape::shape::{self, JsonConvert, LimitedVec, Record, Result, Shape, StaticError, TypeDescriptor, TypeRegistry};
use jsonshape::{impl_enum, impl_named_variant, impl_record, impl_uniform_variant};

/// Record with a float, a pair, and an integer.
#[derive(Debug, Clone, PartialEq)]
pub struct Test1 {
	pub a: f32,
	pub b: (f32, i32),
	pub c: i32,
}

impl Default for Test1 {
	fn default() -> Self {
		Self { a: 0.0, b: (2.0, 3), c: 1 }
	}
}

impl_record!(Test1 as "Test1" {
	"a" => a,
	"b" => b,
	"c" => c,
});

/// Record nesting a [`Test1`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestTwo {
	pub a: f32,
	pub b: Test1,
	pub c: i32,
}

impl_record!(TestTwo as "test_two" {
	"a" => a,
	"b" => b,
	"c" => c,
});

/// Named sum over [`Test1`] and [`TestTwo`].
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrTwo {
	One(Test1),
	Two(TestTwo),
}

impl Default for OneOrTwo {
	fn default() -> Self {
		Self::One(Test1 { c: 3, ..Test1::default() })
	}
}

impl_named_variant!(OneOrTwo as "one_or_two" {
	One(Test1),
	Two(TestTwo),
});

/// Record holding a sum-typed member.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Test3 {
	pub a: f32,
	pub b: OneOrTwo,
}

impl_record!(Test3 as "test_3" {
	"a" => a,
	"b" => b,
});

/// Record without members.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Test4;

impl_record!(Test4 as "test_4" {});

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
	Forward,
	Backward,
}

impl_enum!(Direction as "direction" {
	"forward" => Forward,
	"backward" => Backward,
});

/// Type-level [`Direction`] for [`Templ5`] specializations.
pub trait Heading: 'static {
	/// Direction written to the `value` static member.
	const DIRECTION: Direction;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Forward {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backward {}

impl Heading for Forward {
	const DIRECTION: Direction = Direction::Forward;
}

impl Heading for Backward {
	const DIRECTION: Direction = Direction::Backward;
}

/// Generic record; each specialization carries its direction and scalar tag as static members.
#[derive(Debug, Clone, PartialEq)]
pub struct Templ5<D, S> {
	pub a: i32,
	marker: PhantomData<(D, S)>,
}

impl<D, S> Templ5<D, S> {
	pub fn new(a: i32) -> Self {
		Self { a, marker: PhantomData }
	}
}

impl<D: Heading, S: JsonConvert + 'static> JsonConvert for Templ5<D, S> {
	const SHAPE: Shape = Shape::Record;

	fn serial_name() -> Cow<'static, str> {
		Cow::Borrowed("templ5")
	}

	fn to_json(&self) -> Result<Value> {
		shape::record::encode(self)
	}

	fn from_json(json: &Value) -> Result<Self> {
		shape::record::decode(json)
	}

	fn static_check(json: &Value) -> Result<Option<StaticError>> {
		shape::record::static_check::<Self>(json)
	}
}

impl<D: Heading, S: JsonConvert + 'static> Record for Templ5<D, S> {
	fn descriptor() -> Result<TypeDescriptor<Self>> {
		TypeDescriptor::builder()
			.static_member("value", shape::to_json(&D::DIRECTION)?)
			.static_member("type", S::serial_name())
			.member("a", |value: &Self| &value.a)
			.build(|reader| Ok(Self::new(reader.read()?)))
	}
}

pub type ForwardF32 = Templ5<Forward, f32>;
pub type BackwardI32 = Templ5<Backward, i32>;

/// Named sum over the two `templ5` specializations.
#[derive(Debug, Clone, PartialEq)]
pub enum Templ5Named {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
}

impl_named_variant!(Templ5Named as "templ5_named" {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
});

/// Uniform sum over the two `templ5` specializations.
#[derive(Debug, Clone, PartialEq)]
pub enum Templ5Uniform {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
}

impl_uniform_variant!(Templ5Uniform as "templ5_uniform" {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
});

/// Named sum over two scalar types.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	Int(i32),
	Float(f32),
}

impl_named_variant!(Scalar as "scalar" {
	Int(i32),
	Float(f32),
});

/// Registry of every demo type, keyed by command-line name.
pub fn registry() -> Result<TypeRegistry> {
	let mut registry = TypeRegistry::new();
	registry.register::<Test1>("test1")?;
	registry.register::<TestTwo>("test_two")?;
	registry.register::<Test3>("test_3")?;
	registry.register::<Test4>("test_4")?;
	registry.register::<Direction>("direction")?;
	registry.register::<ForwardF32>("templ5_forward_f32")?;
	registry.register::<BackwardI32>("templ5_backward_i32")?;
	registry.register::<OneOrTwo>("one_or_two")?;
	registry.register::<Templ5Named>("templ5")?;
	registry.register::<Templ5Uniform>("templ5_uniform")?;
	registry.register::<Scalar>("scalar")?;
	registry.register::<Option<Test1>>("maybe_test1")?;
	registry.register::<LimitedVec<i32, 3>>("ints3")?;
	Ok(registry)
}
