#![allow(missing_docs)]

use std::borrow::Cow;
use std::marker::PhantomData;

use jsonshape::serde_json::{Value, json};
use jsonshape::shape::io::{decode_file, read_json_file};
use jsonshape::shape::{self, ConvertError, JsonConvert, LimitedVec, Record, Result, Shape, StaticError, TypeDescriptor, from_json, static_check, to_json};
use jsonshape::{impl_enum, impl_named_variant, impl_record, impl_uniform_variant};
use jsonshape_testkit::{fixture_path, load_fixture};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Test1 {
	a: f32,
	b: (f32, i32),
	c: i32,
}

impl Test1 {
	fn sample() -> Self {
		Self { a: 0.0, b: (2.0, 3), c: 1 }
	}
}

impl_record!(Test1 as "Test1" {
	"a" => a,
	"b" => b,
	"c" => c,
});

#[derive(Debug, Clone, PartialEq)]
struct TestTwo {
	a: f32,
	b: Test1,
	c: i32,
}

impl_record!(TestTwo as "test_two" {
	"a" => a,
	"b" => b,
	"c" => c,
});

#[derive(Debug, Clone, PartialEq)]
enum OneOrTwo {
	One(Test1),
	Two(TestTwo),
}

impl_named_variant!(OneOrTwo as "one_or_two" {
	One(Test1),
	Two(TestTwo),
});

#[derive(Debug, Clone, PartialEq)]
struct Test3 {
	a: f32,
	b: OneOrTwo,
}

impl_record!(Test3 as "test_3" {
	"a" => a,
	"b" => b,
});

#[derive(Debug, Clone, PartialEq)]
struct Test4;

impl_record!(Test4 as "test_4" {});

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
	Forward,
	Backward,
}

impl_enum!(Direction as "direction" {
	"forward" => Forward,
	"backward" => Backward,
});

/// Type-level direction used as a `Templ5` parameter.
trait Heading: 'static {
	const DIRECTION: Direction;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Forward {}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Backward {}

impl Heading for Forward {
	const DIRECTION: Direction = Direction::Forward;
}

impl Heading for Backward {
	const DIRECTION: Direction = Direction::Backward;
}

/// Generic record whose specializations differ only in static members.
#[derive(Debug, Clone, PartialEq)]
struct Templ5<D, S> {
	a: i32,
	marker: PhantomData<(D, S)>,
}

impl<D, S> Templ5<D, S> {
	fn new(a: i32) -> Self {
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

type ForwardF32 = Templ5<Forward, f32>;
type BackwardI32 = Templ5<Backward, i32>;

#[derive(Debug, Clone, PartialEq)]
enum Templ5Named {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
}

impl_named_variant!(Templ5Named as "templ5_named" {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
});

#[derive(Debug, Clone, PartialEq)]
enum Templ5Uniform {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
}

impl_uniform_variant!(Templ5Uniform as "templ5_uniform" {
	ForwardF32(ForwardF32),
	BackwardI32(BackwardI32),
});

#[derive(Debug, Clone, PartialEq)]
enum Scalar {
	Int(i32),
	Float(f32),
}

impl_named_variant!(Scalar as "scalar" {
	Int(i32),
	Float(f32),
});

#[test]
fn test1_encodes_members_in_declared_order() {
	let json = to_json(&Test1::sample()).expect("Test1 encodes");
	assert_eq!(json.to_string(), r#"{"a":0.0,"b":[2.0,3],"c":1}"#);
}

#[test]
fn named_sum_wraps_test1_and_decodes_back_to_first_alternative() {
	let json = to_json(&OneOrTwo::One(Test1::sample())).expect("sum encodes");
	assert_eq!(json.to_string(), r#"{"Test1":{"a":0.0,"b":[2.0,3],"c":1}}"#);

	let back: OneOrTwo = from_json(&json).expect("sum decodes");
	assert_eq!(back, OneOrTwo::One(Test1::sample()));
}

#[test]
fn nested_records_round_trip() {
	let value = Test3 {
		a: 1.5,
		b: OneOrTwo::Two(TestTwo {
			a: 0.25,
			b: Test1 { a: 4.5, b: (-1.0, 9), c: 2 },
			c: -7,
		}),
	};
	let json = to_json(&value).expect("Test3 encodes");
	assert_eq!(json["b"]["test_two"]["b"]["b"], json!([-1.0, 9]));
	assert_eq!(from_json::<Test3>(&json).expect("Test3 decodes"), value);
}

#[test]
fn memberless_record_is_an_empty_object() {
	assert_eq!(to_json(&Test4).expect("Test4 encodes"), json!({}));
	assert_eq!(from_json::<Test4>(&json!({"ignored": true})).expect("extra keys are ignored"), Test4);
	assert!(from_json::<Test4>(&json!([])).is_err());
}

#[test]
fn missing_required_member_fails() {
	let err = from_json::<Test1>(&json!({"a": 0.0, "b": [2.0, 3]})).expect_err("c is required");
	assert!(matches!(err, ConvertError::MissingKey { ref key } if key == "c"));
}

#[test]
fn templ5_statics_are_emitted_for_every_value() {
	for a in [0, 3, -12] {
		let json = to_json(&ForwardF32::new(a)).expect("templ5 encodes");
		assert_eq!(json, json!({"value": "forward", "type": "f32", "a": a}));
		let json = to_json(&BackwardI32::new(a)).expect("templ5 encodes");
		assert_eq!(json, json!({"value": "backward", "type": "i32", "a": a}));
	}
}

#[test]
fn templ5_static_members_select_the_specialization() {
	let forward: Templ5Named = from_json(&json!({"templ5": {"type": "f32", "value": "forward", "a": 3}})).expect("forward decodes");
	assert_eq!(forward, Templ5Named::ForwardF32(ForwardF32::new(3)));

	let backward: Templ5Named = from_json(&json!({"templ5": {"type": "i32", "value": "backward", "a": 3}})).expect("backward decodes");
	assert_eq!(backward, Templ5Named::BackwardI32(BackwardI32::new(3)));
}

#[test]
fn templ5_uniform_flavor_reads_the_bare_body() {
	let json = to_json(&Templ5Uniform::BackwardI32(BackwardI32::new(5))).expect("uniform encodes");
	assert_eq!(json, json!({"value": "backward", "type": "i32", "a": 5}));
	let back: Templ5Uniform = from_json(&json).expect("uniform decodes");
	assert_eq!(back, Templ5Uniform::BackwardI32(BackwardI32::new(5)));
}

#[test]
fn templ5_mixed_statics_match_no_specialization() {
	let err = from_json::<Templ5Named>(&json!({"templ5": {"type": "f32", "value": "backward", "a": 3}})).expect_err("no specialization matches");
	assert_eq!(
		err.to_string(),
		r#"no matching variant among [templ5, templ5]; candidate errors: [the value of key value is "backward", not "forward", the value of key type is "f32", not "i32"]"#
	);
}

#[test]
fn templ5_uniform_stops_when_a_static_key_is_absent() {
	let err = from_json::<Templ5Uniform>(&json!({"type": "i32", "a": 3})).expect_err("value is absent");
	assert_eq!(err.to_string(), "key not found: value");
}

#[test]
fn templ5_static_check_reports_first_mismatch() {
	let body = json!({"type": "i32", "value": "backward", "a": 1});
	let err = static_check::<ForwardF32>(&body).expect("body is an object").expect("forward rejects backward");
	assert_eq!(err.message(), r#"the value of key value is "backward", not "forward""#);
	assert!(static_check::<BackwardI32>(&body).expect("body is an object").is_none());

	let err = static_check::<ForwardF32>(&json!({"type": "f32", "a": 1})).expect_err("value is absent");
	assert!(matches!(err, ConvertError::MissingKey { ref key } if key == "value"));
}

#[rstest]
#[case(json!({"i64": 1}), "no matching variant among [i32, f32]")]
#[case(json!({"i32": "a"}), "no matching variant among [i32, f32]; candidate errors: [expected number, got string]")]
#[case(json!({"f32": null}), "no matching variant among [i32, f32]; candidate errors: [expected number, got null]")]
fn scalar_sum_failures(#[case] input: Value, #[case] expected: &str) {
	let err = from_json::<Scalar>(&input).expect_err("no scalar candidate matches");
	assert!(matches!(err, ConvertError::NoMatchingVariant { .. }));
	assert_eq!(err.to_string(), expected);
}

#[rstest]
#[case(json!({"i32": 7}), Scalar::Int(7))]
#[case(json!({"f32": 0.5}), Scalar::Float(0.5))]
fn scalar_sum_successes(#[case] input: Value, #[case] expected: Scalar) {
	assert_eq!(from_json::<Scalar>(&input).expect("scalar decodes"), expected);
}

#[test]
fn bounded_sequence_of_records() {
	let two = json!([{"a": 0.0, "b": [2.0, 3], "c": 1}, {"a": 1.0, "b": [0.0, 0], "c": 2}]);
	let items: LimitedVec<Test1, 2> = from_json(&two).expect("two records fit");
	assert_eq!(items.len(), 2);
	assert_eq!(to_json(&items).expect("encodes"), two);

	let mut three = two.as_array().cloned().expect("array literal");
	three.push(json!({"a": 2.0, "b": [0.0, 0], "c": 3}));
	let err = from_json::<LimitedVec<Test1, 2>>(&Value::Array(three)).expect_err("three records overflow");
	assert!(matches!(err, ConvertError::CapacityExceeded { capacity: 2, len: 3 }));
}

// Documents under fixtures/.

#[test]
fn test1_variant_fixture_decodes_and_reencodes_identically() {
	let value: OneOrTwo = decode_file(fixture_path("test1_variant.json")).expect("fixture decodes");
	assert_eq!(value, OneOrTwo::One(Test1::sample()));

	let original = load_fixture("test1_variant.json").expect("fixture parses");
	assert_eq!(to_json(&value).expect("encodes"), original);
}

#[test]
fn templ5_fixtures_select_their_specializations() {
	let forward: Templ5Named = decode_file(fixture_path("templ5_forward.json")).expect("forward fixture decodes");
	assert_eq!(forward, Templ5Named::ForwardF32(ForwardF32::new(3)));

	let backward: Templ5Named = decode_file(fixture_path("templ5_backward.json")).expect("backward fixture decodes");
	assert_eq!(backward, Templ5Named::BackwardI32(BackwardI32::new(3)));
}

#[test]
fn nested_fixture_picks_second_alternative() {
	let value: Test3 = decode_file(fixture_path("test3_nested.json")).expect("nested fixture decodes");
	let OneOrTwo::Two(two) = &value.b else {
		panic!("expected test_two alternative, got {:?}", value.b);
	};
	assert_eq!(two.b, Test1::sample());
	assert_eq!(two.c, 7);
}

#[test]
fn unknown_scalar_name_fails_without_nested_errors() {
	let json = read_json_file(fixture_path("scalar_unknown.json")).expect("fixture parses");
	match from_json::<Scalar>(&json).expect_err("i64 is not a candidate") {
		ConvertError::NoMatchingVariant { candidates, errors } => {
			assert_eq!(candidates, ["i32", "f32"]);
			assert!(errors.is_empty());
		}
		other => panic!("unexpected error: {other}"),
	}
}
