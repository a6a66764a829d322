//! Descriptor-driven conversion of struct-like types to JSON objects.

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::slice;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde_json::{Map, Value};
use tracing::debug;

use crate::shape::convert::expect_object;
use crate::shape::{ConvertError, JsonConvert, Result, Shape, StaticError, json_eq, member_fetch};

type EncodeFn<T> = Box<dyn Fn(&T) -> Result<Value> + Send + Sync>;
type ConstructFn<T> = Box<dyn Fn(&mut MemberReader<'_, T>) -> Result<T> + Send + Sync>;
type DescriptorCache = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

static DESCRIPTORS: OnceLock<DescriptorCache> = OnceLock::new();

/// A type whose JSON form is described by a [`TypeDescriptor`].
pub trait Record: JsonConvert + 'static {
	/// Build the descriptor for this type.
	fn descriptor() -> Result<TypeDescriptor<Self>>;
}

/// Members, static members, and constructor of one record type.
pub struct TypeDescriptor<T> {
	serial_name: Cow<'static, str>,
	members: Vec<MemberDescriptor<T>>,
	static_members: Vec<StaticMember>,
	construct: ConstructFn<T>,
}

/// One regular member: serialized key plus accessor.
pub struct MemberDescriptor<T> {
	serial_name: Cow<'static, str>,
	type_name: Cow<'static, str>,
	shape: Shape,
	encode: EncodeFn<T>,
}

/// A key whose value is fixed by the type rather than by the instance.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMember {
	/// Serialized key.
	pub serial_name: Cow<'static, str>,
	/// Fixed value emitted on encode and required on decode.
	pub value: Value,
}

/// Incremental [`TypeDescriptor`] construction.
pub struct DescriptorBuilder<T> {
	serial_name: Cow<'static, str>,
	members: Vec<MemberDescriptor<T>>,
	static_members: Vec<StaticMember>,
}

/// Positional reader handed to a record constructor.
///
/// Each [`MemberReader::read`] call decodes the next declared member.
pub struct MemberReader<'a, T> {
	type_name: &'a str,
	object: &'a Map<String, Value>,
	members: slice::Iter<'a, MemberDescriptor<T>>,
}

impl<T: JsonConvert + 'static> TypeDescriptor<T> {
	/// Start a descriptor named after `T::serial_name()`.
	pub fn builder() -> DescriptorBuilder<T> {
		DescriptorBuilder {
			serial_name: T::serial_name(),
			members: Vec::new(),
			static_members: Vec::new(),
		}
	}
}

impl<T> TypeDescriptor<T> {
	/// Serialized type name.
	pub fn serial_name(&self) -> &str {
		&self.serial_name
	}

	/// Regular members in declared order.
	pub fn members(&self) -> &[MemberDescriptor<T>] {
		&self.members
	}

	/// Static members in declared order.
	pub fn static_members(&self) -> &[StaticMember] {
		&self.static_members
	}

	fn construct(&self, object: &Map<String, Value>) -> Result<T> {
		let mut reader = MemberReader {
			type_name: &self.serial_name,
			object,
			members: self.members.iter(),
		};
		let value = (self.construct)(&mut reader)?;
		let left = reader.members.len();
		if left > 0 {
			return Err(ConvertError::InvalidDescriptor {
				type_name: self.serial_name.to_string(),
				reason: format!("constructor left {left} declared members unread"),
			});
		}
		Ok(value)
	}
}

impl<T> fmt::Debug for TypeDescriptor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("serial_name", &self.serial_name)
			.field("members", &self.members)
			.field("static_members", &self.static_members)
			.finish_non_exhaustive()
	}
}

impl<T> MemberDescriptor<T> {
	/// Serialized key.
	pub fn serial_name(&self) -> &str {
		&self.serial_name
	}

	/// Serial name of the member type.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Conversion strategy of the member type.
	pub fn shape(&self) -> Shape {
		self.shape
	}
}

impl<T> fmt::Debug for MemberDescriptor<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemberDescriptor")
			.field("serial_name", &self.serial_name)
			.field("type_name", &self.type_name)
			.field("shape", &self.shape)
			.finish_non_exhaustive()
	}
}

impl<T: 'static> DescriptorBuilder<T> {
	/// Declare a static member with its fixed value.
	pub fn static_member(mut self, serial_name: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
		self.static_members.push(StaticMember {
			serial_name: serial_name.into(),
			value: value.into(),
		});
		self
	}

	/// Declare a regular member read through `access`.
	pub fn member<M, F>(mut self, serial_name: impl Into<Cow<'static, str>>, access: F) -> Self
	where
		M: JsonConvert + 'static,
		F: Fn(&T) -> &M + Send + Sync + 'static,
	{
		self.members.push(MemberDescriptor {
			serial_name: serial_name.into(),
			type_name: M::serial_name(),
			shape: M::SHAPE,
			encode: Box::new(move |value: &T| access(value).to_json()),
		});
		self
	}

	/// Finish with the positional constructor, rejecting duplicate keys.
	pub fn build<F>(self, construct: F) -> Result<TypeDescriptor<T>>
	where
		F: Fn(&mut MemberReader<'_, T>) -> Result<T> + Send + Sync + 'static,
	{
		let mut seen = HashSet::new();
		let keys = self
			.static_members
			.iter()
			.map(|item| item.serial_name.as_ref())
			.chain(self.members.iter().map(|item| item.serial_name.as_ref()));
		for key in keys {
			if !seen.insert(key) {
				return Err(ConvertError::InvalidDescriptor {
					type_name: self.serial_name.to_string(),
					reason: format!("duplicate serial name {key}"),
				});
			}
		}

		Ok(TypeDescriptor {
			serial_name: self.serial_name,
			members: self.members,
			static_members: self.static_members,
			construct: Box::new(construct),
		})
	}
}

impl<T> MemberReader<'_, T> {
	/// Decode the next declared member as `M`.
	pub fn read<M: JsonConvert>(&mut self) -> Result<M> {
		let Some(member) = self.members.next() else {
			return Err(ConvertError::InvalidDescriptor {
				type_name: self.type_name.to_owned(),
				reason: "constructor reads more members than declared".to_owned(),
			});
		};
		if member.shape != M::SHAPE || member.type_name != M::serial_name() {
			return Err(ConvertError::InvalidDescriptor {
				type_name: self.type_name.to_owned(),
				reason: format!("member {} is declared as {} but read as {}", member.serial_name, member.type_name, M::serial_name()),
			});
		}
		member_fetch(self.object, &member.serial_name)
	}
}

/// Descriptor of `T`, built on first use and shared afterwards.
///
/// A failed build is not cached, so the error is reported again on the next call.
pub fn descriptor_of<T: Record>() -> Result<Arc<TypeDescriptor<T>>> {
	let cache = DESCRIPTORS.get_or_init(Default::default);
	let id = TypeId::of::<T>();
	let cached = cache.read().unwrap_or_else(PoisonError::into_inner).get(&id).cloned();
	if let Some(descriptor) = cached.and_then(|entry| entry.downcast::<TypeDescriptor<T>>().ok()) {
		return Ok(descriptor);
	}

	let built = Arc::new(T::descriptor()?);
	debug!(type_name = built.serial_name(), "record descriptor built");
	let entry = cache
		.write()
		.unwrap_or_else(PoisonError::into_inner)
		.entry(id)
		.or_insert_with(|| built.clone() as Arc<dyn Any + Send + Sync>)
		.clone();
	Ok(entry.downcast::<TypeDescriptor<T>>().unwrap_or(built))
}

/// Encode static members first, then regular members, in declared order.
pub fn encode<T: Record>(value: &T) -> Result<Value> {
	let descriptor = descriptor_of::<T>()?;
	let mut object = Map::with_capacity(descriptor.static_members.len() + descriptor.members.len());
	for item in &descriptor.static_members {
		object.insert(item.serial_name.to_string(), item.value.clone());
	}
	for member in &descriptor.members {
		object.insert(member.serial_name.to_string(), (member.encode)(value)?);
	}
	Ok(Value::Object(object))
}

/// Verify static members, then construct `T` from its members.
pub fn decode<T: Record>(json: &Value) -> Result<T> {
	let descriptor = descriptor_of::<T>()?;
	if let Err(err) = verify_statics(&*descriptor, json) {
		debug!(type_name = descriptor.serial_name(), error = %err, "record static check failed");
		return Err(err);
	}
	let object = expect_object(json)?;
	descriptor.construct(object)
}

/// Static check of a record type.
pub fn static_check<T: Record>(json: &Value) -> Result<Option<StaticError>> {
	check_statics(&*descriptor_of::<T>()?, json)
}

/// Check every static member of `descriptor` against `json`, stopping at the first failure.
///
/// A value mismatch is returned as `Ok(Some(_))`. A non-object body or a
/// missing static key is an error. A descriptor without static members
/// accepts any value.
pub fn check_statics<T>(descriptor: &TypeDescriptor<T>, json: &Value) -> Result<Option<StaticError>> {
	match verify_statics(descriptor, json) {
		Ok(()) => Ok(None),
		Err(err @ ConvertError::StaticMismatch { .. }) => Ok(Some(StaticError::from(err))),
		Err(err) => Err(err),
	}
}

fn verify_statics<T>(descriptor: &TypeDescriptor<T>, json: &Value) -> Result<()> {
	if descriptor.static_members.is_empty() {
		return Ok(());
	}

	let object = expect_object(json)?;
	for item in &descriptor.static_members {
		let key = item.serial_name.as_ref();
		let found = object.get(key).ok_or_else(|| ConvertError::MissingKey { key: key.to_owned() })?;
		if !json_eq(found, &item.value) {
			return Err(ConvertError::StaticMismatch {
				key: key.to_owned(),
				found: found.clone(),
				expected: item.value.clone(),
			});
		}
	}
	Ok(())
}
