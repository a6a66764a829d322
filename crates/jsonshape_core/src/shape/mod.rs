mod convert;
mod error;
mod limited;
mod macros;
mod optional;
mod primitive;
mod registry;

pub mod enumeration;
pub mod io;
pub mod record;
pub mod variant;

/// Strategy tag, converter trait, and top-level entry points.
pub use convert::{JsonConvert, Shape, from_json, json_eq, member_fetch, static_check, to_json};
/// Enum descriptor protocol.
pub use enumeration::{EnumDescriptor, EnumValue, JsonEnum};
/// Error and result aliases.
pub use error::{ConvertError, Result, StaticError, json_kind};
/// Fixed-capacity sequence.
pub use limited::LimitedVec;
/// Record descriptor protocol.
pub use record::{DescriptorBuilder, MemberDescriptor, MemberReader, Record, StaticMember, TypeDescriptor};
/// Name-keyed type registry.
pub use registry::{RegisteredType, TypeRegistry};
/// Sum-type protocol shared by both flavors.
pub use variant::{Candidate, Encoded, SumType};
