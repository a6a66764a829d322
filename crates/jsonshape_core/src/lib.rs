//! Public library API for converting typed values to and from JSON documents.

/// Descriptor-driven converters, sum-type resolution, and document loading.
pub mod shape;

/// JSON value model shared with callers and the `impl_*!` macros.
pub use serde_json;
