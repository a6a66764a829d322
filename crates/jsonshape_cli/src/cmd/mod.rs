/// Static-check command.
pub mod check;
/// Demo type registry.
pub mod demo;
/// Decode and re-encode command.
pub mod normalize;
/// Output formatting options.
pub mod options;
/// Registry listing command.
pub mod types;

mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// Command succeeded.
	Ok,
	/// Document did not match the requested type.
	Mismatch,
}
