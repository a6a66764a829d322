use serde::Serialize;

use crate::cmd::options::OutputOptions;

/// Print `value` as JSON on stdout.
pub(crate) fn emit_json<T: Serialize + ?Sized>(value: &T, options: &OutputOptions) -> jsonshape::shape::Result<()> {
	let text = if options.pretty {
		serde_json::to_string_pretty(value)?
	} else {
		serde_json::to_string(value)?
	};
	println!("{text}");
	Ok(())
}
