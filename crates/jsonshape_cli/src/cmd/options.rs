/// Formatting limits for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
	/// Pretty-print emitted JSON.
	pub pretty: bool,
	/// Maximum number of candidate errors listed by `check`.
	pub max_errors: usize,
}

impl Default for OutputOptions {
	fn default() -> Self {
		Self { pretty: true, max_errors: 16 }
	}
}

impl OutputOptions {
	/// Preset for single-line output.
	pub fn compact() -> Self {
		Self { pretty: false, max_errors: 4 }
	}

	/// Apply command-line overrides on top of a preset.
	pub fn with_overrides(mut self, compact: bool, max_errors: Option<usize>) -> Self {
		if compact {
			self = Self::compact();
		}
		if let Some(max_errors) = max_errors {
			self.max_errors = max_errors;
		}
		self
	}
}
