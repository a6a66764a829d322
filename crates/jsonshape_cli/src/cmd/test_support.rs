use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use jsonshape_testkit::{fixture_path, target_dir};

static BINARY: OnceLock<PathBuf> = OnceLock::new();

/// Captured result of one `jsonshape` invocation.
pub(crate) struct Run {
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

impl Run {
	pub(crate) fn assert_ok(&self) -> &Self {
		assert_eq!(self.code, Some(0), "jsonshape exited with {:?}: {}", self.code, self.stderr);
		self
	}

	pub(crate) fn assert_code(&self, code: i32) -> &Self {
		assert_eq!(self.code, Some(code), "stdout: {}\nstderr: {}", self.stdout, self.stderr);
		self
	}

	pub(crate) fn json(&self) -> serde_json::Value {
		serde_json::from_str(&self.stdout).expect("stdout should be valid json")
	}
}

pub(crate) fn fixture(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn jsonshape(args: &[&str]) -> Run {
	let output = Command::new(binary())
		.args(args)
		.env_remove("JSONSHAPE_LOG")
		.output()
		.expect("jsonshape command executes");
	Run {
		code: output.status.code(),
		stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
		stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
	}
}

fn binary() -> &'static Path {
	BINARY.get_or_init(locate_binary)
}

fn binary_name() -> &'static str {
	if cfg!(windows) { "jsonshape.exe" } else { "jsonshape" }
}

// Unit tests run from target/<profile>/deps; the binary sits one level up.
fn locate_binary() -> PathBuf {
	let sibling = std::env::current_exe()
		.ok()
		.and_then(|exe| exe.parent()?.parent().map(|profile| profile.join(binary_name())));
	if let Some(path) = sibling.filter(|path| path.is_file()) {
		return path;
	}

	let status = Command::new("cargo")
		.current_dir(env!("CARGO_MANIFEST_DIR"))
		.args(["build", "--quiet", "--bin", "jsonshape"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "cargo build --bin jsonshape failed");
	target_dir().join("debug").join(binary_name())
}
