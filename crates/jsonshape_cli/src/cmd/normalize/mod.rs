use std::path::PathBuf;

use jsonshape::shape::io::read_json_file;
use jsonshape::shape::{Result, TypeRegistry};
use tracing::debug;

use crate::cmd::Status;
use crate::cmd::options::OutputOptions;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "type")]
	pub type_name: String,
	#[arg(long)]
	pub compact: bool,
}

/// Decode `file` as a registered type and print its canonical encoding.
pub fn run(registry: &TypeRegistry, args: Args) -> Result<Status> {
	let Args { file, type_name, compact } = args;

	let entry = registry.get(&type_name)?;
	let json = read_json_file(&file)?;
	debug!(path = %file.display(), type_name = %entry.name, shape = %entry.shape, "normalizing document");
	let normalized = entry.normalize(&json)?;
	emit_json(&normalized, &OutputOptions::default().with_overrides(compact, None))?;
	Ok(Status::Ok)
}
