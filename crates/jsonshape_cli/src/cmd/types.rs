use jsonshape::shape::{Result, TypeRegistry};

use crate::cmd::Status;
use crate::cmd::options::OutputOptions;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub compact: bool,
}

/// Print every registered type with its serial name and shape.
pub fn run(registry: &TypeRegistry, args: Args) -> Result<Status> {
	let Args { json, compact } = args;

	if json {
		let payload: Vec<TypeJson> = registry
			.iter()
			.map(|entry| TypeJson {
				name: entry.name.to_string(),
				serial_name: entry.serial_name.to_string(),
				shape: entry.shape.as_str(),
			})
			.collect();
		emit_json(&payload, &OutputOptions::default().with_overrides(compact, None))?;
		return Ok(Status::Ok);
	}

	println!("types: {}", registry.len());
	println!("name\tserial_name\tshape");
	for entry in registry.iter() {
		println!("{}\t{}\t{}", entry.name, entry.serial_name, entry.shape);
	}

	Ok(Status::Ok)
}

#[derive(serde::Serialize)]
struct TypeJson {
	name: String,
	serial_name: String,
	shape: &'static str,
}
