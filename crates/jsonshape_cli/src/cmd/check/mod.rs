use std::path::PathBuf;

use jsonshape::serde_json::Value;
use jsonshape::shape::io::read_json_file;
use jsonshape::shape::{ConvertError, RegisteredType, Result, TypeRegistry};

use crate::cmd::Status;
use crate::cmd::options::OutputOptions;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long = "type")]
	pub type_name: String,
	#[arg(long)]
	pub max_errors: Option<usize>,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub compact: bool,
}

/// Run the static check of a registered type against `file`.
///
/// A mismatch is reported on stdout and yields [`Status::Mismatch`].
pub fn run(registry: &TypeRegistry, args: Args) -> Result<Status> {
	let Args {
		file,
		type_name,
		max_errors,
		json,
		compact,
	} = args;

	let options = OutputOptions::default().with_overrides(compact, max_errors);
	let entry = registry.get(&type_name)?;
	let document = read_json_file(&file)?;
	let report = CheckReport::build(entry, &document, options.max_errors);

	if json {
		emit_json(&report, &options)?;
	} else {
		print_report(&report);
	}

	Ok(if report.ok { Status::Ok } else { Status::Mismatch })
}

fn print_report(report: &CheckReport) {
	let Some(message) = &report.error else {
		println!("ok");
		return;
	};

	println!("mismatch: {message}");
	if !report.candidates.is_empty() {
		println!("candidates: {}", report.candidates.join(", "));
	}
	for error in &report.candidate_errors {
		println!("  - {error}");
	}
	if report.omitted_errors > 0 {
		println!("  ... {} more", report.omitted_errors);
	}
}

#[derive(Debug, serde::Serialize)]
struct CheckReport {
	#[serde(rename = "type")]
	type_name: String,
	serial_name: String,
	ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	candidates: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	candidate_errors: Vec<String>,
	#[serde(skip_serializing_if = "is_zero")]
	omitted_errors: usize,
}

impl CheckReport {
	fn build(entry: &RegisteredType, document: &Value, max_errors: usize) -> Self {
		let mut report = Self {
			type_name: entry.name.to_string(),
			serial_name: entry.serial_name.to_string(),
			ok: true,
			error: None,
			candidates: Vec::new(),
			candidate_errors: Vec::new(),
			omitted_errors: 0,
		};

		let message = match entry.check(document) {
			Ok(None) => return report,
			Ok(Some(rejection)) => rejection.message().to_owned(),
			Err(err) => err.to_string(),
		};
		report.ok = false;
		report.error = Some(message);

		// Sum types only surface the rendered message; a full decode recovers the per-candidate list.
		if let Err(ConvertError::NoMatchingVariant { candidates, errors }) = entry.normalize(document) {
			report.candidates = candidates;
			report.omitted_errors = errors.len().saturating_sub(max_errors);
			report.candidate_errors = errors.iter().take(max_errors).map(|item| item.message().to_owned()).collect();
		}
		report
	}
}

fn is_zero(value: &usize) -> bool {
	*value == 0
}
