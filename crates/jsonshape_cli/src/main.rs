#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::Status;

#[derive(Parser)]
#[command(name = "jsonshape", about = "Descriptor-driven JSON conversion tools")]
struct Cli {
	/// Log candidate selection and static-check failures.
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List the registered demo types.
	Types(cmd::types::Args),
	/// Decode a document as a registered type and print it re-encoded.
	Normalize(cmd::normalize::Args),
	/// Run a registered type's static check against a document.
	Check(cmd::check::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli.command) {
		Ok(Status::Ok) => {}
		Ok(Status::Mismatch) => std::process::exit(1),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}

fn run(command: Commands) -> jsonshape::shape::Result<Status> {
	let registry = cmd::demo::registry()?;

	match command {
		Commands::Types(args) => cmd::types::run(&registry, args),
		Commands::Normalize(args) => cmd::normalize::run(&registry, args),
		Commands::Check(args) => cmd::check::run(&registry, args),
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_env("JSONSHAPE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
