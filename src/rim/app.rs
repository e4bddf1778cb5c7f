// SPDX-License-Identifier: MIT
// Project: rimtool
// File: app.rs

//! Thin application entry: parse the argument vector, dispatch the
//! intent to the gateway, and decide the process exit code. Nothing
//! below this layer terminates the process.

use crate::rim::cli::{self, CliError, Intent, Mode};
use crate::rim::gateway::{
	CreateRequest, GatewayError, InspectRequest, ReportGateway,
	TagGateway,
};
use colored::Colorize;

const EXIT_SUCCESS: i32 = 0;
/// Usage, help and error paths all exit with this code.
const EXIT_FAILURE: i32 = 1;

pub fn run() -> i32 {
	let args: Vec<String> = std::env::args().skip(1).collect();
	let mut gateway = ReportGateway;
	run_with(&args, &mut gateway)
}

/// Testable core of [`run`]: returns the exit code instead of calling
/// `std::process::exit`.
pub fn run_with(
	args: &[String],
	gateway: &mut dyn TagGateway,
) -> i32 {
	let intent = match cli::parse(args) {
		Ok(intent) => intent,
		Err(err) => {
			report_usage_failure(&err);
			return EXIT_FAILURE;
		}
	};
	match dispatch(&intent, gateway) {
		Ok(()) => EXIT_SUCCESS,
		Err(err) => {
			eprintln!("{} {}", "ERROR:".red().bold(), err);
			EXIT_FAILURE
		}
	}
}

fn report_usage_failure(err: &CliError) {
	if let Some(diagnostic) = err.diagnostic() {
		eprintln!("{} {}", "ERROR:".red().bold(), diagnostic);
	}
	println!("{}", cli::usage());
}

fn dispatch(
	intent: &Intent,
	gateway: &mut dyn TagGateway,
) -> Result<(), GatewayError> {
	match intent.mode {
		Mode::Create => gateway.create(&CreateRequest {
			out_file: &intent.create_out_file,
			attributes_file: &intent.attributes_file,
			hash_alg: intent
				.hash_alg
				.as_deref()
				.unwrap_or(cli::DEFAULT_HASH_ALG),
			keystore: &intent.keystore,
			show_cert: intent.show_cert,
		}),
		Mode::Verify => gateway.verify(&InspectRequest {
			rim_file: intent.verify_file.as_deref().unwrap_or(""),
			show_cert: intent.show_cert,
		}),
		Mode::Parse => gateway.parse(&InspectRequest {
			rim_file: intent.parse_file.as_deref().unwrap_or(""),
			show_cert: intent.show_cert,
		}),
		Mode::None => Ok(()),
	}
}
