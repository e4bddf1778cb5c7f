// SPDX-License-Identifier: MIT
// Project: rimtool
// File: cli.rs

//! Command-line argument interpreter for the RIM gateway.
//!
//! One left-to-right pass over the argument vector produces an immutable
//! [`Intent`]. Parsing never terminates the process; every failure is a
//! [`CliError`] value handed back to the entry point, which alone decides
//! the exit code.

use std::path::Path;
use thiserror::Error;

const COMMAND_PREFIX: &str = "-";

/// Output filename used when `--create` is given without one.
pub const DEFAULT_OUT_FILE: &str = "generated_swidTag.swidtag";
/// Digest strength identifier applied when `--create` names none.
pub const DEFAULT_HASH_ALG: &str = "256";

/// Operating mode selected by the last mode flag on the command line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
	#[default]
	None,
	Create,
	Verify,
	Parse,
}

/// Validated, immutable result of one parse pass over the argument
/// vector. Downstream manifest logic reads it and never mutates it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Intent {
	pub mode: Mode,
	/// Empty means "write to [`DEFAULT_OUT_FILE`]".
	pub create_out_file: String,
	/// Empty means no attributes file was named.
	pub attributes_file: String,
	pub verify_file: Option<String>,
	pub parse_file: Option<String>,
	/// Only meaningful for [`Mode::Create`].
	pub hash_alg: Option<String>,
	pub show_cert: bool,
	/// Declared by the grammar's ancestry but not settable from the
	/// command line; carried through to the signing collaborator.
	pub keystore: String,
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CliError {
	#[error("help requested")]
	Help,
	#[error("unrecognized or missing arguments")]
	Usage,
	#[error("Missing input file for {0}")]
	MissingArgument(&'static str),
	#[error("Invalid file path {0}!")]
	InvalidOutputPath(String),
}

impl CliError {
	/// Diagnostic line to print above the usage text. Help and plain
	/// usage failures show the usage text alone.
	pub fn diagnostic(&self) -> Option<String> {
		match self {
			CliError::Help | CliError::Usage => None,
			other => Some(other.to_string()),
		}
	}
}

/// Parse the process argument vector (without the program name).
///
/// Mode flags are mutually exclusive with last-wins semantics. The
/// optional-argument flags consume the following token only when it does
/// not start with the flag prefix; `--verify` and `--parse` consume it
/// unconditionally and fail when it is absent.
pub fn parse(args: &[String]) -> Result<Intent, CliError> {
	if args.is_empty() {
		return Err(CliError::Usage);
	}

	let mut mode = Mode::None;
	let mut create_out_file = String::new();
	let mut attributes_file = String::new();
	let mut verify_file = None;
	let mut parse_file = None;
	let mut show_cert = false;

	let mut i = 0;
	while i < args.len() {
		match args[i].as_str() {
			"--create" | "-c" => {
				mode = Mode::Create;
				if let Some(value) = lookahead(args, i) {
					create_out_file = value.to_owned();
					i += 1;
				}
			}
			"--attributes" | "-a" => {
				if let Some(value) = lookahead(args, i) {
					attributes_file = value.to_owned();
					i += 1;
				}
			}
			"--verify" | "-v" => {
				mode = Mode::Verify;
				verify_file =
					Some(mandatory(args, i, "--verify <file>")?);
				i += 1;
			}
			"--parse" | "-p" => {
				mode = Mode::Parse;
				parse_file =
					Some(mandatory(args, i, "--parse <file>")?);
				i += 1;
			}
			"--show-cert" => show_cert = true,
			"--help" | "-h" => return Err(CliError::Help),
			_ => return Err(CliError::Usage),
		}
		i += 1;
	}

	let hash_alg = match mode {
		Mode::Create => Some(DEFAULT_HASH_ALG.to_owned()),
		_ => None,
	};
	if mode == Mode::Create && !create_out_file.is_empty() {
		ensure_creatable(&create_out_file)?;
	}

	Ok(Intent {
		mode,
		create_out_file,
		attributes_file,
		verify_file,
		parse_file,
		hash_alg,
		show_cert,
		keystore: String::new(),
	})
}

fn lookahead(args: &[String], i: usize) -> Option<&str> {
	args.get(i + 1)
		.map(String::as_str)
		.filter(|next| !next.starts_with(COMMAND_PREFIX))
}

fn mandatory(
	args: &[String],
	i: usize,
	flag: &'static str,
) -> Result<String, CliError> {
	args.get(i + 1)
		.cloned()
		.ok_or(CliError::MissingArgument(flag))
}

/// Creatability probe for the `--create` output path. Deliberately
/// non-destructive: the target must not be an existing directory and its
/// parent directory must exist. No placeholder file is written.
fn ensure_creatable(filepath: &str) -> Result<(), CliError> {
	let path = Path::new(filepath);
	if path.is_dir() {
		return Err(CliError::InvalidOutputPath(
			filepath.to_owned(),
		));
	}
	let parent = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	if parent.is_dir() {
		Ok(())
	} else {
		Err(CliError::InvalidOutputPath(filepath.to_owned()))
	}
}

pub fn usage() -> String {
	format!(
		"Usage: rimtool
   -c, --create <file>\t\tCreate a base RIM and write it to the given
   \t\t\t\tfile. If no file is given the default is
   \t\t\t\t{DEFAULT_OUT_FILE}

   -a, --attributes <file>\tSpecify the JSON file that contains the
   \t\t\t\tattributes to add to the RIM

   -v, --verify <file>\t\tTake the provided RIM and validate it
   \t\t\t\tagainst its reference measurements

   -p, --parse <file>\t\tParse the given RIM's payload

   --show-cert\t\t\tPrint the certificate in the signature block
   \t\t\t\tof the base RIM

   -h, --help, <no args>\tPrint this command help information.
   \t\t\t\tListing no command arguments will also
   \t\t\t\tprint this help text.

Example commands:
   Create a base RIM with the default attribute file and write it
   to {DEFAULT_OUT_FILE}:

   \t\trimtool -c

   Create a base RIM from the values in config.json and write it
   to base_rim.swidtag:

   \t\trimtool -c base_rim.swidtag -a config.json
"
	)
}
