// SPDX-License-Identifier: MIT
// Project: rimtool
// File: gateway.rs

//! Collaborator seam between the interpreter and the manifest machinery.
//!
//! Tag construction, schema validation, signature checks and certificate
//! display live behind [`TagGateway`]; this crate ships only
//! [`ReportGateway`], which performs the digesting half of each
//! operation and reports the rest of the plan.

use crate::rim::cli::DEFAULT_OUT_FILE;
use crate::rim::digest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
	#[error("could not digest {0}")]
	Digest(String),
	#[error("{0}")]
	Failed(String),
}

/// Inputs for building a base RIM, resolved from the intent.
#[derive(Clone, Debug)]
pub struct CreateRequest<'a> {
	/// Empty means "write to the default output filename".
	pub out_file: &'a str,
	pub attributes_file: &'a str,
	pub hash_alg: &'a str,
	pub keystore: &'a str,
	pub show_cert: bool,
}

impl CreateRequest<'_> {
	/// Output filename with the default applied.
	pub fn effective_out_file(&self) -> &str {
		if self.out_file.is_empty() {
			DEFAULT_OUT_FILE
		} else {
			self.out_file
		}
	}
}

/// Inputs for verifying or parsing an existing RIM.
#[derive(Clone, Debug)]
pub struct InspectRequest<'a> {
	pub rim_file: &'a str,
	pub show_cert: bool,
}

pub trait TagGateway {
	fn create(
		&mut self,
		request: &CreateRequest<'_>,
	) -> Result<(), GatewayError>;
	fn verify(
		&mut self,
		request: &InspectRequest<'_>,
	) -> Result<(), GatewayError>;
	fn parse(
		&mut self,
		request: &InspectRequest<'_>,
	) -> Result<(), GatewayError>;
}

/// Gateway that carries out only the in-scope half of each operation:
/// it resolves the effective plan and prints the integrity digests the
/// manifest machinery would embed or check.
#[derive(Debug, Default)]
pub struct ReportGateway;

impl ReportGateway {
	fn report_digest(
		&self,
		operation: &str,
		rim_file: &str,
	) -> Result<(), GatewayError> {
		let value = digest::file_digest(rim_file);
		if value.is_empty() {
			return Err(GatewayError::Digest(rim_file.to_owned()));
		}
		println!("{}: {} {}", operation, value, rim_file);
		Ok(())
	}
}

impl TagGateway for ReportGateway {
	fn create(
		&mut self,
		request: &CreateRequest<'_>,
	) -> Result<(), GatewayError> {
		println!(
			"create: {} (algorithm {})",
			request.effective_out_file(),
			request.hash_alg
		);
		if !request.attributes_file.is_empty() {
			self.report_digest(
				"attributes",
				request.attributes_file,
			)?;
		}
		Ok(())
	}

	fn verify(
		&mut self,
		request: &InspectRequest<'_>,
	) -> Result<(), GatewayError> {
		self.report_digest("verify", request.rim_file)
	}

	fn parse(
		&mut self,
		request: &InspectRequest<'_>,
	) -> Result<(), GatewayError> {
		self.report_digest("parse", request.rim_file)
	}
}
