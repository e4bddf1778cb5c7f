// SPDX-License-Identifier: MIT
// Project: rimtool
// File: digest.rs

//! Digest engine for manifest content and file-integrity values.
//!
//! String digests feed manifest attributes and render as lowercase hex;
//! file digests always use SHA-256 and render as standard padded Base64.
//! Neither operation lets an error escape: unsupported identifiers yield
//! an absent result, file failures yield the empty-string sentinel.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use digest::DynDigest;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::{BufReader, Read};

const READ_BUFFER_LEN: usize = 8192;

/// Digest strengths supported for manifest attribute values.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HashAlgorithm {
	Sha256,
	Sha384,
	Sha512,
}

impl HashAlgorithm {
	/// Resolve the fixed identifier tokens carried in intents and
	/// manifest attributes.
	pub fn from_id(id: &str) -> Option<Self> {
		match id {
			"256" | "SHA-256" => Some(Self::Sha256),
			"384" | "SHA-384" => Some(Self::Sha384),
			"512" | "SHA-512" => Some(Self::Sha512),
			_ => None,
		}
	}

	pub fn id(self) -> &'static str {
		match self {
			Self::Sha256 => "SHA-256",
			Self::Sha384 => "SHA-384",
			Self::Sha512 => "SHA-512",
		}
	}

	fn hasher(self) -> Box<dyn DynDigest> {
		match self {
			Self::Sha256 => Box::new(Sha256::new()),
			Self::Sha384 => Box::new(Sha384::new()),
			Self::Sha512 => Box::new(Sha512::new()),
		}
	}

	/// Digest the UTF-8 encoding of `value`, rendered as lowercase
	/// hexadecimal. Every byte contributes exactly two characters,
	/// leading zeros included.
	pub fn digest_hex(self, value: &str) -> String {
		let mut hasher = self.hasher();
		hasher.update(value.as_bytes());
		hex::encode(hasher.finalize())
	}
}

/// Hash a text value with the algorithm named by `algorithm_id`.
///
/// Unknown identifiers are reported on stderr and yield `None`; callers
/// must handle the absent result.
pub fn string_digest(
	value: &str,
	algorithm_id: &str,
) -> Option<String> {
	let algorithm = match HashAlgorithm::from_id(algorithm_id) {
		Some(algorithm) => algorithm,
		None => {
			eprintln!(
				"error: unsupported digest algorithm {}",
				algorithm_id
			);
			return None;
		}
	};
	Some(algorithm.digest_hex(value))
}

/// Hash file content streamed through a fixed-size buffer into SHA-256
/// and render the digest as standard padded Base64.
///
/// File digests always use SHA-256 regardless of any configured
/// algorithm. Open and read failures are reported on stderr and yield
/// the empty-string sentinel; the file handle is scoped to this call and
/// released on every return path.
pub fn file_digest(path: &str) -> String {
	match read_digest(path) {
		Ok(hash) => STANDARD.encode(hash),
		Err(err) => {
			eprintln!("error: {}: {} is not valid", err, path);
			String::new()
		}
	}
}

fn read_digest(path: &str) -> std::io::Result<Vec<u8>> {
	let mut reader = BufReader::new(File::open(path)?);
	let mut hasher = Sha256::new();
	let mut buffer = [0u8; READ_BUFFER_LEN];
	loop {
		let count = reader.read(&mut buffer)?;
		if count == 0 {
			break;
		}
		Digest::update(&mut hasher, &buffer[..count]);
	}
	Ok(hasher.finalize().to_vec())
}
