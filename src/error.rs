use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionTarget { Read, WriteDir }

#[derive(Debug, Error)]
pub enum ConvertError {
	#[error("{path} does not exist.")]
	NotFound { path: String },

	#[error("{}", permission_message(.path, *.target))]
	PermissionDenied { path: String, target: PermissionTarget },

	#[error("{path} does not have a valid '.fastq' or '.fq' extension.")]
	InvalidExtension { path: String },

	#[error("{path} is empty.")]
	EmptyFile { path: String },

	#[error("{path} is not valid FASTQ (header should start with @).")]
	MalformedHeader { path: String },

	#[error("{path} is not valid FASTQ (third line should start with +).")]
	MalformedSeparator { path: String },

	#[error("{path} has incomplete records ({lines} lines, expected a multiple of 4).")]
	IncompleteRecords { path: String, lines: usize },

	#[error("conversion of {path} produced an empty output file.")]
	EmptyOutput { path: String },

	#[error("Invalid arguments.\n{usage}")]
	Usage { usage: String },

	#[error("I/O error while processing {path}: {source}")]
	Io { path: String, #[source] source: io::Error },
}

fn permission_message(path: &str, target: PermissionTarget) -> String {
	match target {
		PermissionTarget::Read => format!("{} exists but cannot be read.", path),
		PermissionTarget::WriteDir => format!("Cannot write to directory {}", path),
	}
}

impl ConvertError {
	pub fn io(path: impl fmt::Display, source: io::Error) -> ConvertError {
		ConvertError::Io { path: path.to_string(), source }
	}
}
