
use crate::common::FileReader;
use crate::error::{ConvertError, PermissionTarget};
use crate::prompt::Confirm;
use colored::Colorize;
use regex::Regex;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A finished conversion of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
	pub input: String,
	pub output: String,
	pub records: usize
}

#[derive(Debug, PartialEq, Eq)]
pub enum BatchOutcome {
	Completed(Vec<Conversion>),
	// User declined an overwrite. Holds the files converted before that.
	Cancelled(Vec<Conversion>)
}

enum FileOutcome { Converted(Conversion), Declined }

pub struct Converter<C: Confirm, W: Write> {
	confirm: C,
	report: W,
	fastq_suffix: Regex
}

impl<C: Confirm, W: Write> Converter<C, W> {
	pub fn new(confirm: C, report: W) -> Self {
		Converter {
			confirm, report,
			fastq_suffix: Regex::new(r"(?i)\.(fastq|fq)$").unwrap()
		}
	}

	/// Converts the files in order, stopping at the first failure or at the
	/// first declined overwrite.
	pub fn convert(&mut self, paths: &[String]) -> Result<BatchOutcome, ConvertError> {
		let mut done = Vec::new();
		for path in paths {
			match self.convert_file(path)? {
				FileOutcome::Converted(conversion) => done.push(conversion),
				FileOutcome::Declined => return Ok(BatchOutcome::Cancelled(done))
			}
		}
		Ok(BatchOutcome::Completed(done))
	}

	fn convert_file(&mut self, path: &str) -> Result<FileOutcome, ConvertError> {
		let metadata = match fs::metadata(path) {
			Ok(m) if m.is_file() => m,
			_ => return Err(ConvertError::NotFound { path: path.into() })
		};
		let mut fastq = FileReader::new(path)?;

		if !self.fastq_suffix.is_match(path) {
			return Err(ConvertError::InvalidExtension { path: path.into() });
		}
		if metadata.len() == 0 {
			return Err(ConvertError::EmptyFile { path: path.into() });
		}
		probe_first_record(&mut fastq, path)?;

		let out_path = self.fasta_path(path);
		if Path::new(&out_path).exists() {
			let question = format!("{} already exists and will be overwritten.", out_path);
			if !self.confirm.confirm(&question) { return Ok(FileOutcome::Declined); }
		}
		check_writable_dir(&out_path)?;

		let lines = count_lines(path)?;
		if lines == 0 || lines % 4 != 0 {
			return Err(ConvertError::IncompleteRecords { path: path.into(), lines });
		}

		let written = write_fasta(FileReader::new(path)?, &out_path)?;
		if written == 0 {
			let _ = fs::remove_file(&out_path);
			return Err(ConvertError::EmptyOutput { path: path.into() });
		}

		let conversion = Conversion { input: path.into(), output: out_path, records: lines / 4 };
		writeln!(self.report, "  {} {} → {}", "✓".green(), conversion.input, conversion.output)
			.map_err(|err| ConvertError::io(path, err))?;
		Ok(FileOutcome::Converted(conversion))
	}

	/// Output path for a FASTQ path: the .fastq/.fq suffix becomes .fasta.
	pub fn fasta_path(&self, path: &str) -> String {
		format!("{}.fasta", self.fastq_suffix.replace(path, ""))
	}
}

// Only the first record is looked at: line 1 must start with '@' and
// line 3 with '+'.
fn probe_first_record(fastq: &mut FileReader, path: &str) -> Result<(), ConvertError> {
	let mut line = Vec::new();
	fastq.read_line(&mut line)?;
	if !line.starts_with(b"@") {
		return Err(ConvertError::MalformedHeader { path: path.into() });
	}
	fastq.read_line(&mut line)?;
	if !fastq.read_line(&mut line)? {
		return Err(ConvertError::IncompleteRecords {
			path: path.into(), lines: fastq.lines_read() });
	}
	if !line.starts_with(b"+") {
		return Err(ConvertError::MalformedSeparator { path: path.into() });
	}
	Ok(())
}

fn check_writable_dir(out_path: &str) -> Result<(), ConvertError> {
	let dir = match Path::new(out_path).parent() {
		Some(dir) if !dir.as_os_str().is_empty() => dir,
		_ => Path::new(".")
	};
	tempfile::NamedTempFile::new_in(dir).map(|_| ()).map_err(|_|
		ConvertError::PermissionDenied {
			path: dir.display().to_string(), target: PermissionTarget::WriteDir })
}

fn count_lines(path: &str) -> Result<usize, ConvertError> {
	let mut fastq = FileReader::new(path)?;
	let mut line = Vec::new();
	while fastq.read_line(&mut line)? {}
	Ok(fastq.lines_read())
}

// Returns the size of the written FASTA file. A file that was created
// but could not be fully written is removed again.
fn write_fasta(fastq: FileReader, out_path: &str) -> Result<u64, ConvertError> {
	let file = File::create(out_path).map_err(|err| ConvertError::io(out_path, err))?;
	copy_records(fastq, BufWriter::new(file), out_path).map_err(|err| {
		let _ = fs::remove_file(out_path);
		err
	})
}

fn copy_records(mut fastq: FileReader, mut fasta: BufWriter<File>, out_path: &str)
	-> Result<u64, ConvertError> {
	let io_error = |err: std::io::Error| ConvertError::io(out_path, err);
	let mut line = Vec::new();
	while fastq.read_line(&mut line)? {
		match fastq.lines_read() % 4 {
			1 => {
				// FASTA format has '>' instead of '@'
				fasta.write_all(b">").map_err(io_error)?;
				fasta.write_all(&line[1..]).map_err(io_error)?;
			},
			2 => fasta.write_all(&line).map_err(io_error)?,
			_ => {}   // Discard the per-base qualities
		}
	}

	let file = fasta.into_inner().map_err(|err| io_error(err.into_error()))?;
	Ok(file.metadata().map_err(io_error)?.len())
}
