
use docopt::{Docopt, ArgvMap};
use std::io::{BufRead, BufReader};
use std::fs::File;
use crate::error::{ConvertError, PermissionTarget};

macro_rules! error {
	($($arg:tt)+) => ({
		use std::process::exit;
		use colored::Colorize;
		eprint!("{} ", "ERROR:".red().bold()); eprintln!($($arg)+); exit(1);
	})
}

pub fn parse_args(usage: &str) -> Result<ArgvMap, ConvertError> {
	Docopt::new(usage).and_then(|d| d.parse()).map_err(|err| {
		if !err.fatal() { err.exit(); }   // --help and --version
		ConvertError::Usage { usage: usage.trim().into() }
	})
}

pub trait PathArgs {
	fn get_paths(&self, arg: &str) -> Vec<String>;
}

impl PathArgs for ArgvMap {
	fn get_paths(&self, arg: &str) -> Vec<String> {
		self.get_vec(arg).into_iter().map(expand_home).collect()
	}
}

fn expand_home(path: &str) -> String {
	if let Some(rest) = path.strip_prefix('~') {
		if rest.is_empty() || rest.starts_with('/') {
			if let Some(home) = std::env::var_os("HOME") {
				return format!("{}{}", home.to_string_lossy(), rest);
			}
		}
	}
	path.into()
}

pub struct FileReader {
	path: String,
	bufread: Box<dyn BufRead>,
	lines_read: usize
}

impl FileReader {
	pub fn new(path: &str) -> Result<FileReader, ConvertError> {
		let file = File::open(path).map_err(|err| match err.kind() {
			std::io::ErrorKind::NotFound =>
				ConvertError::NotFound { path: path.into() },
			std::io::ErrorKind::PermissionDenied =>
				ConvertError::PermissionDenied {
					path: path.into(), target: PermissionTarget::Read },
			_ => ConvertError::io(path, err)
		})?;
		Ok(FileReader {
			path: path.into(), bufread: Box::new(BufReader::new(file)), lines_read: 0
		})
	}

	// Lines are read as raw bytes with their terminator kept, so the
	// content does not need to be UTF-8.
	pub fn read_line(&mut self, line: &mut Vec<u8>) -> Result<bool, ConvertError> {
		line.clear();
		match self.bufread.read_until(b'\n', line) {
			Ok(0) => Ok(false),
			Ok(_) => { self.lines_read += 1; Ok(true) },
			Err(err) => Err(ConvertError::io(&self.path, err))
		}
	}

	pub fn lines_read(&self) -> usize { self.lines_read }
}
