
extern crate docopt;
extern crate regex;

use std::io;
use colored::Colorize;

#[macro_use] mod common;
mod error; mod prompt;
mod fastq_to_fasta;

use common::{parse_args, PathArgs};
use fastq_to_fasta::{BatchOutcome, Converter};
use prompt::TerminalPrompt;

const USAGE: &str = "
Usage:
  fastq2fasta <fastq_file>...
  fastq2fasta (-h | --help)

Description:
Converts FASTQ files (.fastq or .fq, any case) into FASTA files, discarding
the base qualities. Each output is written next to its input, with the
extension replaced by .fasta. Processing stops at the first invalid file.
";

const RULE: &str = "─────────────────────────────────────────";

fn main() {
	let args = parse_args(USAGE).unwrap_or_else(|err| error!("{}", err));
	let fastq_paths = args.get_paths("<fastq_file>");

	println!();
	println!("{}", RULE);
	println!("        {}", "fastq2fasta converter".bold());
	println!("{}", RULE);
	println!();

	let mut converter = Converter::new(TerminalPrompt::stdio(), io::stdout());
	match converter.convert(&fastq_paths) {
		Ok(BatchOutcome::Completed(done)) => {
			let records: usize = done.iter().map(|c| c.records).sum();
			println!();
			println!("·········································");
			println!(" {} records from {} files converted.", records, done.len());
			println!(" All conversions completed successfully!");
			println!("{}", RULE);
		},
		Ok(BatchOutcome::Cancelled(done)) => {
			if !done.is_empty() {
				println!("{} files were converted before stopping.", done.len());
			}
			println!("Operation cancelled by user.");
		},
		Err(err) => error!("{}", err)
	}
}
