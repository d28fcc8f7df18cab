
use std::io::{self, BufRead, Write};
use colored::Colorize;

/// Yes/no confirmation asked before an existing output file is overwritten.
pub trait Confirm {
	fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
	fn confirm(&mut self, message: &str) -> bool { self(message) }
}

/// Asks on the terminal. Only "y" or "yes" (any case) count as consent;
/// end of input counts as a refusal.
pub struct TerminalPrompt<R: BufRead, W: Write> {
	input: R,
	output: W
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
	pub fn stdio() -> Self {
		TerminalPrompt::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
	pub fn new(input: R, output: W) -> Self { TerminalPrompt { input, output } }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
	fn confirm(&mut self, message: &str) -> bool {
		let asked = writeln!(self.output, "{} {}", "Warning:".yellow(), message)
			.and_then(|_| write!(self.output, "Do you want to continue? (y/n): "))
			.and_then(|_| self.output.flush());
		if asked.is_err() { return false; }

		let mut answer = String::new();
		match self.input.read_line(&mut answer) {
			Ok(0) | Err(_) => false,
			Ok(_) => is_yes(&answer)
		}
	}
}

fn is_yes(answer: &str) -> bool {
	let answer = answer.trim().to_lowercase();
	answer == "y" || answer == "yes"
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ask(input: &str) -> (bool, String) {
		let mut out = Vec::new();
		let yes = TerminalPrompt::new(input.as_bytes(), &mut out)
			.confirm("x.fasta already exists and will be overwritten.");
		(yes, String::from_utf8(out).unwrap())
	}

	#[test]
	fn accepts_y_and_yes_in_any_case() {
		for answer in ["y\n", "Y\n", "yes\n", " YeS \n", "yes"] {
			assert!(ask(answer).0, "{:?} should be accepted", answer);
		}
	}

	#[test]
	fn anything_else_declines() {
		for answer in ["n\n", "\n", "yess\n", "sure\n", ""] {
			assert!(!ask(answer).0, "{:?} should be declined", answer);
		}
	}

	#[test]
	fn prompt_names_the_file() {
		let (_, shown) = ask("n\n");
		assert!(shown.contains("x.fasta already exists"));
		assert!(shown.ends_with("Do you want to continue? (y/n): "));
	}

	#[test]
	fn closures_confirm() {
		let mut asked = Vec::new();
		let mut confirm = |msg: &str| { asked.push(msg.to_string()); true };
		assert!(Confirm::confirm(&mut confirm, "overwrite?"));
		assert_eq!(asked, vec!["overwrite?"]);
	}
}
