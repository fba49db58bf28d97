// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	error::Error,
	io::{Error as IoError, ErrorKind},
	path::Path,
};

use crate::testscript::{Command, parser::parse};

/// Set to `1` to rewrite scripts with the output they produce instead of
/// comparing against it.
pub const UPDATE_TESTFILES: &str = "UPDATE_TESTFILES";

/// Runs testscript commands, returning their output.
pub trait Runner {
	/// Runs a command, returning its output, or an error if the command
	/// fails. Commands prefixed with `!` are expected to fail and the error
	/// becomes their output.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called before the first block.
	fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called after the last block.
	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}
}

/// Runs the testscript at `path`.
///
/// Panics if the produced output differs from the file. Errors on IO, parser
/// or runner failure.
pub fn run_path<R: Runner, P: AsRef<Path>>(runner: &mut R, path: P) -> std::io::Result<()> {
	let path = path.as_ref();
	if path.extension().is_some_and(|ext| ext == "skip") {
		return Ok(());
	}

	let input = std::fs::read_to_string(path)?;
	let output = generate(runner, &input)?;

	if std::env::var(UPDATE_TESTFILES).is_ok_and(|v| v == "1") {
		return std::fs::write(path, output);
	}

	if let Some((line, expected, actual)) = first_difference(&input, &output) {
		panic!(
			"{} differs from its output at line {line}\nexpected: {expected}\nactual:   {actual}\n\n{output}\nrun with {UPDATE_TESTFILES}=1 to accept the new output",
			path.display()
		);
	}
	Ok(())
}

/// Generates the output for a testscript input, without comparing.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> std::io::Result<String> {
	let mut output = String::with_capacity(input.len());

	let blocks = parse(input).map_err(|e| IoError::new(ErrorKind::InvalidInput, e))?;

	runner.start_script().map_err(|e| IoError::other(format!("start_script failed: {e}")))?;

	for (i, block) in blocks.iter().enumerate() {
		if block.commands.is_empty() {
			output.push_str(&block.literal);
			continue;
		}

		let mut block_output = String::new();
		for command in &block.commands {
			let command_output = match runner.run(command) {
				Ok(output) if command.fail => {
					return Err(IoError::other(format!(
						"expected command '{}' to fail at line {}, succeeded with: {output}",
						command.name, command.line_number
					)));
				}
				Ok(output) => output,
				Err(e) if command.fail => e.to_string(),
				Err(e) => {
					return Err(IoError::other(format!(
						"command '{}' failed at line {}: {e}",
						command.name, command.line_number
					)));
				}
			};
			block_output.push_str(&ensure_eol(command_output));
		}

		if block_output.is_empty() {
			block_output.push_str("ok\n");
		}

		// blank lines would end the block, so prefix every line
		if block_output.starts_with('\n') || block_output.contains("\n\n") {
			block_output = format!("> {}", block_output.replace('\n', "\n> "));
			block_output.truncate(block_output.len() - 2);
			block_output = block_output.replace("> \n", ">\n");
		}

		output.push_str(&block.literal);
		output.push_str("---\n");
		output.push_str(&block_output);
		if i < blocks.len() - 1 {
			output.push('\n');
		}
	}

	runner.end_script().map_err(|e| IoError::other(format!("end_script failed: {e}")))?;

	Ok(output)
}

fn ensure_eol(mut s: String) -> String {
	if !s.is_empty() && !s.ends_with('\n') {
		s.push('\n');
	}
	s
}

fn first_difference<'a>(expected: &'a str, actual: &'a str) -> Option<(usize, &'a str, &'a str)> {
	if expected == actual {
		return None;
	}
	let mut expected_lines = expected.lines();
	let mut actual_lines = actual.lines();
	let mut line = 1;
	loop {
		match (expected_lines.next(), actual_lines.next()) {
			(Some(e), Some(a)) if e == a => line += 1,
			(e, a) => return Some((line, e.unwrap_or("<end of file>"), a.unwrap_or("<end of file>"))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Echo;

	impl Runner for Echo {
		fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
			match command.name.as_str() {
				"echo" => Ok(command.args.iter().map(|a| a.value.as_str()).collect::<Vec<_>>().join("\n")),
				"silent" => Ok(String::new()),
				_ => Err(format!("unknown command {}", command.name).into()),
			}
		}
	}

	#[test]
	fn test_generate() {
		let input = "echo a b\n---\nstale\n\nsilent\n---\n\n!nope\n---\n";
		let output = generate(&mut Echo, input).unwrap();
		assert_eq!(output, "echo a b\n---\na\nb\n\nsilent\n---\nok\n\n!nope\n---\nunknown command nope\n");
	}

	#[test]
	fn test_blank_lines_are_prefixed() {
		let output = generate(&mut Echo, "echo a '' b\n---\n").unwrap();
		assert_eq!(output, "echo a '' b\n---\n> a\n>\n> b\n");
		assert_eq!(generate(&mut Echo, &output).unwrap(), output);
	}

	#[test]
	fn test_unexpected_failure() {
		assert!(generate(&mut Echo, "nope\n---\n").is_err());
		assert!(generate(&mut Echo, "!echo a\n---\n").is_err());
	}
}
