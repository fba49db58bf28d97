// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Parser for testscript files.
//!
//! A script is a sequence of blocks separated by blank lines. Each block
//! holds one or more command lines, a `---` line and the expected output.
//! Output containing blank lines is written with a `> ` prefix on every
//! line. Lines starting with `#` are comments.
//!
//! ```text
//! # all rows of the table
//! rows Year Name
//! ---
//! 1932, Roosevelt
//! 1948, Truman
//!
//! !compile '{"operator": "XOR"}'
//! ---
//! unknown filter operator `XOR`
//! ```

use std::fmt::{Display, Formatter};

use crate::testscript::{Argument, Block, Command};

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
	pub line_number: u32,
	pub message: String,
}

impl Display for ParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "parse error at line {}: {}", self.line_number, self.message)
	}
}

impl std::error::Error for ParseError {}

fn error(line_number: usize, message: impl Into<String>) -> ParseError {
	ParseError {
		line_number: line_number as u32,
		message: message.into(),
	}
}

fn content(line: &str) -> &str {
	line.trim_end_matches(['\n', '\r'])
}

pub fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	let lines: Vec<&str> = input.split_inclusive('\n').collect();
	let mut blocks = Vec::new();
	let mut i = 0;

	while i < lines.len() {
		let line_number = i + 1;
		let mut literal = String::new();
		let mut commands = Vec::new();
		let mut separated = false;

		while i < lines.len() {
			let line = content(lines[i]);
			if line == "---" {
				separated = true;
				i += 1;
				break;
			}
			literal.push_str(lines[i]);
			let trimmed = line.trim();
			if !trimmed.is_empty() && !trimmed.starts_with('#') {
				commands.push(parse_command(trimmed, i + 1)?);
			}
			i += 1;
		}

		if !separated {
			if !commands.is_empty() {
				return Err(error(line_number, "block has no --- separator"));
			}
			// trailing comments
			blocks.push(Block {
				literal,
				commands,
				line_number: line_number as u32,
			});
			break;
		}
		if commands.is_empty() {
			return Err(error(line_number, "block has no commands"));
		}

		// skip the expected output, it is regenerated
		let prefixed = lines.get(i).is_some_and(|line| line.starts_with('>'));
		while i < lines.len() {
			let line = content(lines[i]);
			if (prefixed && !line.starts_with('>')) || (!prefixed && line.is_empty()) {
				break;
			}
			i += 1;
		}
		if i < lines.len() && content(lines[i]).is_empty() {
			i += 1;
		}

		blocks.push(Block {
			literal,
			commands,
			line_number: line_number as u32,
		});
	}

	Ok(blocks)
}

fn parse_command(line: &str, line_number: usize) -> Result<Command, ParseError> {
	let (fail, line) = match line.strip_prefix('!') {
		Some(rest) => (true, rest),
		None => (false, line),
	};

	let mut args = tokenize(line).map_err(|message| error(line_number, message))?.into_iter();
	let name = match args.next() {
		Some(Argument {
			key: None,
			value,
		}) if !value.is_empty() => value,
		_ => return Err(error(line_number, "expected a command name")),
	};

	Ok(Command {
		name,
		args: args.collect(),
		fail,
		line_number: line_number as u32,
	})
}

/// Splits a command line on whitespace. Arguments may be single or double
/// quoted, with `\` escaping the next character inside quotes. An unquoted
/// `word=` prefix makes the argument a keyed one.
fn tokenize(line: &str) -> Result<Vec<Argument>, String> {
	let mut args = Vec::new();
	let mut chars = line.chars().peekable();

	loop {
		while chars.next_if(|c| c.is_whitespace()).is_some() {}
		if chars.peek().is_none() {
			return Ok(args);
		}

		let mut key = None;
		let mut value = String::new();
		while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
			match c {
				'\'' | '"' => loop {
					match chars.next() {
						Some('\\') => value.push(chars.next().ok_or("unterminated escape")?),
						Some(q) if q == c => break,
						Some(other) => value.push(other),
						None => return Err(format!("unterminated {c} quote")),
					}
				},
				'=' if key.is_none()
					&& !value.is_empty() && value.chars().all(|c| c.is_alphanumeric() || c == '_') =>
				{
					key = Some(std::mem::take(&mut value));
				}
				c => value.push(c),
			}
		}

		args.push(Argument {
			key,
			value,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blocks() {
		let blocks = parse("# setup\nexec 'CREATE TABLE t (a)'\n---\nok\n\nrows\nrows json=true\n---\n> a\n>\n> b\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0].literal, "# setup\nexec 'CREATE TABLE t (a)'\n");
		assert_eq!(blocks[0].commands[0].name, "exec");
		assert_eq!(blocks[0].commands[0].args[0].value, "CREATE TABLE t (a)");
		assert_eq!(blocks[1].commands.len(), 2);
		assert_eq!(blocks[1].line_number, 6);
	}

	#[test]
	fn test_trailing_comment() {
		let blocks = parse("rows\n---\nok\n\n# done\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert!(blocks[1].commands.is_empty());
		assert_eq!(blocks[1].literal, "# done\n");
	}

	#[test]
	fn test_arguments() {
		let command = parse_command(r#"!rows Year filter='{"a": "it\'s"}' columns=Year,Name"#, 1).unwrap();
		assert!(command.fail);
		assert_eq!(command.args, vec![
			Argument {
				key: None,
				value: "Year".to_string()
			},
			Argument {
				key: Some("filter".to_string()),
				value: r#"{"a": "it's"}"#.to_string()
			},
			Argument {
				key: Some("columns".to_string()),
				value: "Year,Name".to_string()
			},
		]);
	}

	#[test]
	fn test_errors() {
		assert_eq!(parse("rows\n").unwrap_err().line_number, 1);
		assert!(parse("rows 'open\n---\n").is_err());
		assert!(parse("# only a comment\n---\n").is_err());
	}
}
