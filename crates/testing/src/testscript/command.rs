// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::VecDeque, error::Error, str::FromStr};

/// A block of commands followed by their expected output.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// The commands (and comments) of the block, verbatim.
	pub literal: String,
	pub commands: Vec<Command>,
	pub line_number: u32,
}

/// A single command line: `[!]name arg key=value 'quoted arg' ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	/// Set with a `!` prefix; the command is expected to fail and the error
	/// is its output.
	pub fail: bool,
	pub line_number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

impl Argument {
	pub fn parse<T>(&self) -> Result<T, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.value.parse().map_err(|e| format!("invalid argument '{}': {e}", self.value).into())
	}
}

impl Command {
	pub fn consume_args(&self) -> ArgumentConsumer<'_> {
		ArgumentConsumer {
			args: self.args.iter().collect(),
		}
	}
}

/// Takes arguments off a command one at a time; whatever is left over can be
/// rejected with [`ArgumentConsumer::reject_rest`].
pub struct ArgumentConsumer<'a> {
	args: VecDeque<&'a Argument>,
}

impl<'a> ArgumentConsumer<'a> {
	/// The next positional argument, if any.
	pub fn next_pos(&mut self) -> Option<&'a Argument> {
		let index = self.args.iter().position(|arg| arg.key.is_none())?;
		self.args.remove(index)
	}

	/// The last argument named `key`, removing every argument with that key.
	pub fn lookup(&mut self, key: &str) -> Option<&'a Argument> {
		let mut found = None;
		self.args.retain(|arg| {
			if arg.key.as_deref() == Some(key) {
				found = Some(*arg);
				false
			} else {
				true
			}
		});
		found
	}

	pub fn lookup_parse<T>(&mut self, key: &str) -> Result<Option<T>, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.lookup(key).map(|arg| arg.parse()).transpose()
	}

	pub fn rest(&mut self) -> Vec<&'a Argument> {
		self.args.drain(..).collect()
	}

	pub fn reject_rest(&self) -> Result<(), Box<dyn Error>> {
		match self.args.front() {
			None => Ok(()),
			Some(Argument {
				key: Some(key),
				..
			}) => Err(format!("unknown argument '{key}'").into()),
			Some(Argument {
				value,
				..
			}) => Err(format!("unexpected argument '{value}'").into()),
		}
	}
}
