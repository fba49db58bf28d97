// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Golden testscripts: files of commands with their expected output. The
//! output is regenerated on every run and must match the file.

mod command;
mod parser;
mod runner;

pub use command::{Argument, ArgumentConsumer, Block, Command};
pub use parser::{ParseError, parse};
pub use runner::{Runner, UPDATE_TESTFILES, generate, run_path};
