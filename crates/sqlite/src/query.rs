// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rusqlite::types::Value as SqlValue;

use crate::compile::Predicate;

/// Quotes an SQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
	format!("\"{}\"", name.replace('"', "\"\""))
}

/// A SELECT against one table, built and executed within a single request.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
	/// Selected columns, in result order.
	pub columns: Vec<String>,
	pub predicate: Option<Predicate>,
	pub table: String,
}

impl Query {
	pub fn sql(&self) -> String {
		let columns: Vec<String> = self.columns.iter().map(|c| quote_identifier(c)).collect();
		let columns = columns.join(", ");
		let table = quote_identifier(&self.table);
		match &self.predicate {
			Some(predicate) if !predicate.is_empty() => {
				format!("SELECT {columns} FROM {table} WHERE {}", predicate.sql)
			}
			_ => format!("SELECT {columns} FROM {table}"),
		}
	}

	pub fn params(&self) -> &[SqlValue] {
		match &self.predicate {
			Some(predicate) => &predicate.params,
			None => &[],
		}
	}
}
