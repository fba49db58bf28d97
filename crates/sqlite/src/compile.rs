// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Compilation of SDQL filters into SQLite WHERE clauses.

use std::fmt::{Display, Formatter};

use rusqlite::types::Value as SqlValue;
use sdtp_filter::Filter;
use sdtp_type::Result;

use crate::{codec::encode, query::quote_identifier};

/// A compiled boolean expression (without the `WHERE` keyword) together with
/// the values bound to its `?` placeholders, in placeholder order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predicate {
	pub sql: String,
	pub params: Vec<SqlValue>,
}

impl Predicate {
	/// An empty predicate places no constraint on the rows.
	pub fn is_empty(&self) -> bool {
		self.sql.trim().is_empty()
	}
}

impl Display for Predicate {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.sql)?;
		if !self.params.is_empty() {
			f.write_str(" -- ")?;
			for (i, param) in self.params.iter().enumerate() {
				if i > 0 {
					f.write_str(", ")?;
				}
				match param {
					SqlValue::Null => f.write_str("NULL")?,
					SqlValue::Integer(v) => write!(f, "{v}")?,
					SqlValue::Real(v) => write!(f, "{v:?}")?,
					SqlValue::Text(v) => write!(f, "'{v}'")?,
					SqlValue::Blob(v) => write!(f, "<{} bytes>", v.len())?,
				}
			}
		}
		Ok(())
	}
}

/// Compiles `filter` into a predicate.
///
/// An `IN_LIST` without values compiles to the empty predicate, which means
/// "no constraint", i.e. true for every row. `ALL` skips such arguments, an
/// `ANY` holding one is itself unconstrained, and a `NONE` holding one
/// matches no row. Compounds without arguments place no constraint.
pub fn compile(filter: &Filter) -> Result<Predicate> {
	let mut params = Vec::new();
	let sql = compile_into(filter, &mut params)?.unwrap_or_default();
	Ok(Predicate {
		sql,
		params,
	})
}

/// `None` stands for "no constraint".
fn compile_into(filter: &Filter, params: &mut Vec<SqlValue>) -> Result<Option<String>> {
	match filter {
		Filter::InList {
			column,
			ty,
			values,
		} => {
			if values.is_empty() {
				return Ok(None);
			}
			let column = quote_identifier(column);
			let mut conditions = Vec::with_capacity(values.len());
			for value in values {
				conditions.push(format!("({column} = {})", encode(value, *ty, params)?));
			}
			Ok(Some(format!("({})", conditions.join(" OR "))))
		}
		Filter::InRange {
			column,
			ty,
			min,
			max,
		} => {
			let column = quote_identifier(column);
			let min = encode(min, *ty, params)?;
			let max = encode(max, *ty, params)?;
			Ok(Some(format!("{column} >= {min} AND {column} <= {max}")))
		}
		Filter::RegexMatch {
			column,
			expression,
		} => {
			params.push(SqlValue::Text(expression.clone()));
			Ok(Some(format!("{} REGEXP ?", quote_identifier(column))))
		}
		Filter::All(arguments) => compile_all(arguments, params),
		Filter::Any(arguments) => compile_any(arguments, params),
		Filter::None(arguments) => {
			if arguments.is_empty() {
				return Ok(None);
			}
			match compile_any(arguments, params)? {
				Some(any) => Ok(Some(format!("NOT ({any})"))),
				// some argument holds for every row
				None => Ok(Some("0".to_string())),
			}
		}
	}
}

fn compile_all(arguments: &[Filter], params: &mut Vec<SqlValue>) -> Result<Option<String>> {
	let mut expressions = Vec::with_capacity(arguments.len());
	for argument in arguments {
		if let Some(expression) = compile_into(argument, params)? {
			expressions.push(format!("({expression})"));
		}
	}
	if expressions.is_empty() {
		return Ok(None);
	}
	Ok(Some(expressions.join(" AND ")))
}

fn compile_any(arguments: &[Filter], params: &mut Vec<SqlValue>) -> Result<Option<String>> {
	let mut expressions = Vec::with_capacity(arguments.len());
	let mut bound = Vec::new();
	let mut unconstrained = arguments.is_empty();
	for argument in arguments {
		match compile_into(argument, &mut bound)? {
			Some(expression) => expressions.push(format!("({expression})")),
			None => unconstrained = true,
		}
	}
	// every argument is still compiled so malformed values fail the request
	if unconstrained {
		return Ok(None);
	}
	params.extend(bound);
	Ok(Some(expressions.join(" OR ")))
}
