// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sdtp_type::Type;
use serde::{Serialize, Serializer};
use serde_json::{Value as Json, json};

use crate::Operator;

/// A boolean predicate tree over the columns of one table.
///
/// Leaf values stay in their wire (JSON) form; they are interpreted against
/// the leaf's `ty` only when a backend translates the filter.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
	/// The column equals one of `values`.
	InList {
		column: String,
		ty: Type,
		values: Vec<Json>,
	},
	/// `min <= column <= max`, both ends inclusive.
	InRange {
		column: String,
		ty: Type,
		min: Json,
		max: Json,
	},
	/// Some part of the column's text matches the regular expression.
	RegexMatch {
		column: String,
		expression: String,
	},
	/// Every argument holds.
	All(Vec<Filter>),
	/// At least one argument holds.
	Any(Vec<Filter>),
	/// No argument holds.
	None(Vec<Filter>),
}

impl Filter {
	pub fn in_list(column: impl Into<String>, ty: Type, values: Vec<Json>) -> Self {
		Filter::InList {
			column: column.into(),
			ty,
			values,
		}
	}

	pub fn in_range(column: impl Into<String>, ty: Type, min: Json, max: Json) -> Self {
		Filter::InRange {
			column: column.into(),
			ty,
			min,
			max,
		}
	}

	pub fn regex_match(column: impl Into<String>, expression: impl Into<String>) -> Self {
		Filter::RegexMatch {
			column: column.into(),
			expression: expression.into(),
		}
	}

	pub fn operator(&self) -> Operator {
		match self {
			Filter::InList {
				..
			} => Operator::InList,
			Filter::InRange {
				..
			} => Operator::InRange,
			Filter::RegexMatch {
				..
			} => Operator::RegexMatch,
			Filter::All(_) => Operator::All,
			Filter::Any(_) => Operator::Any,
			Filter::None(_) => Operator::None,
		}
	}

	/// Every column referenced anywhere in the tree, in first-seen order.
	pub fn columns(&self) -> Vec<&str> {
		let mut result = Vec::new();
		self.collect_columns(&mut result);
		result
	}

	fn collect_columns<'a>(&'a self, result: &mut Vec<&'a str>) {
		match self {
			Filter::InList {
				column,
				..
			}
			| Filter::InRange {
				column,
				..
			}
			| Filter::RegexMatch {
				column,
				..
			} => {
				if !result.contains(&column.as_str()) {
					result.push(column);
				}
			}
			Filter::All(arguments) | Filter::Any(arguments) | Filter::None(arguments) => {
				for argument in arguments {
					argument.collect_columns(result);
				}
			}
		}
	}

	/// The JSON wire form accepted by [`Filter::parse`].
	pub fn to_spec(&self) -> Json {
		let operator = self.operator().as_str();
		match self {
			Filter::InList {
				column,
				values,
				..
			} => json!({ "operator": operator, "column": column, "values": values }),
			Filter::InRange {
				column,
				min,
				max,
				..
			} => json!({ "operator": operator, "column": column, "min_val": min, "max_val": max }),
			Filter::RegexMatch {
				column,
				expression,
			} => json!({ "operator": operator, "column": column, "expression": expression }),
			Filter::All(arguments) | Filter::Any(arguments) | Filter::None(arguments) => {
				let arguments: Vec<Json> = arguments.iter().map(Filter::to_spec).collect();
				json!({ "operator": operator, "arguments": arguments })
			}
		}
	}
}

impl Serialize for Filter {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_spec().serialize(serializer)
	}
}
