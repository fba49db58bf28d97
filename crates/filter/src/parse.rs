// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use regex::Regex;
use sdtp_type::{Error, Result, Schema, Type};
use serde::Deserialize;
use serde_json::Value as Json;

use crate::{Filter, Operator};

/// The wire form of one filter node. Values stay raw JSON until the column
/// type is known; compound arguments stay raw so nested operators are
/// checked against the closed vocabulary one level at a time.
#[derive(Debug, Deserialize)]
#[serde(tag = "operator")]
enum WireFilter {
	#[serde(rename = "IN_LIST")]
	InList {
		column: String,
		values: Vec<Json>,
	},
	#[serde(rename = "IN_RANGE")]
	InRange {
		column: String,
		min_val: Json,
		max_val: Json,
	},
	#[serde(rename = "REGEX_MATCH")]
	RegexMatch {
		column: String,
		expression: String,
	},
	#[serde(rename = "ALL")]
	All {
		arguments: Vec<Json>,
	},
	#[serde(rename = "ANY")]
	Any {
		arguments: Vec<Json>,
	},
	#[serde(rename = "NONE")]
	None {
		arguments: Vec<Json>,
	},
}

impl Filter {
	/// Builds a filter from its JSON wire form, resolving each leaf's column
	/// type from `schema`.
	///
	/// ```json
	/// {"operator": "IN_LIST", "column": "State", "values": ["Ohio", "Iowa"]}
	/// {"operator": "IN_RANGE", "column": "Year", "min_val": 1932, "max_val": 1960}
	/// {"operator": "REGEX_MATCH", "column": "Name", "expression": ".*Roosevelt.*"}
	/// {"operator": "ALL", "arguments": [ ... ]}
	/// ```
	///
	/// An operator outside the closed vocabulary fails with
	/// [`Error::UnknownOperator`]. Values whose JSON kind does not fit the
	/// column type fail with [`Error::TypeMismatch`].
	pub fn parse(spec: &Json, schema: &Schema) -> Result<Filter> {
		let object = spec.as_object().ok_or_else(|| malformed(format!("expected an object, found {spec}")))?;

		// resolved first so an unknown operator is not reported as a
		// malformed tag
		object
			.get("operator")
			.and_then(Json::as_str)
			.ok_or_else(|| malformed("missing string field `operator`"))?
			.parse::<Operator>()?;

		match WireFilter::deserialize(spec).map_err(|err| malformed(err.to_string()))? {
			WireFilter::InList {
				column,
				values,
			} => {
				let ty = schema.column_type(&column)?;
				for value in &values {
					check_value(ty, value)?;
				}
				Ok(Filter::InList {
					column,
					ty,
					values,
				})
			}
			WireFilter::InRange {
				column,
				min_val,
				max_val,
			} => {
				let ty = schema.column_type(&column)?;
				check_value(ty, &min_val)?;
				check_value(ty, &max_val)?;
				Ok(Filter::InRange {
					column,
					ty,
					min: min_val,
					max: max_val,
				})
			}
			WireFilter::RegexMatch {
				column,
				expression,
			} => {
				schema.column_type(&column)?;
				if let Err(err) = Regex::new(&expression) {
					return Err(malformed(format!("invalid regular expression `{expression}`: {err}")));
				}
				Ok(Filter::RegexMatch {
					column,
					expression,
				})
			}
			WireFilter::All {
				arguments,
			} => Ok(Filter::All(parse_all(&arguments, schema)?)),
			WireFilter::Any {
				arguments,
			} => Ok(Filter::Any(parse_all(&arguments, schema)?)),
			WireFilter::None {
				arguments,
			} => Ok(Filter::None(parse_all(&arguments, schema)?)),
		}
	}

	/// Parses the JSON text of a filter, see [`Filter::parse`].
	pub fn parse_str(text: &str, schema: &Schema) -> Result<Filter> {
		let spec: Json = serde_json::from_str(text).map_err(|err| malformed(err.to_string()))?;
		Filter::parse(&spec, schema)
	}
}

fn malformed(message: impl Into<String>) -> Error {
	Error::MalformedFilter(message.into())
}

fn parse_all(arguments: &[Json], schema: &Schema) -> Result<Vec<Filter>> {
	arguments.iter().map(|argument| Filter::parse(argument, schema)).collect()
}

// Only the JSON kind is checked here; temporal text is validated when a
// backend encodes it.
fn check_value(ty: Type, value: &Json) -> Result<()> {
	let ok = match ty {
		Type::Number => value.is_number(),
		Type::Boolean => value.is_boolean(),
		Type::String | Type::Date | Type::TimeOfDay | Type::DateTime => value.is_string(),
	};
	if ok { Ok(()) } else { Err(Error::type_mismatch(ty, value)) }
}
