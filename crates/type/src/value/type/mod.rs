// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The logical (SDML) type of a column or value, independent of any storage
/// engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
	Number,
	Boolean,
	String,
	Date,
	#[serde(alias = "time_of_day")]
	TimeOfDay,
	DateTime,
}

impl Type {
	pub const ALL: [Type; 6] = [Type::Number, Type::Boolean, Type::String, Type::Date, Type::TimeOfDay, Type::DateTime];

	/// The wire name of the type, as it appears in a schema.
	pub fn as_str(&self) -> &'static str {
		match self {
			Type::Number => "number",
			Type::Boolean => "boolean",
			Type::String => "string",
			Type::Date => "date",
			Type::TimeOfDay => "timeofday",
			Type::DateTime => "datetime",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Type {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"number" => Ok(Type::Number),
			"boolean" => Ok(Type::Boolean),
			"string" => Ok(Type::String),
			"date" => Ok(Type::Date),
			"timeofday" | "time_of_day" => Ok(Type::TimeOfDay),
			"datetime" => Ok(Type::DateTime),
			other => Err(Error::MalformedFilter(format!("unknown column type `{other}`"))),
		}
	}
}
