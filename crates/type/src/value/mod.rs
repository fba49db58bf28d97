// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

mod number;
mod r#type;

pub use number::Number;
pub use r#type::Type;

/// An SDML value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	/// SQL NULL
	Null,
	Number(Number),
	Boolean(bool),
	String(String),
	/// A calendar date without time information
	Date(NaiveDate),
	/// A time of day without date or zone
	Time(NaiveTime),
	/// A date and time without zone
	DateTime(NaiveDateTime),
}

impl Value {
	pub fn integer(v: impl Into<i64>) -> Self {
		Value::Number(Number::Integer(v.into()))
	}

	pub fn float(v: impl Into<f64>) -> Self {
		Value::Number(Number::Float(v.into()))
	}

	/// The logical type of this value. `Null` carries no type of its own.
	pub fn get_type(&self) -> Option<Type> {
		match self {
			Value::Null => None,
			Value::Number(_) => Some(Type::Number),
			Value::Boolean(_) => Some(Type::Boolean),
			Value::String(_) => Some(Type::String),
			Value::Date(_) => Some(Type::Date),
			Value::Time(_) => Some(Type::TimeOfDay),
			Value::DateTime(_) => Some(Type::DateTime),
		}
	}

	/// The wire form of the value: temporal values become ISO-8601 text.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Value::Null => serde_json::Value::Null,
			Value::Number(n) => n.to_json(),
			Value::Boolean(b) => serde_json::Value::Bool(*b),
			Value::String(s) => serde_json::Value::String(s.clone()),
			Value::Date(_) | Value::Time(_) | Value::DateTime(_) => serde_json::Value::String(self.to_string()),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("null"),
			Value::Number(n) => Display::fmt(n, f),
			Value::Boolean(b) => Display::fmt(b, f),
			Value::String(s) => f.write_str(s),
			Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
			// NaiveTime prints sub-seconds only when present
			Value::Time(t) => Display::fmt(t, f),
			Value::DateTime(dt) => write!(f, "{}T{}", dt.date().format("%Y-%m-%d"), dt.time()),
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_none(),
			Value::Number(n) => n.serialize(serializer),
			Value::Boolean(b) => serializer.serialize_bool(*b),
			Value::String(s) => serializer.serialize_str(s),
			Value::Date(_) | Value::Time(_) | Value::DateTime(_) => serializer.collect_str(self),
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Boolean(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::integer(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<NaiveDate> for Value {
	fn from(value: NaiveDate) -> Self {
		Value::Date(value)
	}
}

impl From<NaiveTime> for Value {
	fn from(value: NaiveTime) -> Self {
		Value::Time(value)
	}
}

impl From<NaiveDateTime> for Value {
	fn from(value: NaiveDateTime) -> Self {
		Value::DateTime(value)
	}
}
