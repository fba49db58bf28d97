// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// An SDML number. SQLite stores numbers either as 8-byte integers or as
/// 8-byte floats, and both survive decoding unchanged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
	Integer(i64),
	Float(f64),
}

impl Number {
	/// Converts a JSON number, keeping integers exact where they fit in an
	/// `i64`.
	pub fn from_json(number: &serde_json::Number) -> Option<Self> {
		if let Some(i) = number.as_i64() {
			return Some(Number::Integer(i));
		}
		number.as_f64().map(Number::Float)
	}

	/// JSON has no representation for NaN or infinities; those become
	/// `null`.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Number::Integer(i) => serde_json::Value::from(*i),
			Number::Float(f) => {
				serde_json::Number::from_f64(*f).map(serde_json::Value::Number).unwrap_or(serde_json::Value::Null)
			}
		}
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Number::Integer(i) => Display::fmt(i, f),
			Number::Float(v) => Display::fmt(v, f),
		}
	}
}

impl From<i64> for Number {
	fn from(value: i64) -> Self {
		Number::Integer(value)
	}
}

impl From<f64> for Number {
	fn from(value: f64) -> Self {
		Number::Float(value)
	}
}

impl Serialize for Number {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Number::Integer(i) => serializer.serialize_i64(*i),
			Number::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
			Number::Float(_) => serializer.serialize_none(),
		}
	}
}
