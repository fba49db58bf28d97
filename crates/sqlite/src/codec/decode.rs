// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::types::Value as SqlValue;
use sdtp_type::{Error, Number, Result, Type, Value};

/// Selects how raw SQLite values are decoded (the "jsonify" mode).
pub trait Decode {
	type Output;

	fn decode(raw: &SqlValue, ty: Type) -> Result<Self::Output>;
}

/// Decodes into native [`Value`]s; temporal text is parsed.
#[derive(Debug, Clone, Copy)]
pub struct Native;

/// Decodes into JSON-ready values; temporal text is kept in ISO form.
#[derive(Debug, Clone, Copy)]
pub struct Json;

impl Decode for Native {
	type Output = Value;

	fn decode(raw: &SqlValue, ty: Type) -> Result<Value> {
		decode_native(raw, ty)
	}
}

impl Decode for Json {
	type Output = serde_json::Value;

	fn decode(raw: &SqlValue, ty: Type) -> Result<serde_json::Value> {
		decode_json(raw, ty)
	}
}

/// Booleans are stored as integers; only `1` is true.
fn decode_boolean(raw: &SqlValue) -> bool {
	matches!(raw, SqlValue::Integer(1))
}

pub fn decode_native(raw: &SqlValue, ty: Type) -> Result<Value> {
	match (ty, raw) {
		(Type::Boolean, _) => Ok(Value::Boolean(decode_boolean(raw))),
		(_, SqlValue::Null) => Ok(Value::Null),

		(Type::Number, SqlValue::Integer(i)) => Ok(Value::integer(*i)),
		(Type::Number, SqlValue::Real(f)) => Ok(Value::float(*f)),
		(Type::Number, SqlValue::Text(text)) => parse_number(text).ok_or_else(|| unexpected(raw, ty)),

		(Type::String, SqlValue::Text(text)) => Ok(Value::String(text.clone())),
		(Type::String, SqlValue::Integer(i)) => Ok(Value::String(i.to_string())),
		(Type::String, SqlValue::Real(f)) => Ok(Value::String(f.to_string())),

		(Type::Date, SqlValue::Text(text)) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
			.map(Value::Date)
			.map_err(|_| Error::malformed_temporal(ty, text.as_str())),
		(Type::TimeOfDay, SqlValue::Text(text)) => text
			.trim()
			.parse::<NaiveTime>()
			.map(Value::Time)
			.map_err(|_| Error::malformed_temporal(ty, text.as_str())),
		(Type::DateTime, SqlValue::Text(text)) => join_datetime(text)?
			.parse::<NaiveDateTime>()
			.map(Value::DateTime)
			.map_err(|_| Error::malformed_temporal(ty, text.as_str())),

		_ => Err(unexpected(raw, ty)),
	}
}

pub fn decode_json(raw: &SqlValue, ty: Type) -> Result<serde_json::Value> {
	if ty == Type::Boolean {
		return Ok(serde_json::Value::Bool(decode_boolean(raw)));
	}

	match raw {
		SqlValue::Null => Ok(serde_json::Value::Null),
		// storage separates date and time with a blank, ISO with a 'T'
		SqlValue::Text(text) if ty == Type::DateTime => Ok(serde_json::Value::String(join_datetime(text)?)),
		_ if ty == Type::DateTime => Err(unexpected(raw, ty)),
		SqlValue::Integer(i) => Ok(serde_json::Value::from(*i)),
		SqlValue::Real(f) => Ok(Number::Float(*f).to_json()),
		SqlValue::Text(text) => Ok(serde_json::Value::String(text.clone())),
		SqlValue::Blob(_) => Err(unexpected(raw, ty)),
	}
}

/// Rejoins `"<date> <time>"` as `"<date>T<time>"`, tolerating surrounding
/// and repeated blanks. Text already in ISO form passes through.
fn join_datetime(text: &str) -> Result<String> {
	let components: Vec<&str> = text.split_whitespace().collect();
	match components.as_slice() {
		[date, time] => Ok(format!("{date}T{time}")),
		[iso] if iso.contains('T') => Ok(iso.to_string()),
		_ => Err(Error::malformed_temporal(Type::DateTime, text)),
	}
}

fn parse_number(text: &str) -> Option<Value> {
	let text = text.trim();
	if let Ok(i) = text.parse::<i64>() {
		return Some(Value::integer(i));
	}
	text.parse::<f64>().ok().map(Value::float)
}

fn unexpected(raw: &SqlValue, ty: Type) -> Error {
	let value = match raw {
		SqlValue::Null => "NULL".to_string(),
		SqlValue::Integer(i) => i.to_string(),
		SqlValue::Real(f) => f.to_string(),
		SqlValue::Text(text) => format!("'{text}'"),
		SqlValue::Blob(blob) => format!("a blob of {} bytes", blob.len()),
	};
	Error::unexpected_storage_value(ty, value)
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn text(s: &str) -> SqlValue {
		SqlValue::Text(s.to_string())
	}

	#[test]
	fn test_boolean_only_one_is_true() {
		for (raw, expected) in [
			(SqlValue::Integer(1), true),
			(SqlValue::Integer(0), false),
			(SqlValue::Integer(2), false),
			(SqlValue::Integer(-1), false),
			(SqlValue::Null, false),
			(text("1"), false),
		] {
			assert_eq!(decode_native(&raw, Type::Boolean).unwrap(), Value::Boolean(expected));
			assert_eq!(decode_json(&raw, Type::Boolean).unwrap(), json!(expected));
		}
	}

	#[test]
	fn test_datetime_json_uses_t_separator() {
		assert_eq!(decode_json(&text("2020-01-02 03:04:05"), Type::DateTime).unwrap(), json!("2020-01-02T03:04:05"));
	}

	#[test]
	fn test_datetime_json_trims_and_coalesces_blanks() {
		assert_eq!(
			decode_json(&text("  2020-01-02    03:04:05 "), Type::DateTime).unwrap(),
			json!("2020-01-02T03:04:05")
		);
	}

	#[test]
	fn test_datetime_malformed() {
		for raw in ["2020-01-02", "2020-01-02 03:04:05 extra", ""] {
			assert_eq!(
				decode_json(&text(raw), Type::DateTime).unwrap_err(),
				Error::malformed_temporal(Type::DateTime, raw)
			);
		}
		assert!(matches!(decode_native(&text("2020-01-02 25:00:00"), Type::DateTime), Err(Error::MalformedTemporal { .. })));
	}

	#[test]
	fn test_json_passes_other_types_through() {
		assert_eq!(decode_json(&SqlValue::Integer(1932), Type::Number).unwrap(), json!(1932));
		assert_eq!(decode_json(&SqlValue::Real(57.4), Type::Number).unwrap(), json!(57.4));
		assert_eq!(decode_json(&text("Roosevelt"), Type::String).unwrap(), json!("Roosevelt"));
		assert_eq!(decode_json(&text("1855-04-01"), Type::Date).unwrap(), json!("1855-04-01"));
		assert_eq!(decode_json(&text("03:04:05"), Type::TimeOfDay).unwrap(), json!("03:04:05"));
		assert_eq!(decode_json(&SqlValue::Null, Type::Date).unwrap(), json!(null));
	}

	#[test]
	fn test_native_temporal() {
		assert_eq!(
			decode_native(&text("1855-04-01"), Type::Date).unwrap(),
			Value::Date(NaiveDate::from_ymd_opt(1855, 4, 1).unwrap())
		);
		assert_eq!(
			decode_native(&text("03:04:05"), Type::TimeOfDay).unwrap(),
			Value::Time(NaiveTime::from_hms_opt(3, 4, 5).unwrap())
		);
		assert_eq!(
			decode_native(&text("2020-01-02 03:04:05"), Type::DateTime).unwrap(),
			Value::DateTime(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap())
		);
	}

	#[test]
	fn test_native_scalars() {
		assert_eq!(decode_native(&SqlValue::Integer(1948), Type::Number).unwrap(), Value::integer(1948));
		assert_eq!(decode_native(&SqlValue::Real(49.6), Type::Number).unwrap(), Value::float(49.6));
		assert_eq!(decode_native(&text(" 12 "), Type::Number).unwrap(), Value::integer(12));
		assert_eq!(decode_native(&text("Truman"), Type::String).unwrap(), Value::from("Truman"));
		assert_eq!(decode_native(&SqlValue::Integer(7), Type::String).unwrap(), Value::from("7"));
		assert_eq!(decode_native(&SqlValue::Null, Type::Number).unwrap(), Value::Null);
	}

	#[test]
	fn test_unexpected_storage_value() {
		assert_eq!(
			decode_native(&text("many"), Type::Number).unwrap_err(),
			Error::unexpected_storage_value(Type::Number, "'many'")
		);
		assert!(matches!(
			decode_native(&SqlValue::Integer(20200102), Type::Date),
			Err(Error::UnexpectedStorageValue { .. })
		));
		assert!(matches!(
			decode_json(&SqlValue::Blob(vec![1, 2]), Type::String),
			Err(Error::UnexpectedStorageValue { .. })
		));
	}

	#[test]
	fn test_malformed_date_is_not_defaulted() {
		assert_eq!(
			decode_native(&text("1855-4-31"), Type::Date).unwrap_err(),
			Error::malformed_temporal(Type::Date, "1855-4-31")
		);
	}
}
