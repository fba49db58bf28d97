// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Value as SqlValue;
use sdtp_type::{Error, Number, Result, Type};

/// Translates a wire value of type `ty` into the SQL fragment that stands
/// for it and pushes the value to bind onto `params`.
pub fn encode(value: &serde_json::Value, ty: Type, params: &mut Vec<SqlValue>) -> Result<&'static str> {
	match ty {
		Type::Boolean => {
			let value = value.as_bool().ok_or_else(|| Error::type_mismatch(ty, value))?;
			params.push(SqlValue::Integer(if value { 1 } else { 0 }));
			Ok("?")
		}
		Type::String => {
			params.push(SqlValue::Text(text(value, ty)?.to_string()));
			Ok("?")
		}
		Type::Number => {
			let number = value
				.as_number()
				.and_then(Number::from_json)
				.ok_or_else(|| Error::type_mismatch(ty, value))?;
			params.push(match number {
				Number::Integer(i) => SqlValue::Integer(i),
				Number::Float(f) => SqlValue::Real(f),
			});
			Ok("?")
		}
		Type::Date => {
			params.push(SqlValue::Text(date_to_storage(text(value, ty)?)?));
			Ok("date(?)")
		}
		Type::TimeOfDay => {
			params.push(SqlValue::Text(time_to_storage(text(value, ty)?)?));
			Ok("time(?)")
		}
		Type::DateTime => {
			params.push(SqlValue::Text(datetime_to_storage(text(value, ty)?)?));
			Ok("datetime(?)")
		}
	}
}

fn text(value: &serde_json::Value, ty: Type) -> Result<&str> {
	value.as_str().ok_or_else(|| Error::type_mismatch(ty, value))
}

/// `YYYY-MM-DD` stays `YYYY-MM-DD`.
pub fn date_to_storage(iso: &str) -> Result<String> {
	let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").map_err(|_| Error::malformed_temporal(Type::Date, iso))?;
	Ok(date.format("%Y-%m-%d").to_string())
}

/// `hh:mm:ss.nnn` becomes `hh:mm:ss`.
pub fn time_to_storage(iso: &str) -> Result<String> {
	let time = parse_time(iso).ok_or_else(|| Error::malformed_temporal(Type::TimeOfDay, iso))?;
	Ok(time.format("%H:%M:%S").to_string())
}

/// `YYYY-MM-DDThh:mm:ss.nnn` becomes `YYYY-MM-DD hh:mm:ss`; a bare date is
/// taken as midnight.
pub fn datetime_to_storage(iso: &str) -> Result<String> {
	let malformed = || Error::malformed_temporal(Type::DateTime, iso);

	let (date, time) = iso.split_once('T').unwrap_or((iso, "00:00:00"));
	let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| malformed())?;
	let time = parse_time(time).ok_or_else(malformed)?;

	Ok(format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M:%S")))
}

fn parse_time(iso: &str) -> Option<NaiveTime> {
	// sub-seconds are truncated, not rounded
	let (seconds, fraction) = iso.split_once('.').unwrap_or((iso, ""));
	if !fraction.chars().all(|c| c.is_ascii_digit()) {
		return None;
	}
	NaiveTime::parse_from_str(seconds, "%H:%M:%S").ok()
}
