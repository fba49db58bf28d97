// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Translation of single values between SDML and SQLite.
//!
//! | SQLite storage | SDML type   | SQL fragment  | native value            | JSON value             |
//! |----------------|-------------|---------------|-------------------------|------------------------|
//! | INTEGER/REAL   | number      | `?`           | `Number`                | number                 |
//! | INTEGER 1/0    | boolean     | `?`           | `bool`                  | `true`/`false`         |
//! | TEXT           | string      | `?`           | `String`                | string                 |
//! | `YYYY-MM-DD hh:mm:ss` | datetime | `datetime(?)` | `NaiveDateTime`    | `"YYYY-MM-DDThh:mm:ss"`|
//! | `YYYY-MM-DD`   | date        | `date(?)`     | `NaiveDate`             | `"YYYY-MM-DD"`         |
//! | `hh:mm:ss`     | timeofday   | `time(?)`     | `NaiveTime`             | `"hh:mm:ss"`           |
//!
//! Values are always bound as statement parameters, never spliced into the
//! SQL text. SQLite has no sub-second precision in its date functions, so
//! sub-seconds are truncated on the way in.

mod decode;
mod encode;

pub use decode::{Decode, Json, Native, decode_json, decode_native};
pub use encode::{date_to_storage, datetime_to_storage, encode, time_to_storage};
