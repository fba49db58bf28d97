// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite backend for SDTP tables.
//!
//! This crate provides:
//! - the value codec between SDML values and SQLite storage ([`codec`])
//! - the compiler from SDQL filters to WHERE clauses ([`compile()`])
//! - row decoding against a column type vector ([`decode`])
//! - [`SqliteTable`], which answers distinct-value, column, range and
//!   filtered-row requests for one table
//! - [`SqliteConnection`], a mutex-guarded connection with a `REGEXP`
//!   function registered
//!
//! # Usage
//!
//! ```ignore
//! let connection = SqliteConnection::new(SqliteConfig::new("presidential_vote.db"))?;
//! let schema: Schema = serde_json::from_str(r#"[{"name": "Year", "type": "number"}, {"name": "Name", "type": "string"}]"#)?;
//! let table = SqliteTable::new(schema, connection, "presidential_vote");
//!
//! let filter = Filter::parse(&json!({"operator": "REGEX_MATCH", "column": "Name", "expression": ".*Roosevelt.*"}), table.schema())?;
//! let rows = table.filtered_rows::<Json>(Some(&filter), &["Year", "Name"])?;
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod codec;
pub mod compile;
mod config;
mod connection;
pub mod decode;
mod query;
mod table;

pub use codec::{Decode, Json, Native};
pub use compile::{Predicate, compile};
pub use config::{DbPath, OpenFlags, SqliteConfig};
pub use connection::{Row, SqliteConnection};
pub use query::{Query, quote_identifier};
pub use table::SqliteTable;
