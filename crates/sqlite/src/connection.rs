// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use parking_lot::Mutex;
use regex::Regex;
use rusqlite::{
	Connection, Rows,
	functions::FunctionFlags,
	params_from_iter,
	types::{Value as SqlValue, ValueRef},
};
use sdtp_type::{Error, Result};
use tracing::{info, instrument, trace};

use crate::{DbPath, SqliteConfig};

/// One result row, as SQLite returned it.
pub type Row = Vec<SqlValue>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A shared handle to one SQLite database.
///
/// Clones share the same underlying connection. Only one statement runs
/// against it at a time; concurrent callers block until it is free.
#[derive(Clone)]
pub struct SqliteConnection(Arc<SqliteConnectionInner>);

pub struct SqliteConnectionInner {
	conn: Mutex<Connection>,
	path: DbPath,
}

impl Deref for SqliteConnection {
	type Target = SqliteConnectionInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl SqliteConnection {
	#[instrument(name = "sqlite::connection::new", level = "info", skip(config), fields(path = ?config.path))]
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let flags = config.flags.to_rusqlite();
		let conn = match &config.path {
			DbPath::File(path) => Connection::open_with_flags(path, flags),
			DbPath::Memory => Connection::open_in_memory_with_flags(flags),
		}
		.map_err(|e| storage_error("failed to open database", e))?;

		if let Some(timeout) = config.busy_timeout {
			conn.busy_timeout(timeout).map_err(|e| storage_error("failed to set busy timeout", e))?;
		}

		register_regexp(&conn).map_err(|e| storage_error("failed to register REGEXP", e))?;
		info!(path = ?config.path, "sqlite connection opened");

		Ok(Self(Arc::new(SqliteConnectionInner {
			conn: Mutex::new(conn),
			path: config.path,
		})))
	}

	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}

	pub fn path(&self) -> &DbPath {
		&self.path
	}

	/// Runs `sql` with `params` bound and hands the cursor to `f`. The
	/// connection stays locked until `f` returns.
	pub fn run<T>(&self, sql: &str, params: &[SqlValue], f: impl FnOnce(&mut Rows<'_>) -> Result<T>) -> Result<T> {
		let conn = self.conn.lock();
		let mut stmt = conn.prepare(sql).map_err(|e| storage_error("failed to prepare query", e))?;
		let mut rows = stmt.query(params_from_iter(params)).map_err(|e| storage_error("failed to run query", e))?;
		f(&mut rows)
	}

	/// Runs `sql` and collects its rows, or only the first one if
	/// `one_row_only` is set.
	#[instrument(name = "sqlite::connection::run_and_collect", level = "debug", skip(self, params), fields(param_count = params.len()))]
	pub fn run_and_collect(&self, sql: &str, params: &[SqlValue], one_row_only: bool) -> Result<Vec<Row>> {
		let result = self.run(sql, params, |rows| {
			let mut result = Vec::new();
			while let Some(row) = rows.next().map_err(|e| storage_error("failed to fetch row", e))? {
				result.push(collect_row(row).map_err(|e| storage_error("failed to read row", e))?);
				if one_row_only {
					break;
				}
			}
			Ok(result)
		})?;
		trace!(row_count = result.len(), "query collected");
		Ok(result)
	}

	pub fn fetch_all(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
		self.run_and_collect(sql, params, false)
	}

	pub fn fetch_one(&self, sql: &str, params: &[SqlValue]) -> Result<Option<Row>> {
		Ok(self.run_and_collect(sql, params, true)?.into_iter().next())
	}

	/// Executes one or more statements without results, e.g. to create and
	/// fill tables.
	pub fn execute_batch(&self, sql: &str) -> Result<()> {
		self.conn.lock().execute_batch(sql).map_err(|e| storage_error("failed to execute batch", e))
	}
}

fn collect_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
	let width = row.as_ref().column_count();
	(0..width).map(|i| row.get::<_, SqlValue>(i)).collect()
}

pub(crate) fn storage_error(context: &str, err: rusqlite::Error) -> Error {
	Error::Storage(format!("{context}: {err}"))
}

/// Registers `regexp(pattern, text)`, which SQLite calls for
/// `text REGEXP pattern`. It is true if the pattern matches any part of the
/// text.
fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
	conn.create_scalar_function("regexp", 2, FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC, |ctx| {
		// compiled once per statement and pattern
		let regex: Arc<Regex> = ctx.get_or_create_aux(0, |pattern| -> std::result::Result<_, BoxError> {
			Ok(Regex::new(pattern.as_str()?)?)
		})?;

		let matched = match ctx.get_raw(1) {
			ValueRef::Null => false,
			ValueRef::Text(text) => regex.is_match(
				std::str::from_utf8(text).map_err(|e| rusqlite::Error::UserFunctionError(e.into()))?,
			),
			ValueRef::Integer(i) => regex.is_match(&i.to_string()),
			ValueRef::Real(f) => regex.is_match(&f.to_string()),
			ValueRef::Blob(_) => {
				return Err(rusqlite::Error::UserFunctionError("REGEXP cannot match a blob".into()));
			}
		};
		Ok(matched)
	})
}
