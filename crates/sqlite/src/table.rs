// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use sdtp_filter::Filter;
use sdtp_type::{Error, Result, Schema, Type};
use tracing::{debug, instrument};

use crate::{
	SqliteConnection,
	codec::Decode,
	compile::compile,
	decode::{decode_column, decode_row, decode_rows},
	query::{Query, quote_identifier},
};

/// An SDTP table that mirrors one table of a SQLite database.
///
/// Each operation compiles a single read-only query, runs it through the
/// shared [`SqliteConnection`] and decodes the result against the schema.
/// The decoding mode is picked by the [`Decode`] parameter: `Native` for
/// Rust values, `Json` for values ready to be serialized.
#[derive(Clone)]
pub struct SqliteTable {
	schema: Schema,
	connection: SqliteConnection,
	name: String,
}

impl SqliteTable {
	pub fn new(schema: Schema, connection: SqliteConnection, name: impl Into<String>) -> Self {
		Self {
			schema,
			connection,
			name: name.into(),
		}
	}

	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn connection(&self) -> &SqliteConnection {
		&self.connection
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.schema.column_names()
	}

	pub fn column_types(&self) -> Vec<Type> {
		self.schema.column_types()
	}

	pub fn column_type(&self, column: &str) -> Result<Type> {
		self.schema.column_type(column)
	}

	/// The distinct values of `column`, in SQLite's ordering for the column.
	#[instrument(name = "sqlite::table::all_distinct_values", level = "debug", skip(self), fields(table = %self.name))]
	pub fn all_distinct_values<D: Decode>(&self, column: &str) -> Result<Vec<D::Output>> {
		let ty = self.column_type(column)?;
		let column = quote_identifier(column);
		let sql = format!("SELECT DISTINCT {column} FROM {} ORDER BY {column}", quote_identifier(&self.name));
		let rows = self.connection.fetch_all(&sql, &[])?;
		decode_column::<D>(&rows, ty)
	}

	/// Every value of `column`, in the table's row order.
	#[instrument(name = "sqlite::table::column_values", level = "debug", skip(self), fields(table = %self.name))]
	pub fn column_values<D: Decode>(&self, column: &str) -> Result<Vec<D::Output>> {
		let ty = self.column_type(column)?;
		let sql = format!("SELECT {} FROM {}", quote_identifier(column), quote_identifier(&self.name));
		let rows = self.connection.fetch_all(&sql, &[])?;
		decode_column::<D>(&rows, ty)
	}

	/// `[min, max]` of `column`; both are null when the table is empty.
	#[instrument(name = "sqlite::table::range_spec", level = "debug", skip(self), fields(table = %self.name))]
	pub fn range_spec<D: Decode>(&self, column: &str) -> Result<Vec<D::Output>> {
		let ty = self.column_type(column)?;
		let column = quote_identifier(column);
		let sql = format!("SELECT min({column}), max({column}) FROM {}", quote_identifier(&self.name));
		let row = self
			.connection
			.fetch_one(&sql, &[])?
			.ok_or_else(|| Error::Storage(format!("no result for range of {column}")))?;
		decode_row::<D>(&row, &[ty, ty])
	}

	/// Builds the query for [`filtered_rows`](Self::filtered_rows) without
	/// running it. No `columns` selects every schema column in schema order.
	///
	/// Filters are expected to come from [`Filter::parse`]; columns they
	/// reference are still checked against the schema here.
	pub fn query(&self, filter: Option<&Filter>, columns: &[&str]) -> Result<Query> {
		for column in columns {
			self.column_type(column)?;
		}

		let predicate = match filter {
			Some(filter) => {
				for column in filter.columns() {
					self.column_type(column)?;
				}
				let predicate = compile(filter)?;
				debug!(predicate = %predicate, "compiled filter");
				Some(predicate).filter(|p| !p.is_empty())
			}
			None => None,
		};

		// every schema column, named, so storage order and extra storage
		// columns do not matter
		let columns = if columns.is_empty() {
			self.column_names()
		} else {
			columns.to_vec()
		};

		Ok(Query {
			columns: columns.into_iter().map(str::to_string).collect(),
			predicate,
			table: self.name.clone(),
		})
	}

	/// The rows passing `filter` (all rows if `None`), restricted to
	/// `columns` in the requested order, or to every column in schema order
	/// if `columns` is empty.
	#[instrument(name = "sqlite::table::filtered_rows", level = "debug", skip(self, filter), fields(table = %self.name))]
	pub fn filtered_rows<D: Decode>(&self, filter: Option<&Filter>, columns: &[&str]) -> Result<Vec<Vec<D::Output>>> {
		let types = if columns.is_empty() {
			self.column_types()
		} else {
			self.schema.types_of(columns)?
		};

		let query = self.query(filter, columns)?;
		let sql = query.sql();
		debug!(sql = %sql, "running filtered rows query");

		let rows = self.connection.fetch_all(&sql, query.params())?;
		decode_rows::<D>(&rows, &types)
	}
}
