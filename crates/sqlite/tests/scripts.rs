// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{error::Error as StdError, fmt::Write, path::Path};

use sdtp_filter::Filter;
use sdtp_sqlite::{Decode, Json, Native, SqliteConfig, SqliteConnection, SqliteTable, compile};
use sdtp_testing::{
	fixture::{PRESIDENTIAL_VOTE_SCHEMA, PRESIDENTIAL_VOTE_SQL, PRESIDENTIAL_VOTE_TABLE},
	tempdir::temp_dir,
	testscript,
	testscript::{ArgumentConsumer, Command},
};
use sdtp_type::Schema;
use test_each_file::test_each_path;

test_each_path! { in "crates/sqlite/tests/scripts/compile" as compile_memory => test_memory }
test_each_path! { in "crates/sqlite/tests/scripts/table" as table_memory => test_memory }
test_each_path! { in "crates/sqlite/tests/scripts/table" as table_file => test_file }

fn test_memory(path: &Path) {
	let connection = SqliteConnection::in_memory().expect("failed to open database");
	testscript::run_path(&mut Runner::new(connection), path).expect("test failed")
}

fn test_file(path: &Path) {
	temp_dir(|dir| {
		let connection =
			SqliteConnection::new(SqliteConfig::new(dir.join("sdtp.db"))).map_err(std::io::Error::other)?;
		testscript::run_path(&mut Runner::new(connection), path)
	})
	.expect("test failed")
}

/// Runs table and filter commands against one connection.
pub struct Runner {
	connection: SqliteConnection,
	table: Option<SqliteTable>,
}

impl Runner {
	fn new(connection: SqliteConnection) -> Self {
		Self {
			connection,
			table: None,
		}
	}

	fn table(&self) -> Result<&SqliteTable, Box<dyn StdError>> {
		Ok(self.table.as_ref().ok_or("no table, run load or table first")?)
	}

	fn filter(&self, args: &mut ArgumentConsumer<'_>) -> Result<Option<Filter>, Box<dyn StdError>> {
		match args.lookup("filter") {
			Some(arg) => Ok(Some(Filter::parse_str(&arg.value, self.table()?.schema())?)),
			None => Ok(None),
		}
	}
}

fn columns<'a>(args: &mut ArgumentConsumer<'a>) -> Result<Vec<&'a str>, Box<dyn StdError>> {
	args.rest()
		.into_iter()
		.map(|arg| match &arg.key {
			Some(key) => Err(format!("unknown argument '{key}'").into()),
			None => Ok(arg.value.as_str()),
		})
		.collect()
}

fn column<'a>(args: &mut ArgumentConsumer<'a>) -> Result<&'a str, Box<dyn StdError>> {
	Ok(args.next_pos().ok_or("column not given")?.value.as_str())
}

fn join<T>(values: &[T], render: impl Fn(&T) -> String) -> String {
	values.iter().map(render).collect::<Vec<_>>().join(", ")
}

fn render_native(value: &sdtp_type::Value) -> String {
	value.to_string()
}

fn render_json(value: &serde_json::Value) -> String {
	value.to_string()
}

/// Runs `f` in native or JSON mode and renders its values.
fn in_mode<F, G>(json: bool, native: F, jsonify: G) -> Result<Vec<String>, Box<dyn StdError>>
where
	F: FnOnce() -> sdtp_type::Result<Vec<Vec<<Native as Decode>::Output>>>,
	G: FnOnce() -> sdtp_type::Result<Vec<Vec<<Json as Decode>::Output>>>,
{
	Ok(if json {
		jsonify()?.iter().map(|row| join(row, render_json)).collect()
	} else {
		native()?.iter().map(|row| join(row, render_native)).collect()
	})
}

impl testscript::Runner for Runner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn StdError>> {
		let mut output = String::new();
		match command.name.as_str() {
			// load
			"load" => {
				command.consume_args().reject_rest()?;
				self.connection.execute_batch(PRESIDENTIAL_VOTE_SQL)?;
				let schema: Schema = serde_json::from_str(PRESIDENTIAL_VOTE_SCHEMA)?;
				self.table = Some(SqliteTable::new(schema, self.connection.clone(), PRESIDENTIAL_VOTE_TABLE));
			}

			// exec SQL
			"exec" => {
				let mut args = command.consume_args();
				let sql = args.next_pos().ok_or("sql not given")?.value.as_str();
				args.reject_rest()?;
				self.connection.execute_batch(sql)?;
			}

			// table NAME SCHEMA
			"table" => {
				let mut args = command.consume_args();
				let name = args.next_pos().ok_or("table name not given")?.value.clone();
				let schema: Schema = serde_json::from_str(&args.next_pos().ok_or("schema not given")?.value)?;
				args.reject_rest()?;
				self.table = Some(SqliteTable::new(schema, self.connection.clone(), name));
			}

			// compile FILTER
			"compile" => {
				let mut args = command.consume_args();
				let spec = args.next_pos().ok_or("filter not given")?.value.as_str();
				args.reject_rest()?;
				let filter = Filter::parse_str(spec, self.table()?.schema())?;
				let predicate = compile(&filter)?;
				if predicate.is_empty() {
					writeln!(output, "<no constraint>")?;
				} else {
					writeln!(output, "{predicate}")?;
				}
			}

			// query [filter=FILTER] [COLUMN...]
			"query" => {
				let mut args = command.consume_args();
				let filter = self.filter(&mut args)?;
				let columns = columns(&mut args)?;
				let query = self.table()?.query(filter.as_ref(), &columns)?;
				writeln!(output, "{}", query.sql())?;
				if let Some(predicate) = &query.predicate {
					writeln!(output, "{predicate}")?;
				}
			}

			// rows [filter=FILTER] [json=BOOL] [COLUMN...]
			"rows" => {
				let mut args = command.consume_args();
				let filter = self.filter(&mut args)?;
				let json = args.lookup_parse("json")?.unwrap_or(false);
				let columns = columns(&mut args)?;
				let table = self.table()?;
				let rows = in_mode(
					json,
					|| table.filtered_rows::<Native>(filter.as_ref(), &columns),
					|| table.filtered_rows::<Json>(filter.as_ref(), &columns),
				)?;
				if rows.is_empty() {
					writeln!(output, "no rows")?;
				}
				for row in rows {
					writeln!(output, "{row}")?;
				}
			}

			// distinct|values|range COLUMN [json=BOOL]
			"distinct" | "values" | "range" => {
				let mut args = command.consume_args();
				let json = args.lookup_parse("json")?.unwrap_or(false);
				let column = column(&mut args)?;
				args.reject_rest()?;
				let table = self.table()?;
				let values = match command.name.as_str() {
					"distinct" => in_mode(
						json,
						|| table.all_distinct_values::<Native>(column).map(|v| vec![v]),
						|| table.all_distinct_values::<Json>(column).map(|v| vec![v]),
					)?,
					"values" => in_mode(
						json,
						|| table.column_values::<Native>(column).map(|v| vec![v]),
						|| table.column_values::<Json>(column).map(|v| vec![v]),
					)?,
					_ => in_mode(
						json,
						|| table.range_spec::<Native>(column).map(|v| vec![v]),
						|| table.range_spec::<Json>(column).map(|v| vec![v]),
					)?,
				};
				for line in values {
					writeln!(output, "{line}")?;
				}
			}

			name => return Err(format!("unknown command: {name}").into()),
		}
		Ok(output)
	}
}
