// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Type};

/// One `{name, type}` entry of a table schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: Type,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

/// The ordered columns of a table. The order is the default projection
/// order: a request for all columns selects them by name in this order, so
/// storage may order its columns differently or carry extra ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
	columns: Vec<Column>,
}

impl Schema {
	pub fn new(columns: Vec<Column>) -> Self {
		Self {
			columns,
		}
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn column_types(&self) -> Vec<Type> {
		self.columns.iter().map(|c| c.ty).collect()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.columns.iter().any(|c| c.name == name)
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn column_type(&self, name: &str) -> Result<Type> {
		self.column(name).map(|c| c.ty).ok_or_else(|| Error::UnknownColumn(name.to_string()))
	}

	/// Types of the given columns in the order they were asked for, which
	/// need not be schema order.
	pub fn types_of<S: AsRef<str>>(&self, columns: &[S]) -> Result<Vec<Type>> {
		columns.iter().map(|c| self.column_type(c.as_ref())).collect()
	}
}

impl From<Vec<Column>> for Schema {
	fn from(columns: Vec<Column>) -> Self {
		Schema::new(columns)
	}
}

impl<const N: usize> From<[(&str, Type); N]> for Schema {
	fn from(columns: [(&str, Type); N]) -> Self {
		Schema::new(columns.into_iter().map(|(name, ty)| Column::new(name, ty)).collect())
	}
}
