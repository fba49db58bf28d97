// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::Type;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of a single request. None of them are fatal to the process; a
/// failing request never degrades into an empty or default result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("unknown filter operator `{0}`")]
	UnknownOperator(String),

	#[error("column `{0}` is not in the table schema")]
	UnknownColumn(String),

	#[error("{value} is not a valid {ty} value")]
	TypeMismatch {
		ty: Type,
		value: String,
	},

	#[error("malformed {ty} text `{text}`")]
	MalformedTemporal {
		ty: Type,
		text: String,
	},

	#[error("malformed filter: {0}")]
	MalformedFilter(String),

	#[error("row has {actual} values but {expected} column types were given")]
	RowShape {
		expected: usize,
		actual: usize,
	},

	#[error("storage returned {value} for a {ty} column")]
	UnexpectedStorageValue {
		ty: Type,
		value: String,
	},

	#[error("storage error: {0}")]
	Storage(String),
}

impl Error {
	pub fn type_mismatch(ty: Type, value: impl ToString) -> Self {
		Error::TypeMismatch {
			ty,
			value: value.to_string(),
		}
	}

	pub fn malformed_temporal(ty: Type, text: impl Into<String>) -> Self {
		Error::MalformedTemporal {
			ty,
			text: text.into(),
		}
	}

	pub fn unexpected_storage_value(ty: Type, value: impl ToString) -> Self {
		Error::UnexpectedStorageValue {
			ty,
			value: value.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages() {
		assert_eq!(Error::UnknownOperator("XOR".into()).to_string(), "unknown filter operator `XOR`");
		assert_eq!(
			Error::malformed_temporal(Type::Date, "2020-13-01").to_string(),
			"malformed date text `2020-13-01`"
		);
		assert_eq!(
			Error::type_mismatch(Type::Number, "\"abc\"").to_string(),
			"\"abc\" is not a valid number value"
		);
		assert_eq!(
			Error::RowShape {
				expected: 2,
				actual: 3
			}
			.to_string(),
			"row has 3 values but 2 column types were given"
		);
	}
}
