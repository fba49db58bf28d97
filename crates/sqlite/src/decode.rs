// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Decoding of whole result rows.

use sdtp_type::{Error, Result, Type};

use crate::{Row, codec::Decode};

/// Decodes `row` positionally against `types`.
pub fn decode_row<D: Decode>(row: &[rusqlite::types::Value], types: &[Type]) -> Result<Vec<D::Output>> {
	if row.len() != types.len() {
		return Err(Error::RowShape {
			expected: types.len(),
			actual: row.len(),
		});
	}
	row.iter().zip(types).map(|(raw, ty)| D::decode(raw, *ty)).collect()
}

/// Decodes every row; one bad cell fails the whole result.
pub fn decode_rows<D: Decode>(rows: &[Row], types: &[Type]) -> Result<Vec<Vec<D::Output>>> {
	rows.iter().map(|row| decode_row::<D>(row, types)).collect()
}

/// Decodes a single-column result into a flat list.
pub fn decode_column<D: Decode>(rows: &[Row], ty: Type) -> Result<Vec<D::Output>> {
	rows.iter()
		.map(|row| match row.as_slice() {
			[raw] => D::decode(raw, ty),
			_ => Err(Error::RowShape {
				expected: 1,
				actual: row.len(),
			}),
		})
		.collect()
}
