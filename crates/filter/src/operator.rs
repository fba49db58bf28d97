// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use sdtp_type::Error;

/// The closed vocabulary of filter operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
	InList,
	InRange,
	RegexMatch,
	All,
	Any,
	None,
}

impl Operator {
	pub const ALL: [Operator; 6] =
		[Operator::InList, Operator::InRange, Operator::RegexMatch, Operator::All, Operator::Any, Operator::None];

	pub fn as_str(&self) -> &'static str {
		match self {
			Operator::InList => "IN_LIST",
			Operator::InRange => "IN_RANGE",
			Operator::RegexMatch => "REGEX_MATCH",
			Operator::All => "ALL",
			Operator::Any => "ANY",
			Operator::None => "NONE",
		}
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Operator {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Operator::ALL.into_iter().find(|op| op.as_str() == s).ok_or_else(|| Error::UnknownOperator(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_round_trip() {
		for op in Operator::ALL {
			assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
		}
	}

	#[test]
	fn test_unknown_operator() {
		assert_eq!("XOR".parse::<Operator>(), Err(Error::UnknownOperator("XOR".to_string())));
		// tags are case sensitive
		assert_eq!("in_list".parse::<Operator>(), Err(Error::UnknownOperator("in_list".to_string())));
	}
}
