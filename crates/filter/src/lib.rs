// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SDQL filter expressions.
//!
//! A [`Filter`] is an immutable boolean predicate tree over the columns of a
//! table. It is built per request from its JSON wire form with
//! [`Filter::parse`], which checks every referenced column against the
//! table [`Schema`](sdtp_type::Schema), and is consumed read-only by the
//! storage backends.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod filter;
mod operator;
mod parse;

pub use filter::Filter;
pub use operator::Operator;
