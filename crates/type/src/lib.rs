// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SDML types shared by every SDTP table backend.
//!
//! This crate provides:
//! - [`Type`], the closed set of logical column types
//! - [`Value`], the native (decoded) representation of a logical value
//! - [`Schema`] and [`Column`], the ordered column metadata of a table
//! - [`Error`] and [`Result`], the request-scoped error taxonomy

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod schema;
pub mod value;

pub use error::{Error, Result};
pub use schema::{Column, Schema};
pub use value::{Number, Type, Value};
