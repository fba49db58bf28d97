// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test helpers shared by the SDTP crates: golden testscripts, temporary
//! directories and the presidential vote fixture.

pub mod fixture;
pub mod tempdir;
pub mod testscript;
