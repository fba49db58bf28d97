// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{env, fs, path::Path};

use uuid::Uuid;

/// Runs `f` with a fresh directory that is removed afterwards, whether `f`
/// succeeds or not.
pub fn temp_dir<F>(f: F) -> std::io::Result<()>
where
	F: FnOnce(&Path) -> std::io::Result<()>,
{
	let mut path = env::temp_dir();
	path.push(format!("sdtp-{}", Uuid::new_v4()));

	fs::create_dir(&path)?;
	let result = f(&path);

	let _ = fs::remove_dir_all(&path);
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_removed_afterwards() {
		let mut seen = None;
		temp_dir(|path| {
			assert!(path.is_dir());
			fs::write(path.join("votes.db"), b"")?;
			seen = Some(path.to_path_buf());
			Ok(())
		})
		.unwrap();
		assert!(!seen.unwrap().exists());
	}
}
