// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	path::{Path, PathBuf},
	time::Duration,
};

use serde::{Deserialize, Serialize};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

/// SQLite open flags, mirrored as plain booleans so they can live in a
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenFlags {
	pub read_write: bool,
	pub read_only: bool,
	pub create: bool,
	pub uri: bool,
	pub full_mutex: bool,
	pub no_mutex: bool,
	pub shared_cache: bool,
	pub private_cache: bool,
}

impl Default for OpenFlags {
	fn default() -> Self {
		Self {
			read_write: true,
			read_only: false,
			create: true,
			uri: true,
			full_mutex: false,
			// access is serialized by SqliteConnection
			no_mutex: true,
			shared_cache: false,
			private_cache: false,
		}
	}
}

impl OpenFlags {
	pub fn read_only() -> Self {
		Self {
			read_write: false,
			read_only: true,
			create: false,
			..Self::default()
		}
	}

	pub(crate) fn to_rusqlite(&self) -> rusqlite::OpenFlags {
		let mut result = rusqlite::OpenFlags::empty();

		if self.read_write {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
		}

		if self.read_only {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY;
		}

		if self.create {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_CREATE;
		}

		if self.uri {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_URI;
		}

		if self.full_mutex {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_FULL_MUTEX;
		}

		if self.no_mutex {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX;
		}

		if self.shared_cache {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_SHARED_CACHE;
		}

		if self.private_cache {
			result |= rusqlite::OpenFlags::SQLITE_OPEN_PRIVATE_CACHE;
		}

		result
	}
}

/// Configuration of a [`SqliteConnection`](crate::SqliteConnection).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqliteConfig {
	pub path: DbPath,
	#[serde(default)]
	pub flags: OpenFlags,
	/// How long a query waits on a locked database file before failing.
	#[serde(default)]
	pub busy_timeout: Option<Duration>,
}

impl SqliteConfig {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: DbPath::File(path.as_ref().to_path_buf()),
			flags: OpenFlags::default(),
			busy_timeout: None,
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			flags: OpenFlags::default(),
			busy_timeout: None,
		}
	}

	/// Opens an existing database file without write access.
	pub fn read_only(path: impl AsRef<Path>) -> Self {
		Self {
			flags: OpenFlags::read_only(),
			..Self::new(path)
		}
	}

	pub fn flags(mut self, flags: OpenFlags) -> Self {
		self.flags = flags;
		self
	}

	pub fn busy_timeout(mut self, timeout: Duration) -> Self {
		self.busy_timeout = Some(timeout);
		self
	}
}

impl Default for SqliteConfig {
	fn default() -> Self {
		Self::in_memory()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_flags() {
		let flags = OpenFlags::default().to_rusqlite();
		assert!(flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE));
		assert!(flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_CREATE));
		assert!(flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_URI));
		assert!(!flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY));
	}

	#[test]
	fn test_read_only() {
		let config = SqliteConfig::read_only("votes.db");
		assert_eq!(config.path, DbPath::File(PathBuf::from("votes.db")));
		let flags = config.flags.to_rusqlite();
		assert!(flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY));
		assert!(!flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE));
		assert!(!flags.contains(rusqlite::OpenFlags::SQLITE_OPEN_CREATE));
	}

	#[test]
	fn test_deserialize_with_defaults() {
		let config: SqliteConfig = serde_json::from_str(r#"{"path": {"File": "presidential_vote.db"}}"#).unwrap();
		assert_eq!(config, SqliteConfig::new("presidential_vote.db"));

		let config: SqliteConfig =
			serde_json::from_str(r#"{"path": "Memory", "busy_timeout": {"secs": 2, "nanos": 0}}"#).unwrap();
		assert_eq!(config, SqliteConfig::in_memory().busy_timeout(Duration::from_secs(2)));
	}
}
