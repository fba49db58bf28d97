// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A small presidential vote table covering every column type. Dates,
//! times and datetimes are stored in SQLite's text forms.

pub const PRESIDENTIAL_VOTE_TABLE: &str = "presidential_vote";

pub const PRESIDENTIAL_VOTE_SCHEMA: &str = r#"[
	{"name": "Year", "type": "number"},
	{"name": "State", "type": "string"},
	{"name": "Name", "type": "string"},
	{"name": "Party", "type": "string"},
	{"name": "Percentage", "type": "number"},
	{"name": "Incumbent", "type": "boolean"},
	{"name": "Election", "type": "date"},
	{"name": "PollsClose", "type": "timeofday"},
	{"name": "Certified", "type": "datetime"}
]"#;

pub const PRESIDENTIAL_VOTE_SQL: &str = r#"
CREATE TABLE presidential_vote (
	Year INTEGER,
	State TEXT,
	Name TEXT,
	Party TEXT,
	Percentage REAL,
	Incumbent INTEGER,
	Election TEXT,
	PollsClose TEXT,
	Certified TEXT
);
INSERT INTO presidential_vote VALUES
	(1936, 'Ohio', 'Roosevelt', 'Democratic', 57.99, 1, '1936-11-03', '19:30:00', '1936-12-07 10:00:00'),
	(1932, 'Ohio', 'Roosevelt', 'Democratic', 49.88, 0, '1932-11-08', '19:30:00', '1932-12-05 10:00:00'),
	(1932, 'Ohio', 'Hoover', 'Republican', 47.04, 1, '1932-11-08', '19:30:00', '1932-12-05 10:00:00'),
	(1948, 'Iowa', 'Truman', 'Democratic', 50.31, 1, '1948-11-02', '21:00:00', '1948-12-13 09:30:00'),
	(1948, 'Iowa', 'Dewey', 'Republican', 47.58, 0, '1948-11-02', '21:00:00', '1948-12-13 09:30:00'),
	(1960, 'Ohio', 'Kennedy', 'Democratic', 46.72, 0, '1960-11-08', '19:30:00', '1960-12-19 11:15:00'),
	(1960, 'Ohio', 'Nixon', 'Republican', 53.28, 0, '1960-11-08', '19:30:00', '1960-12-19 11:15:00');
"#;
