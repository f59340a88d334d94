use serde::Deserialize;

/// One row of the current standings, ranked best to worst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
	pub id: i64,
	pub name: String,
	pub wins: i64,
	pub matches: i64,
}

/// A matchup for the next round. Produced fresh per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
	pub id1: i64,
	pub name1: String,
	pub id2: i64,
	pub name2: String,
}

/// A match outcome as read from an import file.
#[derive(Debug, Deserialize)]
pub struct MatchRecord {
	pub winner: String,
	pub loser: String,
}
