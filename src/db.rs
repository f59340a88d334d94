use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use crate::data::StandingRow;
use crate::error::{Error, Result};

pub fn create_schema(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			name   TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			winner INTEGER REFERENCES players (id)
						   NOT NULL,
			loser  INTEGER REFERENCES players (id)
						   NOT NULL
		);",
		[],
	)?;

	tx.commit()?;

	Ok(())
}

pub fn get_player_id(conn: &Connection, name: &str) -> Result<Option<i64>> {
	let mut stmt = conn.prepare("SELECT id FROM players WHERE name = ?1 LIMIT 1;")?;
	let id = stmt.query_row([&name], |row| row.get(0)).optional()?;

	Ok(id)
}

fn player_exists(conn: &Connection, id: i64) -> Result<bool> {
	let mut stmt = conn.prepare("SELECT 1 FROM players WHERE id = ?1;")?;
	let found = stmt.query_row([id], |_| Ok(())).optional()?;

	Ok(found.is_some())
}

/// Adds a player and returns the id the store assigned. Names need not be
/// unique; ids are immutable once assigned.
pub fn register_player(conn: &Connection, name: &str) -> Result<i64> {
	conn.execute("INSERT INTO players (name) VALUES (?1);", [&name])?;
	let id = conn.last_insert_rowid();

	debug!("registered player {id}: {name}");

	Ok(id)
}

pub fn count_players(conn: &Connection) -> Result<i64> {
	let count = conn.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))?;

	Ok(count)
}

/// Records one match outcome. Both ids must reference registered players.
pub fn report_match(conn: &Connection, winner: i64, loser: i64) -> Result<()> {
	if !player_exists(conn, winner)? {
		return Err(Error::UnknownPlayer(winner));
	}
	if !player_exists(conn, loser)? {
		return Err(Error::UnknownPlayer(loser));
	}

	conn.execute(
		"INSERT INTO matches (winner, loser) VALUES (?1, ?2);",
		params![winner, loser],
	)?;

	debug!("recorded match: {winner} beat {loser}");

	Ok(())
}

pub fn delete_matches(conn: &Connection) -> Result<()> {
	conn.execute("DELETE FROM matches;", [])?;

	Ok(())
}

/// Clears every player. Matches go first so the references stay valid.
pub fn delete_players(conn: &Connection) -> Result<()> {
	delete_matches(conn)?;
	conn.execute("DELETE FROM players;", [])?;

	Ok(())
}

/// Returns every player ranked by wins descending. Ties break by id
/// ascending, so the ordering is deterministic. A player's match count is
/// wins plus losses.
pub fn player_standings(conn: &Connection) -> Result<Vec<StandingRow>> {
	let mut stmt = conn.prepare(
		"SELECT p.id, p.name,
			(SELECT COUNT(*) FROM matches m WHERE m.winner = p.id) AS wins,
			(SELECT COUNT(*) FROM matches m
			 WHERE m.winner = p.id OR m.loser = p.id) AS matches
		 FROM players p
		 ORDER BY wins DESC, p.id ASC;",
	)?;

	let rows = stmt.query_map([], |row| {
		Ok(StandingRow {
			id: row.get(0)?,
			name: row.get(1)?,
			wins: row.get(2)?,
			matches: row.get(3)?,
		})
	})?;

	let mut standings = Vec::new();
	for row in rows {
		standings.push(row?);
	}

	Ok(standings)
}
