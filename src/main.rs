mod cli;
mod data;
mod db;
mod error;
mod pairing;

use std::{
	fs::File,
	io::{self, Write},
};

use clap::Parser;
use cli::{Cli, Commands};
use data::MatchRecord;
use db::create_schema;
use error::Result;
use log::info;
use rusqlite::Connection;

fn main() -> Result<()> {
	env_logger::init();

	let cli = Cli::parse();

	let mut conn = Connection::open(&cli.database)?;
	create_schema(&mut conn)?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(File::create(path)?) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	match cli.command {
		Commands::Register { name } => {
			let id = db::register_player(&conn, &name)?;
			writeln!(out, "registered {name} with id {id}")?;
		}
		Commands::Report { winner, loser } => {
			db::report_match(&conn, winner, loser)?;
		}
		Commands::Count => {
			writeln!(out, "{}", db::count_players(&conn)?)?;
		}
		Commands::Standings => {
			let string = standings_command_string(&conn)?;
			out.write_all(string.as_bytes())?;
		}
		Commands::Pairings => {
			let string = pairings_command_string(&conn)?;
			out.write_all(string.as_bytes())?;
		}
		Commands::Load { matches } => {
			let count = load_matches(&conn, &matches)?;
			writeln!(out, "loaded {count} matches")?;
		}
		Commands::Reset { players } => {
			if players {
				db::delete_players(&conn)?;
			} else {
				db::delete_matches(&conn)?;
			}
		}
	}

	Ok(())
}

fn standings_command_string(conn: &Connection) -> Result<String> {
	let standings = db::player_standings(conn)?;

	let mut string = String::from("# Standings\n```");

	for (rank, row) in standings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (id {}) {}-{}",
			rank + 1,
			row.name,
			row.id,
			row.wins,
			row.matches - row.wins,
		));
	}

	string.push_str("\n```\n");

	Ok(string)
}

fn pairings_command_string(conn: &Connection) -> Result<String> {
	let standings = db::player_standings(conn)?;
	let pairings = pairing::swiss_pairings(&standings)?;

	let mut string = String::from("# Next round\n```");

	for pair in &pairings {
		string.push_str(&format!(
			"\n{} (id {}) vs {} (id {})",
			pair.name1, pair.id1, pair.name2, pair.id2,
		));
	}

	string.push_str("\n```\n");

	Ok(string)
}

/// Reads `winner,loser` name rows and reports each as a match, registering
/// any name not seen before. Returns how many matches were recorded.
fn load_matches(conn: &Connection, path: &std::path::Path) -> Result<usize> {
	let mut reader = csv::Reader::from_path(path)?;
	let mut count = 0;

	for record in reader.deserialize() {
		let record: MatchRecord = record?;

		let winner = match db::get_player_id(conn, &record.winner)? {
			Some(id) => id,
			None => db::register_player(conn, &record.winner)?,
		};
		let loser = match db::get_player_id(conn, &record.loser)? {
			Some(id) => id,
			None => db::register_player(conn, &record.loser)?,
		};

		db::report_match(conn, winner, loser)?;
		count += 1;
	}

	info!("imported {count} matches from {}", path.display());

	Ok(count)
}
