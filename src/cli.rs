use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Tournament database file.
	#[arg(short, long, value_name = "FILE", default_value = "tournament.db")]
	pub database: PathBuf,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Register a player; the store assigns their id.
	Register {
		name: String,
	},
	/// Record a match outcome by player ids.
	Report {
		winner: i64,
		loser: i64,
	},
	/// Print the number of registered players.
	Count,
	/// Print the standings ranked by wins.
	Standings,
	/// Print next-round pairings from the current standings.
	Pairings,
	/// Import match outcomes from a CSV of winner,loser names.
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// Clear all matches, or the whole tournament with --players.
	Reset {
		#[arg(long)]
		players: bool,
	},
}
