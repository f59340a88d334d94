use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("storage unavailable: {0}")]
	Storage(#[from] rusqlite::Error),

	#[error("no player with id {0}")]
	UnknownPlayer(i64),

	#[error("cannot pair an odd number of players ({0})")]
	OddStandings(usize),

	#[error("could not read match file: {0}")]
	MatchFile(#[from] csv::Error),

	#[error(transparent)]
	Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
