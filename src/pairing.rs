use crate::data::{Pairing, StandingRow};
use crate::error::{Error, Result};

/// Pairs adjacent players from a ranked standings list: first with second,
/// third with fourth, and so on. Adjacent players carry equal or nearly-equal
/// win records, which is the Swiss-system heuristic. The input must already
/// be sorted best to worst; no sorting happens here.
///
/// Fails when the list has odd length, since bye rounds are unsupported. An
/// empty list yields no pairings.
pub fn swiss_pairings(ranked: &[StandingRow]) -> Result<Vec<Pairing>> {
	if ranked.len() % 2 != 0 {
		return Err(Error::OddStandings(ranked.len()));
	}

	let pairings = ranked
		.chunks_exact(2)
		.map(|pair| Pairing {
			id1: pair[0].id,
			name1: pair[0].name.clone(),
			id2: pair[1].id,
			name2: pair[1].name.clone(),
		})
		.collect();

	Ok(pairings)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row(id: i64, name: &str, wins: i64) -> StandingRow {
		StandingRow {
			id,
			name: name.into(),
			wins,
			matches: wins,
		}
	}

	#[test]
	fn empty_standings_yield_no_pairings() {
		assert!(swiss_pairings(&[]).unwrap().is_empty());
	}

	#[test]
	fn two_players_form_one_pair() {
		let ranked = [row(1, "Alice", 0), row(2, "Bob", 0)];
		let pairings = swiss_pairings(&ranked).unwrap();

		assert_eq!(pairings.len(), 1);
		assert_eq!(pairings[0].id1, 1);
		assert_eq!(pairings[0].name1, "Alice");
		assert_eq!(pairings[0].id2, 2);
		assert_eq!(pairings[0].name2, "Bob");
	}

	#[test]
	fn adjacent_ranks_meet_next_round() {
		// A and C won their first match, so they sit atop the standings
		// and should face each other, not their previous opponents.
		let ranked = [
			row(1, "A", 1),
			row(3, "C", 1),
			row(2, "B", 0),
			row(4, "D", 0),
		];
		let pairings = swiss_pairings(&ranked).unwrap();

		assert_eq!(pairings.len(), 2);
		assert_eq!((pairings[0].id1, pairings[0].id2), (1, 3));
		assert_eq!((pairings[1].id1, pairings[1].id2), (2, 4));
	}

	#[test]
	fn every_player_appears_exactly_once() {
		let ranked: Vec<StandingRow> = (1..=8)
			.map(|id| row(id, &format!("P{id}"), 8 - id))
			.collect();
		let pairings = swiss_pairings(&ranked).unwrap();

		assert_eq!(pairings.len(), 4);

		let mut seen: Vec<i64> = pairings
			.iter()
			.flat_map(|p| [p.id1, p.id2])
			.collect();
		seen.sort();
		assert_eq!(seen, (1..=8).collect::<Vec<i64>>());
	}

	#[test]
	fn odd_standings_are_rejected() {
		let ranked = [row(1, "A", 0), row(2, "B", 0), row(3, "C", 0)];
		let err = swiss_pairings(&ranked).unwrap_err();
		assert!(matches!(err, Error::OddStandings(3)));
	}

	#[test]
	fn duplicate_names_pair_by_id() {
		let ranked = [row(1, "Alice", 0), row(2, "Alice", 0)];
		let pairings = swiss_pairings(&ranked).unwrap();

		assert_eq!(pairings.len(), 1);
		assert_ne!(pairings[0].id1, pairings[0].id2);
	}
}
