//! Property-based tests for the token reader and turn parser.
//!
//! Run with: cargo test --release prop_protocol

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Cursor;

use proptest::prelude::*;

use hlt3::{Coord, Game, TokenReader, TurnOutcome};

fn token_reader(input: String) -> TokenReader<Cursor<Vec<u8>>> {
    TokenReader::new(Cursor::new(input.into_bytes()))
}

/// Setup for a single-player game on a width x height map of zeros.
fn zero_map_game(width: usize, height: usize) -> Game {
    let mut setup = format!("{{}} 1 0 0 0 0 {width} {height}\n");
    for _ in 0..width * height {
        setup.push_str("0 ");
    }
    setup.push('\n');
    let mut reader = token_reader(setup);
    Game::pre_parse(&mut reader).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Tokenization is insensitive to how tokens are packed into lines and
    /// how much whitespace separates them.
    #[test]
    fn prop_whitespace_packing_is_irrelevant(
        values in prop::collection::vec(0usize..1_000_000, 1..50),
        separators in prop::collection::vec(
            prop::sample::select(vec![" ", "\t", "  ", "\n", " \t\n  "]),
            50,
        )
    ) {
        let mut wire = String::new();
        for (i, value) in values.iter().enumerate() {
            let _ = write!(wire, "{value}");
            wire.push_str(separators[i % separators.len()]);
        }

        let mut reader = token_reader(wire);
        for &expected in &values {
            prop_assert_eq!(reader.next_usize().unwrap(), expected);
        }
        prop_assert!(reader.next_token().is_err());
    }

    /// Within one turn, the last update to a coordinate wins, and cells
    /// without updates keep their prior value.
    #[test]
    fn prop_map_updates_last_write_wins(
        updates in prop::collection::vec((0usize..8, 0usize..8, 0usize..1000), 0..40)
    ) {
        let mut game = zero_map_game(8, 8);

        let mut frame = format!("1 0 0 0 0 {}\n", updates.len());
        for (x, y, value) in &updates {
            let _ = writeln!(frame, "{x} {y} {value}");
        }
        let mut reader = token_reader(frame);
        prop_assert_eq!(game.parse(&mut reader).unwrap(), TurnOutcome::Parsed);

        let mut expected: HashMap<(usize, usize), usize> = HashMap::new();
        for &(x, y, value) in &updates {
            expected.insert((x, y), value);
        }
        for y in 0..8 {
            for x in 0..8 {
                let want = expected.get(&(x, y)).copied().unwrap_or(0);
                prop_assert_eq!(game.map.get(Coord::new(x, y)), Some(want));
            }
        }
    }

    /// The turn counter is always the wire value minus one.
    #[test]
    fn prop_turn_counter_shim(wire_turn in 1usize..500_000) {
        let mut game = zero_map_game(2, 2);
        let mut reader = token_reader(format!("{wire_turn} 0 0 0 0 0\n"));
        prop_assert_eq!(game.parse(&mut reader).unwrap(), TurnOutcome::Parsed);
        prop_assert_eq!(game.turn(), wire_turn - 1);
    }

    /// Ship collection cardinality always equals the sum of the declared
    /// per-player ship counts, with matching player tags.
    #[test]
    fn prop_ship_counts_and_tags(
        counts in prop::collection::vec(0usize..10, 1..4)
    ) {
        let num_players = counts.len();
        let mut setup = format!("{{}} {num_players} 0\n");
        for player in 0..num_players {
            let _ = writeln!(setup, "{player} 0 0");
        }
        setup.push_str("4 4\n");
        for _ in 0..16 {
            setup.push_str("0 ");
        }
        setup.push('\n');
        let mut reader = token_reader(setup);
        let mut game = Game::pre_parse(&mut reader).unwrap();

        let mut frame = String::from("1\n");
        for (player, &ships) in counts.iter().enumerate() {
            let _ = writeln!(frame, "{player} {ships} 0 100");
            for id in 0..ships {
                let _ = writeln!(frame, "{id} 0 0 0");
            }
        }
        frame.push_str("0\n");
        let mut reader = token_reader(frame);
        prop_assert_eq!(game.parse(&mut reader).unwrap(), TurnOutcome::Parsed);

        prop_assert_eq!(game.ships.len(), counts.iter().sum::<usize>());
        for (player, &ships) in counts.iter().enumerate() {
            prop_assert_eq!(game.ships_of(player).count(), ships);
        }
        prop_assert_eq!(game.energy.len(), num_players);
    }
}
