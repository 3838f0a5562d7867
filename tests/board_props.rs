use std::collections::HashSet;

use broadside::{fleet_sizes, random_board, Board, Cell, Orientation, PLACEMENT_ATTEMPTS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn seeded_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_board(&fleet_sizes(), &mut rng, PLACEMENT_ATTEMPTS).unwrap()
}

fn check_accounting(board: &Board) -> Result<(), TestCaseError> {
    let afloat = board.fleet().iter().filter(|s| !s.is_sunk()).count();
    prop_assert_eq!(board.alive_count(), afloat);
    for ship in board.fleet() {
        let hit_cells = ship
            .cells()
            .iter()
            .filter(|c| board.hits().get(c.x, c.y).unwrap())
            .count();
        prop_assert_eq!(ship.hit_count(), hit_cells);
        prop_assert_eq!(ship.is_sunk(), ship.hit_count() == ship.size());
    }
    prop_assert!((board.hits() & board.misses()).is_empty());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleets_never_overlap(seed in any::<u64>()) {
        let board = seeded_board(seed);
        prop_assert_eq!(board.fleet().len(), 5);
        let mut seen = HashSet::new();
        for ship in board.fleet() {
            for cell in ship.cells() {
                prop_assert!(seen.insert(*cell), "cell {:?} shared", cell);
                prop_assert_eq!(board.ship_at(cell.x, cell.y), ship.id());
            }
        }
        prop_assert_eq!(seen.len(), 17);
        let occupied = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| board.is_occupied(x, y))
            .count();
        prop_assert_eq!(occupied, 17);
    }

    #[test]
    fn ships_are_straight_contiguous_runs(seed in any::<u64>()) {
        let board = seeded_board(seed);
        for (idx, ship) in board.fleet().iter().enumerate() {
            prop_assert_eq!(ship.id() as usize, idx + 1);
            prop_assert_eq!(ship.size(), fleet_sizes()[idx]);
            prop_assert_eq!(ship.cells().len(), ship.size());
            let origin = ship.origin();
            for (k, cell) in ship.cells().iter().enumerate() {
                let expected = match ship.orientation() {
                    Orientation::Horizontal => Cell::new(origin.x + k, origin.y),
                    Orientation::Vertical => Cell::new(origin.x, origin.y + k),
                };
                prop_assert_eq!(*cell, expected);
                prop_assert!(cell.x < 8 && cell.y < 8);
            }
            prop_assert_eq!(ship.hit_count(), 0);
            prop_assert!(!ship.is_sunk());
        }
        prop_assert_eq!(board.alive_count(), 5);
    }

    #[test]
    fn second_shot_changes_nothing(seed in any::<u64>(), x in 0..8usize, y in 0..8usize) {
        let mut board = seeded_board(seed);
        let first = board.resolve_shot(x, y).unwrap();
        prop_assert!(!first.duplicate);
        let after_first = board.clone();
        let second = board.resolve_shot(x, y).unwrap();
        prop_assert!(second.duplicate);
        prop_assert!(!second.hit && !second.sunk);
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn sinks_are_counted_once(seed in any::<u64>(), shots in 1..200usize) {
        let mut board = seeded_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut sinks = 0;
        for _ in 0..shots {
            let (x, y) = (rng.random_range(0..8), rng.random_range(0..8));
            let alive_before = board.alive_count();
            let outcome = board.resolve_shot(x, y).unwrap();
            if outcome.sunk {
                sinks += 1;
                prop_assert!(outcome.hit);
                prop_assert_eq!(board.alive_count(), alive_before - 1);
                let id = outcome.ship_id.unwrap();
                let ship = board.ship(id).unwrap();
                prop_assert!(ship.is_sunk());
                prop_assert_eq!(ship.hit_count(), ship.size());
            } else {
                prop_assert_eq!(board.alive_count(), alive_before);
            }
            check_accounting(&board)?;
        }
        prop_assert_eq!(sinks, 5 - board.alive_count());
    }
}
