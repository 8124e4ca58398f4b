//! Property tests for the tick engine's board-level invariants.

use proptest::prelude::*;
use reef_core::{Direction, Occupant, OccupantKind, Position};
use reef_world::{Grid, Ocean};

fn arb_board() -> impl Strategy<Value = (Grid, u64)> {
    (1usize..9, 1usize..9)
        .prop_flat_map(|(width, height)| {
            (
                Just(width),
                Just(height),
                prop::collection::vec(0usize..4, width * height),
                any::<u64>(),
            )
        })
        .prop_map(|(width, height, kinds, seed)| {
            let mut grid = Grid::new(width, height).unwrap();
            grid.init();
            for (i, k) in kinds.into_iter().enumerate() {
                grid.set(i % width, i / width, Occupant::new(OccupantKind::ALL[k]))
                    .unwrap();
            }
            (grid, seed)
        })
}

fn has_producer_neighbor(grid: &Grid, pos: Position) -> bool {
    Direction::ALL.iter().any(|dir| {
        let (dx, dy) = dir.to_delta();
        pos.offset(dx, dy, grid.width(), grid.height())
            .is_some_and(|n| grid.kind_at(n) == Some(OccupantKind::Producer))
    })
}

proptest! {
    #[test]
    fn every_cell_stays_occupied((grid, seed) in arb_board(), ticks in 1usize..12) {
        let cells = grid.width() * grid.height();
        let mut ocean = Ocean::with_seed(grid, seed);

        for _ in 0..ticks {
            ocean.tick();
            let census = ocean.census();
            prop_assert_eq!(census.empty, 0);
            prop_assert_eq!(census.occupied(), cells);
        }
    }

    #[test]
    fn producers_never_shrink_during_growth((grid, seed) in arb_board()) {
        let before = grid.positions_of(OccupantKind::Producer);
        let mut ocean = Ocean::with_seed(grid, seed);

        let grown = ocean.grow_producers();

        for pos in &before {
            prop_assert_eq!(ocean.grid().kind_at(*pos), Some(OccupantKind::Producer));
        }
        prop_assert_eq!(
            ocean.grid().positions_of(OccupantKind::Producer).len(),
            before.len() + grown
        );
    }

    #[test]
    fn grazing_only_touches_producers_next_to_grazers((grid, seed) in arb_board()) {
        let before = grid.clone();
        let mut ocean = Ocean::with_seed(grid, seed);

        ocean.graze();

        for (pos, cell) in ocean.grid().iter() {
            let old = before.kind_at(pos);
            let new = cell.map(Occupant::kind);
            if old == new {
                continue;
            }
            prop_assert_eq!(old, Some(OccupantKind::Producer));
            let next_to_grazer = Direction::ALL.iter().any(|dir| {
                let (dx, dy) = dir.to_delta();
                pos.offset(dx, dy, before.width(), before.height())
                    .is_some_and(|n| before.kind_at(n) == Some(OccupantKind::Grazer))
            });
            prop_assert!(next_to_grazer, "{} changed without a neighboring grazer", pos);
        }

        for pos in before.positions_of(OccupantKind::Grazer) {
            if !has_producer_neighbor(&before, pos) {
                prop_assert_eq!(ocean.grid().kind_at(pos), Some(OccupantKind::Grazer));
            }
        }
    }

    #[test]
    fn hunting_removes_exactly_the_caught_grazers((grid, seed) in arb_board()) {
        let before = grid.census();
        let mut ocean = Ocean::with_seed(grid, seed);

        let outcome = ocean.hunt();
        let after = ocean.census();

        prop_assert_eq!(after.grazers, before.grazers - outcome.grazers_caught);
        prop_assert!(after.predators <= before.predators + outcome.predators_spawned);
        prop_assert!(outcome.predators_spawned <= outcome.grazers_caught);
    }

    #[test]
    fn same_seed_same_history((grid, seed) in arb_board()) {
        let mut a = Ocean::with_seed(grid.clone(), seed);
        let mut b = Ocean::with_seed(grid, seed);

        for _ in 0..8 {
            prop_assert_eq!(a.tick(), b.tick());
            prop_assert_eq!(a.grid(), b.grid());
        }
    }
}
