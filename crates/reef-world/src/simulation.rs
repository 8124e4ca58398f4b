//! Tick engine: three ordered rule passes over the board.
//!
//! Each pass first snapshots the positions of the kind that acts, then walks
//! that list in row-major order while mutating the live board. Occupants
//! created during a pass never act in that same pass.

use crate::grid::Grid;
use reef_core::{Census, Direction, Occupant, OccupantKind, Position, Result, ScenarioConfig};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Chance that a feeding grazer leaves a new grazer on the eaten cell
pub const GRAZER_SPAWN_CHANCE: f64 = 0.5;

/// Chance that a predator leaves a new predator behind after a catch
pub const PREDATOR_SPAWN_CHANCE: f32 = 0.3;

/// Result of the grazing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrazeOutcome {
    /// Producers replaced by a new grazer
    pub grazers_spawned: usize,
    /// Producers eaten down to substrate
    pub producers_eaten: usize,
}

/// Result of the hunting pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntOutcome {
    pub predator_moves: usize,
    pub grazers_caught: usize,
    pub predators_spawned: usize,
}

/// Summary of one full tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u64,
    pub producers_grown: usize,
    pub graze: GrazeOutcome,
    pub hunt: HuntOutcome,
}

/// The board plus the single random engine every rule draws from
pub struct Ocean {
    grid: Grid,
    rng: ChaCha8Rng,
    tick: u64,
}

impl Ocean {
    /// Wrap a board, seeding the random engine from OS entropy
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, ChaCha8Rng::from_entropy())
    }

    /// Wrap a board with a deterministic random engine
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(grid: Grid, rng: ChaCha8Rng) -> Self {
        Self { grid, rng, tick: 0 }
    }

    /// Build a substrate-filled board and place the scenario's occupants on it
    pub fn from_scenario(scenario: &ScenarioConfig, seed: Option<u64>) -> Result<Self> {
        scenario.validate()?;

        let mut grid = Grid::new(scenario.world.width, scenario.world.height)?;
        grid.init();
        for placement in &scenario.placements {
            grid.set(placement.x, placement.y, placement.kind.into())?;
        }

        debug!(
            width = grid.width(),
            height = grid.height(),
            placements = scenario.placements.len(),
            seeded = seed.is_some(),
            "Ocean created from scenario"
        );

        Ok(match seed {
            Some(seed) => Self::with_seed(grid, seed),
            None => Self::new(grid),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of ticks completed so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn census(&self) -> Census {
        self.grid.census()
    }

    /// Advance one step: producer growth, then grazing, then hunting
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;

        let producers_grown = self.grow_producers();
        let graze = self.graze();
        let hunt = self.hunt();

        let report = TickReport {
            tick: self.tick,
            producers_grown,
            graze,
            hunt,
        };

        debug!(
            tick = report.tick,
            producers_grown = report.producers_grown,
            grazers_spawned = report.graze.grazers_spawned,
            producers_eaten = report.graze.producers_eaten,
            predator_moves = report.hunt.predator_moves,
            grazers_caught = report.hunt.grazers_caught,
            predators_spawned = report.hunt.predators_spawned,
            "Tick complete"
        );

        report
    }

    /// Pass 1: every producer converts its substrate neighbors to producers.
    ///
    /// Returns the number of cells converted.
    pub fn grow_producers(&mut self) -> usize {
        let producers = self.grid.positions_of(OccupantKind::Producer);
        let mut grown = 0;

        for pos in producers {
            for dir in Direction::ALL {
                let Some(target) = self.neighbor(pos, dir) else {
                    continue;
                };
                if self.grid.kind_at(target) == Some(OccupantKind::Substrate) {
                    self.grid.put(target, Occupant::producer());
                    grown += 1;
                }
            }
        }

        trace!(producers_grown = grown, "Producer pass done");
        grown
    }

    /// Pass 2: each grazer feeds on one producer neighbor, chosen by scanning
    /// the four directions in a freshly shuffled order.
    ///
    /// The grazer's own cell is never touched; the eaten cell becomes either a
    /// new grazer or substrate on a fair coin.
    pub fn graze(&mut self) -> GrazeOutcome {
        let grazers = self.grid.positions_of(OccupantKind::Grazer);
        let mut outcome = GrazeOutcome::default();

        for pos in grazers {
            let mut dirs = Direction::ALL;
            dirs.shuffle(&mut self.rng);

            let food = dirs.iter().find_map(|&dir| {
                self.neighbor(pos, dir)
                    .filter(|&target| self.grid.kind_at(target) == Some(OccupantKind::Producer))
            });
            let Some(target) = food else {
                continue;
            };

            if self.rng.gen_bool(GRAZER_SPAWN_CHANCE) {
                self.grid.put(target, Occupant::grazer());
                outcome.grazers_spawned += 1;
                trace!(from = %pos, at = %target, "Grazer reproduced");
            } else {
                self.grid.put(target, Occupant::substrate());
                outcome.producers_eaten += 1;
                trace!(from = %pos, at = %target, "Grazer fed");
            }
        }

        trace!(
            grazers_spawned = outcome.grazers_spawned,
            producers_eaten = outcome.producers_eaten,
            "Grazing pass done"
        );
        outcome
    }

    /// Pass 3: each predator takes one step toward the nearest grazer and
    /// eats it if the step lands on it.
    ///
    /// Caught grazers leave the food set immediately, so later predators in
    /// the same pass never chase an eaten cell. Once the food set is empty the
    /// remaining predators stay put.
    pub fn hunt(&mut self) -> HuntOutcome {
        let mut food = self.grid.positions_of(OccupantKind::Grazer);
        let predators = self.grid.positions_of(OccupantKind::Predator);
        let mut outcome = HuntOutcome::default();

        for pos in predators {
            // Ties go to the first grazer in row-major order.
            let Some(target) = food
                .iter()
                .copied()
                .min_by_key(|candidate| candidate.manhattan_distance(&pos))
            else {
                trace!(at = %pos, "No food left, predator idles");
                break;
            };

            let (dx, dy) = step_toward(pos, target);
            if (dx, dy) == (0, 0) {
                continue;
            }
            let Some(dest) = pos.offset(dx, dy, self.grid.width(), self.grid.height()) else {
                continue;
            };

            let ate = self.grid.kind_at(dest) == Some(OccupantKind::Grazer);
            let Some(hunter) = self.grid.take(pos) else {
                continue;
            };
            self.grid.put(dest, hunter);

            let spawned = ate && self.rng.gen::<f32>() < PREDATOR_SPAWN_CHANCE;
            let left_behind = if spawned {
                Occupant::predator()
            } else {
                Occupant::substrate()
            };
            self.grid.put(pos, left_behind);

            outcome.predator_moves += 1;
            if ate {
                food.retain(|&cell| cell != dest);
                outcome.grazers_caught += 1;
                trace!(from = %pos, at = %dest, spawned, "Predator caught grazer");
            } else {
                trace!(from = %pos, to = %dest, target = %target, "Predator moved");
            }
            if spawned {
                outcome.predators_spawned += 1;
            }
        }

        trace!(
            predator_moves = outcome.predator_moves,
            grazers_caught = outcome.grazers_caught,
            "Hunting pass done"
        );
        outcome
    }

    fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.to_delta();
        pos.offset(dx, dy, self.grid.width(), self.grid.height())
    }
}

/// Single Manhattan step from `from` toward `to`, closing the x gap first.
fn step_toward(from: Position, to: Position) -> (i32, i32) {
    if to.x != from.x {
        (if to.x > from.x { 1 } else { -1 }, 0)
    } else if to.y != from.y {
        (0, if to.y > from.y { 1 } else { -1 })
    } else {
        (0, 0)
    }
}
