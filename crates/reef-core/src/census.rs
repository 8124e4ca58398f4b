//! Population counts over a board.

use crate::{Occupant, OccupantKind};
use serde::{Deserialize, Serialize};

/// Per-kind occupant counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub substrate: usize,
    pub producers: usize,
    pub grazers: usize,
    pub predators: usize,
    /// Cells holding nothing (only possible before initialization)
    pub empty: usize,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one cell
    pub fn record(&mut self, cell: Option<&Occupant>) {
        match cell.map(Occupant::kind) {
            Some(OccupantKind::Substrate) => self.substrate += 1,
            Some(OccupantKind::Producer) => self.producers += 1,
            Some(OccupantKind::Grazer) => self.grazers += 1,
            Some(OccupantKind::Predator) => self.predators += 1,
            None => self.empty += 1,
        }
    }

    pub fn count(&self, kind: OccupantKind) -> usize {
        match kind {
            OccupantKind::Substrate => self.substrate,
            OccupantKind::Producer => self.producers,
            OccupantKind::Grazer => self.grazers,
            OccupantKind::Predator => self.predators,
        }
    }

    /// Cells holding an occupant of any kind
    pub fn occupied(&self) -> usize {
        self.substrate + self.producers + self.grazers + self.predators
    }

    pub fn total(&self) -> usize {
        self.occupied() + self.empty
    }
}

impl<'a> FromIterator<Option<&'a Occupant>> for Census {
    fn from_iter<I: IntoIterator<Item = Option<&'a Occupant>>>(iter: I) -> Self {
        let mut census = Census::new();
        for cell in iter {
            census.record(cell);
        }
        census
    }
}
