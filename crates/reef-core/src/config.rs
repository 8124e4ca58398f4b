//! Configuration types for the simulation.

use crate::{Error, OccupantKind, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Width of the board in cells
    pub width: usize,
    /// Height of the board in cells
    pub height: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 10,
        }
    }
}

/// Driver loop parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of ticks to run before exiting
    pub num_ticks: u64,
    /// Real-time delay before each tick (milliseconds)
    pub tick_delay_ms: u64,
    /// Fixed seed for the random engine; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_ticks: 50,
            tick_delay_ms: 500,
            seed: None,
        }
    }
}

/// A single initial occupant placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub kind: OccupantKind,
}

impl Placement {
    pub fn new(x: usize, y: usize, kind: OccupantKind) -> Self {
        Self { x, y, kind }
    }
}

/// Board size plus the occupants placed on top of a fresh substrate fill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub placements: Vec<Placement>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            placements: vec![
                Placement::new(8, 5, OccupantKind::Grazer),
                Placement::new(10, 6, OccupantKind::Grazer),
                Placement::new(12, 5, OccupantKind::Grazer),
                Placement::new(10, 5, OccupantKind::Producer),
                Placement::new(5, 5, OccupantKind::Predator),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenario: ScenarioConfig = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading scenario");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject empty boards and placements that fall off the board
    pub fn validate(&self) -> Result<()> {
        let WorldConfig { width, height } = self.world;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        for placement in &self.placements {
            if placement.x >= width || placement.y >= height {
                return Err(Error::OutOfBounds {
                    x: placement.x,
                    y: placement.y,
                    width,
                    height,
                });
            }
        }

        Ok(())
    }
}
