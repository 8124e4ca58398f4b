//! World simulation engine.
//!
//! This module implements the bounded 2D board and the per-tick rules that
//! move producers, grazers and predators across it.

pub mod grid;
pub mod render;
pub mod simulation;

pub use grid::Grid;
pub use render::render;
pub use simulation::{GrazeOutcome, HuntOutcome, Ocean, TickReport};
