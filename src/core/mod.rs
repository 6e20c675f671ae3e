//! Core game rules (no_std compatible)
//!
//! Coordinates, ships, boards, fleet generation and configuration. Nothing in
//! here reads input, writes output or waits on a clock, so it can be driven
//! entirely from tests with a seeded RNG.

pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod ship;

pub use board::{Board, Cell};
pub use common::{ActorKind, BoardError, ShotOutcome};
pub use config::{
    ConfigError, MatchConfig, DEFAULT_BOARD_SIZE, DEFAULT_FLEET, PLACEMENT_ATTEMPT_BUDGET,
};
pub use coordinate::Coordinate;
pub use fleet::{generate_board, random_coordinate, try_board};
pub use ship::{Orientation, Ship};
