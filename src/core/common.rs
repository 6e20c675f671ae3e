//! Common types for the game: actor tags, shot outcomes and board errors.

use core::fmt;

use thiserror::Error;

use crate::core::coordinate::Coordinate;

/// Which kind of actor fired a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Human,
    Automated,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Human => f.pad("human"),
            ActorKind::Automated => f.pad("automated"),
        }
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot hit open water.
    Miss,
    /// The shot hit a ship that is still afloat.
    Hit,
    /// The shot took the last hit point of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Only a non-lethal hit lets the same side fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The target lies outside the grid.
    #[error("target {0} is outside the board")]
    OutOfBounds(Coordinate),
    /// The target was already fired upon or revealed around a sunk ship.
    #[error("{actor} actor already targeted {target}")]
    DuplicateTarget { target: Coordinate, actor: ActorKind },
    /// The ship leaves the grid, overlaps or touches another ship.
    #[error("ship cannot be placed at {origin}")]
    InvalidPlacement { origin: Coordinate },
    /// A ship with no hit points left was hit again.
    #[error("ship has no hit points left")]
    InvalidState,
}
