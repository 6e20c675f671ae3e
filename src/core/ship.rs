//! Ship definitions and hit-point tracking.

use core::fmt;

use crate::core::common::BoardError;
use crate::core::coordinate::Coordinate;

/// Orientation of a ship on the board.
///
/// A horizontal ship grows along the row axis from its origin, a vertical ship
/// along the column axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed vessel with its remaining hit points.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Ship {
    /// Create a ship at `origin`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is 0.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0, "ship length must be at least 1");
        Self {
            origin,
            length,
            orientation,
            hit_points: length,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let origin = self.origin;
        let orientation = self.orientation;
        (0..self.length).map(move |i| {
            let step = i32::try_from(i).unwrap_or(i32::MAX);
            match orientation {
                Orientation::Horizontal => origin.offset(step, 0),
                Orientation::Vertical => origin.offset(0, step),
            }
        })
    }

    /// Returns `true` if the ship covers `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Cells touching the ship (diagonals included) that the ship does not cover.
    /// May contain duplicates and out-of-bounds coordinates.
    pub fn contour(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.occupied_cells()
            .flat_map(Coordinate::neighbors)
            .filter(move |c| !self.contains(*c))
    }

    /// Take one hit. Fails with [`BoardError::InvalidState`] if already sunk.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.hit_points == 0 {
            return Err(BoardError::InvalidState);
        }
        self.hit_points -= 1;
        Ok(())
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, length: {}, orientation: {:?}, hit_points: {} }}",
            self.origin, self.length, self.orientation, self.hit_points,
        )
    }
}
