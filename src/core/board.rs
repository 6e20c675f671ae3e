//! Board state: ship placement, reservations and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{ActorKind, BoardError, ShotOutcome};
use crate::core::coordinate::Coordinate;
use crate::core::ship::Ship;

/// State of a single grid cell, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Contour of a sunk ship, revealed to both sides.
    Blocked,
}

/// One side's N×N board.
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    /// Occupied cells and their contours; consulted when placing.
    reserved: BTreeSet<Coordinate>,
    /// Cells fired upon or revealed around sunk ships; consulted when shooting.
    targeted: BTreeSet<Coordinate>,
    sunk: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty, visible board of `size`×`size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`. [`MatchConfig::validate`] rejects
    /// such sizes.
    ///
    /// [`MatchConfig::validate`]: crate::core::MatchConfig::validate
    pub fn new(size: usize) -> Self {
        let Some(area) = size.checked_mul(size) else {
            panic!("board size {} overflows the cell count", size);
        };
        Self {
            size,
            cells: vec![Cell::Empty; area],
            ships: Vec::new(),
            reserved: BTreeSet::new(),
            targeted: BTreeSet::new(),
            sunk: 0,
            hidden: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Conceal (or reveal) unsunk ship cells from renderers.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Returns `true` if `coord` lies outside the grid.
    pub fn out_of_bounds(&self, coord: Coordinate) -> bool {
        self.index(coord).is_none()
    }

    /// Returns `true` if `coord` is occupied by a ship or touches one.
    pub fn is_reserved(&self, coord: Coordinate) -> bool {
        self.reserved.contains(&coord)
    }

    /// Returns `true` if `coord` can no longer be fired upon.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(&coord)
    }

    /// Number of cells blocked for placement.
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    /// Number of cells blocked for targeting.
    pub fn targeted_count(&self) -> usize {
        self.targeted.len()
    }

    /// State of the cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Iterate the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `chunks` panics on a zero chunk size.
        self.cells.chunks(self.size.max(1))
    }

    /// Returns `true` once every ship on the board has been sunk. A board without
    /// ships is never destroyed.
    pub fn is_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Place `ship`, reserving its cells and contour. On failure the board is left
    /// untouched.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        let fits = ship
            .occupied_cells()
            .all(|c| !self.out_of_bounds(c) && !self.reserved.contains(&c));
        if !fits {
            return Err(BoardError::InvalidPlacement {
                origin: ship.origin(),
            });
        }
        for c in ship.occupied_cells() {
            self.set_cell(c, Cell::Occupied);
            self.reserved.insert(c);
        }
        let contour: Vec<Coordinate> = ship
            .contour()
            .filter(|c| !self.out_of_bounds(*c))
            .collect();
        self.reserved.extend(contour);
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `target` on behalf of an actor of kind `actor`.
    pub fn resolve_shot(
        &mut self,
        target: Coordinate,
        actor: ActorKind,
    ) -> Result<ShotOutcome, BoardError> {
        if self.out_of_bounds(target) {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.targeted.contains(&target) {
            return Err(BoardError::DuplicateTarget { target, actor });
        }
        self.targeted.insert(target);

        let Some(idx) = self.ships.iter().position(|s| s.contains(target)) else {
            self.set_cell(target, Cell::Miss);
            log::debug!("{} shot at {} missed", actor, target);
            return Ok(ShotOutcome::Miss);
        };

        self.ships[idx].apply_hit()?;
        self.set_cell(target, Cell::Hit);
        if !self.ships[idx].is_sunk() {
            log::debug!("{} shot at {} hit", actor, target);
            return Ok(ShotOutcome::Hit);
        }

        self.sunk += 1;
        self.reveal_contour(idx);
        log::debug!(
            "{} shot at {} sank a ship ({}/{})",
            actor,
            target,
            self.sunk,
            self.ships.len()
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Mark the contour of a sunk ship as blocked and untargetable.
    fn reveal_contour(&mut self, idx: usize) {
        let contour: Vec<Coordinate> = self.ships[idx]
            .contour()
            .filter(|c| !self.out_of_bounds(*c))
            .collect();
        for c in contour {
            if self.cell(c) == Some(Cell::Empty) {
                self.set_cell(c, Cell::Blocked);
            }
            self.targeted.insert(c);
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let row = usize::try_from(coord.row).ok()?;
        let col = usize::try_from(coord.col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    fn set_cell(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("ships", &self.ships)
            .field("sunk", &self.sunk)
            .field("hidden", &self.hidden)
            .field("reserved", &self.reserved.len())
            .field("targeted", &self.targeted.len())
            .finish()
    }
}
