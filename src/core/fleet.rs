//! Random fleet generation.

use rand::Rng;

use crate::core::board::Board;
use crate::core::config::MatchConfig;
use crate::core::coordinate::Coordinate;
use crate::core::ship::{Orientation, Ship};

/// Generate a board carrying the configured fleet at random positions.
///
/// Board attempts that exhaust the placement budget are discarded and retried on
/// a fresh board until one succeeds. The config must have passed
/// [`MatchConfig::validate`].
pub fn generate_board<R: Rng>(config: &MatchConfig, rng: &mut R) -> Board {
    let mut discarded = 0usize;
    loop {
        if let Some(board) = try_board(config, rng) {
            log::debug!("fleet placed after {} discarded boards", discarded);
            return board;
        }
        discarded += 1;
        log::debug!("placement budget exhausted, discarding board #{}", discarded);
    }
}

/// Try to place the whole fleet on an empty board within the attempt budget.
pub fn try_board<R: Rng>(config: &MatchConfig, rng: &mut R) -> Option<Board> {
    let mut board = Board::new(config.size);
    let mut attempts = 0usize;
    for &length in &config.fleet {
        loop {
            attempts += 1;
            if attempts > config.placement_budget {
                return None;
            }
            let ship = Ship::new(
                random_coordinate(config.size, rng),
                length,
                random_orientation(rng),
            );
            match board.place(ship) {
                Ok(()) => break,
                Err(err) => log::trace!("attempt {}: {}", attempts, err),
            }
        }
    }
    Some(board)
}

/// A coordinate drawn uniformly from a `size`×`size` grid.
pub fn random_coordinate<R: Rng>(size: usize, rng: &mut R) -> Coordinate {
    let bound = i32::try_from(size).unwrap_or(i32::MAX);
    Coordinate::new(rng.random_range(0..bound), rng.random_range(0..bound))
}

fn random_orientation<R: Rng>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}
