use alloc::vec::Vec;

use thiserror::Error;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of random placement attempts one board gets for its whole fleet before
/// it is discarded and generation starts over on an empty board.
pub const PLACEMENT_ATTEMPT_BUDGET: usize = 2000;

/// Parameters of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Side length of each square board.
    pub size: usize,
    /// Lengths of the ships placed on every board.
    pub fleet: Vec<usize>,
    /// See [`PLACEMENT_ATTEMPT_BUDGET`].
    pub placement_budget: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            placement_budget: PLACEMENT_ATTEMPT_BUDGET,
        }
    }
}

impl MatchConfig {
    /// Config with the default fleet and budget on a board of `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn total_ships(&self) -> usize {
        self.fleet.len()
    }

    /// Number of cells the whole fleet covers.
    pub fn total_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Area the fleet needs once every ship is grown by half the mandatory gap on
    /// each side: a ship of length `len` claims `(len + 1) * 2` cells of a
    /// `(size + 1)`×`(size + 1)` grid.
    pub fn padded_cells(&self) -> usize {
        self.fleet
            .iter()
            .map(|len| len.saturating_add(1).saturating_mul(2))
            .fold(0, usize::saturating_add)
    }

    /// Reject configurations fleet generation is known never to satisfy, including
    /// fleets that cannot keep a free cell between every pair of ships.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if i32::try_from(self.size).is_err() {
            return Err(ConfigError::BoardTooLarge(self.size));
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(index) = self.fleet.iter().position(|&len| len == 0) {
            return Err(ConfigError::ZeroLengthShip { index });
        }
        if let Some(&length) = self.fleet.iter().find(|&&len| len > self.size) {
            return Err(ConfigError::ShipTooLong {
                length,
                size: self.size,
            });
        }
        let cells = self.total_cells();
        if cells > self.size * self.size {
            return Err(ConfigError::FleetTooLarge {
                cells,
                size: self.size,
            });
        }
        let required = self.padded_cells();
        let side = self.size.saturating_add(1);
        let available = side.saturating_mul(side);
        if required > available {
            return Err(ConfigError::FleetTooCrowded {
                required,
                available,
                size: self.size,
            });
        }
        if self.placement_budget == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

/// Errors raised when validating a [`MatchConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("board size {0} is too large")]
    BoardTooLarge(usize),
    #[error("fleet must contain at least one ship")]
    EmptyFleet,
    #[error("ship #{index} has length 0")]
    ZeroLengthShip { index: usize },
    #[error("ship of length {length} does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
    #[error("fleet covers {cells} cells, more than a {size}x{size} board holds")]
    FleetTooLarge { cells: usize, size: usize },
    #[error("fleet needs {required} padded cells but a {size}x{size} board offers {available}")]
    FleetTooCrowded {
        required: usize,
        available: usize,
        size: usize,
    },
    #[error("placement attempt budget must be at least 1")]
    ZeroBudget,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn default_config_is_valid() {
        let config = MatchConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.total_ships(), 7);
        assert_eq!(config.total_cells(), 11);
    }

    #[test]
    fn rejects_ship_longer_than_board() {
        let config = MatchConfig {
            size: 2,
            fleet: vec![3],
            placement_budget: 10,
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::ShipTooLong { length: 3, size: 2 });
        assert_eq!(
            err.to_string(),
            "ship of length 3 does not fit on a 2x2 board"
        );
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert_eq!(
            MatchConfig::with_size(0).validate(),
            Err(ConfigError::EmptyBoard)
        );
        let empty = MatchConfig {
            fleet: vec![],
            ..MatchConfig::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyFleet));
        let zero = MatchConfig {
            fleet: vec![2, 0],
            ..MatchConfig::default()
        };
        assert_eq!(
            zero.validate(),
            Err(ConfigError::ZeroLengthShip { index: 1 })
        );
        let no_budget = MatchConfig {
            placement_budget: 0,
            ..MatchConfig::default()
        };
        assert_eq!(no_budget.validate(), Err(ConfigError::ZeroBudget));
    }

    #[test]
    fn rejects_fleet_that_cannot_keep_its_gaps() {
        // 11 cells fit in 16, but not with a free cell around every ship
        let err = MatchConfig::with_size(4).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::FleetTooCrowded {
                required: 36,
                available: 25,
                size: 4
            }
        );
        assert_eq!(
            err.to_string(),
            "fleet needs 36 padded cells but a 4x4 board offers 25"
        );
        assert_eq!(MatchConfig::with_size(5).validate(), Ok(()));
    }

    #[test]
    fn smallest_accepted_board_can_be_filled() {
        use rand::{rngs::SmallRng, SeedableRng};

        let config = MatchConfig::with_size(5);
        let mut rng = SmallRng::seed_from_u64(11);
        let board = crate::core::fleet::generate_board(&config, &mut rng);
        assert_eq!(board.ships().len(), 7);
    }

    #[test]
    fn rejects_fleet_larger_than_board() {
        let config = MatchConfig {
            size: 2,
            fleet: vec![2, 2, 1],
            placement_budget: 10,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FleetTooLarge { cells: 5, size: 2 })
        );
    }
}
