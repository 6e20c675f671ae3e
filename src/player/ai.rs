use rand::Rng;

use crate::core::{random_coordinate, ActorKind, Coordinate};

use super::Player;

/// Automated opponent firing at uniformly random cells.
///
/// It keeps no history: repeats are caught by the board and the player simply
/// chooses again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn kind(&self) -> ActorKind {
        ActorKind::Automated
    }

    fn choose_target<R: Rng>(&mut self, rng: &mut R, size: usize) -> anyhow::Result<Coordinate> {
        Ok(random_coordinate(size, rng))
    }
}
