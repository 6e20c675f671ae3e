//! Player trait and implementations
//!
//! A player chooses targets on the opponent's board and drives a single turn:
//! - AiPlayer: uniformly random targeting, no memory of earlier shots
//! - CliPlayer: reads `row col` lines from an input stream

use rand::Rng;

use crate::core::{ActorKind, Board, BoardError, Coordinate, ShotOutcome};
use crate::game::MatchObserver;

/// Interface implemented by the two kinds of combatant.
pub trait Player {
    /// The tag attached to every shot this player fires.
    fn kind(&self) -> ActorKind;

    /// Choose the next target on an opponent board of `size`×`size` cells.
    fn choose_target<R: Rng>(&mut self, rng: &mut R, size: usize) -> anyhow::Result<Coordinate>;

    /// Fire at `opponent` until a shot is accepted, reporting rejected shots to
    /// `observer` and choosing again. There is no retry cap.
    fn take_turn<R: Rng, O: MatchObserver + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Board,
        observer: &mut O,
    ) -> anyhow::Result<ShotOutcome> {
        let kind = self.kind();
        loop {
            let target = self.choose_target(rng, opponent.size())?;
            match opponent.resolve_shot(target, kind) {
                Ok(outcome) => {
                    observer.shot_resolved(kind, target, outcome, opponent);
                    return Ok(outcome);
                }
                Err(err @ (BoardError::OutOfBounds(_) | BoardError::DuplicateTarget { .. })) => {
                    if kind == ActorKind::Automated {
                        log::info!("rejected automated shot: {}", err);
                    } else {
                        log::debug!("rejected shot: {}", err);
                    }
                    observer.shot_rejected(kind, &err);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_target, CliPlayer, FormatError};
