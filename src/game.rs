//! Match orchestration: setup, the turn loop and win detection.

use core::fmt;

use rand::Rng;

use crate::core::{
    generate_board, ActorKind, Board, BoardError, ConfigError, Coordinate, MatchConfig,
    ShotOutcome,
};
use crate::player::Player;

/// The two seats at the table. The human seat may be driven by any [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => f.pad("human"),
            Side::Automated => f.pad("automated"),
        }
    }
}

/// State of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum MatchState {
    HumanTurn,
    AutomatedTurn,
    HumanWins,
    AutomatedWins,
}

impl MatchState {
    /// The side to move, or `None` once the match is over.
    pub fn to_move(self) -> Option<Side> {
        match self {
            MatchState::HumanTurn => Some(Side::Human),
            MatchState::AutomatedTurn => Some(Side::Automated),
            MatchState::HumanWins | MatchState::AutomatedWins => None,
        }
    }

    /// The winning side, or `None` while the match is running.
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchState::HumanWins => Some(Side::Human),
            MatchState::AutomatedWins => Some(Side::Automated),
            MatchState::HumanTurn | MatchState::AutomatedTurn => None,
        }
    }

    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }

    fn turn_of(side: Side) -> Self {
        match side {
            Side::Human => MatchState::HumanTurn,
            Side::Automated => MatchState::AutomatedTurn,
        }
    }
}

/// Counters kept while a match runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchStats {
    /// Completed turns, extra turns included.
    pub turns: usize,
    /// Accepted shots fired from the human seat.
    pub human_shots: usize,
    /// Accepted shots fired from the automated seat.
    pub automated_shots: usize,
    /// Shots rejected as out of bounds or duplicate, either seat.
    pub rejected_shots: usize,
}

/// Hook for presentation: rendering, messages and pacing. Every method defaults
/// to doing nothing.
pub trait MatchObserver {
    /// `side` is about to take a turn.
    fn turn_started(&mut self, _side: Side, _human_board: &Board, _automated_board: &Board) {}

    /// A shot by an actor of kind `actor` was accepted by `board`.
    fn shot_resolved(
        &mut self,
        _actor: ActorKind,
        _target: Coordinate,
        _outcome: ShotOutcome,
        _board: &Board,
    ) {
    }

    /// A shot was rejected and the actor will choose again.
    fn shot_rejected(&mut self, _actor: ActorKind, _err: &BoardError) {}

    /// The match ended.
    fn match_over(&mut self, _winner: Side, _human_board: &Board, _automated_board: &Board) {}
}

impl MatchObserver for () {}

/// Forwards to the wrapped observer while counting rejected shots.
struct Counting<'a, O: ?Sized> {
    inner: &'a mut O,
    rejected: usize,
}

impl<O: MatchObserver + ?Sized> MatchObserver for Counting<'_, O> {
    fn turn_started(&mut self, side: Side, human_board: &Board, automated_board: &Board) {
        self.inner.turn_started(side, human_board, automated_board);
    }

    fn shot_resolved(
        &mut self,
        actor: ActorKind,
        target: Coordinate,
        outcome: ShotOutcome,
        board: &Board,
    ) {
        self.inner.shot_resolved(actor, target, outcome, board);
    }

    fn shot_rejected(&mut self, actor: ActorKind, err: &BoardError) {
        self.rejected += 1;
        self.inner.shot_rejected(actor, err);
    }

    fn match_over(&mut self, winner: Side, human_board: &Board, automated_board: &Board) {
        self.inner.match_over(winner, human_board, automated_board);
    }
}

/// A match between a player in the human seat and one in the automated seat.
pub struct Match<H, A> {
    human: H,
    automated: A,
    /// The human seat's own board; the automated seat fires at it.
    human_board: Board,
    /// The automated seat's own board, hidden from rendering.
    automated_board: Board,
    state: MatchState,
    stats: MatchStats,
}

impl<H: Player, A: Player> Match<H, A> {
    /// Validate `config`, generate both fleets and seat the players. The human
    /// seat moves first.
    pub fn setup<R: Rng>(
        config: &MatchConfig,
        human: H,
        automated: A,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let human_board = generate_board(config, rng);
        let automated_board = generate_board(config, rng);
        log::info!(
            "match set up on a {0}x{0} board with {1} ships per side",
            config.size,
            config.total_ships()
        );
        Ok(Self::from_boards(human, automated, human_board, automated_board))
    }

    /// Seat the players on prepared boards. The automated board is hidden.
    pub fn from_boards(
        human: H,
        automated: A,
        human_board: Board,
        mut automated_board: Board,
    ) -> Self {
        automated_board.set_hidden(true);
        Self {
            human,
            automated,
            human_board,
            automated_board,
            state: MatchState::HumanTurn,
            stats: MatchStats::default(),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    pub fn human_board(&self) -> &Board {
        &self.human_board
    }

    pub fn automated_board(&self) -> &Board {
        &self.automated_board
    }

    pub fn human(&self) -> &H {
        &self.human
    }

    pub fn automated(&self) -> &A {
        &self.automated
    }

    /// Play one turn of the side to move and advance the state. A finished match
    /// is left unchanged.
    pub fn step<R: Rng, O: MatchObserver + ?Sized>(
        &mut self,
        rng: &mut R,
        observer: &mut O,
    ) -> anyhow::Result<MatchState> {
        let Some(side) = self.state.to_move() else {
            return Ok(self.state);
        };
        observer.turn_started(side, &self.human_board, &self.automated_board);

        let mut counting = Counting {
            inner: &mut *observer,
            rejected: 0,
        };
        let result = match side {
            Side::Human => self
                .human
                .take_turn(rng, &mut self.automated_board, &mut counting),
            Side::Automated => self
                .automated
                .take_turn(rng, &mut self.human_board, &mut counting),
        };
        self.stats.rejected_shots += counting.rejected;
        let outcome = result?;
        match side {
            Side::Human => self.stats.human_shots += 1,
            Side::Automated => self.stats.automated_shots += 1,
        }
        self.stats.turns += 1;

        self.state = if self.automated_board.is_destroyed() {
            MatchState::HumanWins
        } else if self.human_board.is_destroyed() {
            MatchState::AutomatedWins
        } else if outcome.grants_extra_turn() {
            MatchState::turn_of(side)
        } else {
            MatchState::turn_of(side.opponent())
        };

        if let Some(winner) = self.state.winner() {
            log::info!("{} side wins after {} turns", winner, self.stats.turns);
            observer.match_over(winner, &self.human_board, &self.automated_board);
        }
        Ok(self.state)
    }

    /// Step until one fleet is destroyed and return the winning side.
    pub fn run<R: Rng, O: MatchObserver + ?Sized>(
        &mut self,
        rng: &mut R,
        observer: &mut O,
    ) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.step(rng, observer)?.winner() {
                return Ok(winner);
            }
        }
    }
}
