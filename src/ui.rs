#![cfg(feature = "std")]

//! Console presentation: board rendering, match messages and pacing delays.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::core::{ActorKind, Board, BoardError, Cell, Coordinate, ShotOutcome};
use crate::game::{MatchObserver, Side};

/// Gap between the two boards when shown side by side.
const BOARD_GAP: &str = "     |     ";

/// Render a board as a text grid with 1-indexed row and column labels.
///
/// Ship cells of a hidden board are drawn as open water until they are hit.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   |");
    for c in 1..=board.size() {
        let _ = write!(out, " {:>2} |", c);
    }
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "\n{:>2} |", r + 1);
        for &cell in row {
            let _ = write!(out, " {:>2} |", cell_symbol(cell, board.is_hidden()));
        }
    }
    out
}

fn cell_symbol(cell: Cell, hidden: bool) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Occupied if hidden => 'O',
        Cell::Occupied => '■',
        Cell::Hit => 'X',
        Cell::Miss | Cell::Blocked => '.',
    }
}

/// Render two boards next to each other, line by line.
pub fn render_side_by_side(left: &Board, right: &Board) -> String {
    let left = render_board(left);
    let right = render_board(right);
    let width = left.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    left.lines()
        .zip(right.lines())
        .map(|(l, r)| format!("{:<width$}{}{}", l, BOARD_GAP, r, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Introductory text shown before the first turn.
pub fn greeting() -> String {
    [
        "===================",
        "    Welcome to     ",
        "    Sea Battle     ",
        "===================",
        " input format: x y ",
        " x - row number    ",
        " y - column number ",
        "===================",
    ]
    .join("\n")
}

/// Presentation delays. These never change the outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// After the human's shot.
    pub after_human_shot: Duration,
    /// Before the automated side announces its move.
    pub before_automated: Duration,
    /// While the automated side "thinks".
    pub automated_thinking: Duration,
    /// Penalty when the automated side fires at a cell twice.
    pub duplicate_penalty: Duration,
    /// Between turns.
    pub between_turns: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            after_human_shot: Duration::from_secs(1),
            before_automated: Duration::from_millis(1500),
            automated_thinking: Duration::from_secs(2),
            duplicate_penalty: Duration::from_secs(1),
            between_turns: Duration::from_secs(3),
        }
    }
}

impl Pacing {
    /// No delays at all.
    pub fn none() -> Self {
        Self {
            after_human_shot: Duration::ZERO,
            before_automated: Duration::ZERO,
            automated_thinking: Duration::ZERO,
            duplicate_penalty: Duration::ZERO,
            between_turns: Duration::ZERO,
        }
    }

    fn pause(d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// [`MatchObserver`] printing the match to a terminal.
pub struct ConsoleObserver<W> {
    out: W,
    pacing: Pacing,
    turns_seen: usize,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout(pacing: Pacing) -> Self {
        Self::new(io::stdout(), pacing)
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, pacing: Pacing) -> Self {
        Self {
            out,
            pacing,
            turns_seen: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{}", msg);
        let _ = self.out.flush();
    }
}

/// Message for an accepted shot, from the human's point of view.
pub fn outcome_message(actor: ActorKind, outcome: ShotOutcome) -> &'static str {
    match (actor, outcome) {
        (ActorKind::Human, ShotOutcome::Sunk) => "You destroyed an enemy ship!",
        (ActorKind::Human, ShotOutcome::Hit) => "Well done, you hit an enemy ship!",
        (ActorKind::Human, ShotOutcome::Miss) => "You missed!",
        (ActorKind::Automated, ShotOutcome::Sunk) => "Oh no, the enemy destroyed your ship!",
        (ActorKind::Automated, ShotOutcome::Hit) => "Our ship is under fire!",
        (ActorKind::Automated, ShotOutcome::Miss) => "The enemy missed!",
    }
}

/// Message for a rejected shot.
pub fn rejection_message(err: &BoardError) -> &'static str {
    match err {
        BoardError::OutOfBounds(_) => "You can't shoot outside the board!",
        BoardError::DuplicateTarget {
            actor: ActorKind::Human,
            ..
        } => "You already fired at that cell.",
        BoardError::DuplicateTarget {
            actor: ActorKind::Automated,
            ..
        } => "The enemy tried to cheat! Fire again, scoundrel!",
        BoardError::InvalidPlacement { .. } | BoardError::InvalidState => {
            "That shot could not be resolved."
        }
    }
}

fn one_indexed(coord: Coordinate) -> String {
    format!("{} {}", i64::from(coord.row) + 1, i64::from(coord.col) + 1)
}

impl<W: Write> MatchObserver for ConsoleObserver<W> {
    fn turn_started(&mut self, side: Side, human_board: &Board, automated_board: &Board) {
        if self.turns_seen > 0 {
            Pacing::pause(self.pacing.between_turns);
        }
        self.turns_seen += 1;
        self.say("\nYour board:                    Enemy board:");
        let boards = render_side_by_side(human_board, automated_board);
        self.say(&boards);
        match side {
            Side::Human => self.say("\nYour move!"),
            Side::Automated => {
                self.say("\nThe enemy moves!");
                Pacing::pause(self.pacing.before_automated);
                self.say("The enemy is thinking...");
                Pacing::pause(self.pacing.automated_thinking);
            }
        }
    }

    fn shot_resolved(
        &mut self,
        actor: ActorKind,
        target: Coordinate,
        outcome: ShotOutcome,
        _board: &Board,
    ) {
        if actor == ActorKind::Automated {
            let msg = format!("Enemy move: {}", one_indexed(target));
            self.say(&msg);
        }
        self.say(outcome_message(actor, outcome));
        if actor == ActorKind::Human {
            Pacing::pause(self.pacing.after_human_shot);
        }
    }

    fn shot_rejected(&mut self, actor: ActorKind, err: &BoardError) {
        if actor == ActorKind::Automated {
            Pacing::pause(self.pacing.duplicate_penalty);
        }
        self.say(rejection_message(err));
    }

    fn match_over(&mut self, winner: Side, human_board: &Board, automated_board: &Board) {
        let boards = render_side_by_side(human_board, automated_board);
        self.say(&boards);
        self.say("====================");
        match winner {
            Side::Human => self.say("The last enemy ship has fallen! A brilliant victory!"),
            Side::Automated => self.say("You lost, the enemy destroyed all of your ships!"),
        }
    }
}
