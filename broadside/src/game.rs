//! Turn handling for a two player game.

use std::fmt;

use log::{debug, info};

use crate::{board::ShotOutcome, coordinate::Coordinate, player::Player};

pub use self::errors::GameError;

mod errors;

/// Seat of a player at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides, in seating order.
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];

    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Index of this side in per-side arrays.
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::First => "first",
            Side::Second => "second",
        })
    }
}

/// Current status of a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameState {
    /// Waiting for the given side to fire.
    AwaitingShot(Side),
    /// The given side sank every enemy ship.
    GameOver(Side),
}

/// What happened during a single turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TurnReport {
    /// Side that fired.
    pub side: Side,
    /// Cell that was fired at.
    pub target: Coordinate,
    /// Result of the shot.
    pub outcome: ShotOutcome,
    /// State of the game after the turn.
    pub state: GameState,
}

/// Summary of a finished game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameOutcome {
    pub winner: Side,
    pub winner_name: String,
    /// Shots fired by each side, indexed by [`Side::index`].
    pub shots: [usize; 2],
    /// Turns played by both sides together.
    pub turns: usize,
}

/// A game between two players whose fleets are already placed.
pub struct Game {
    /// Players indexed by [`Side::index`].
    players: [Box<dyn Player>; 2],
    state: GameState,
    shots: [usize; 2],
    turns: usize,
}

impl Game {
    /// Start a game in which `starting` fires first. Fails if either player has no
    /// ships.
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        starting: Side,
    ) -> Result<Self, GameError> {
        let players = [first, second];
        for &side in &Side::BOTH {
            if players[side.index()].board().ships().is_empty() {
                return Err(GameError::EmptyFleet(side));
            }
        }
        Ok(Self {
            players,
            state: GameState::AwaitingShot(starting),
            shots: [0; 2],
            turns: 0,
        })
    }

    /// Current state of the game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::GameOver(side) => Some(side),
            GameState::AwaitingShot(_) => None,
        }
    }

    /// Get the player sitting on the given side.
    pub fn player(&self, side: Side) -> &dyn Player {
        &*self.players[side.index()]
    }

    /// Shots fired so far by each side.
    pub fn shots(&self) -> [usize; 2] {
        self.shots
    }

    /// Number of turns played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Let the side whose turn it is fire one shot.
    ///
    /// Firing at a cell that was already shot wastes the turn. The game ends as soon
    /// as the opponent has no ships left afloat.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        let side = match self.state {
            GameState::AwaitingShot(side) => side,
            GameState::GameOver(_) => return Err(GameError::AlreadyOver),
        };
        let [first, second] = &mut self.players;
        let (shooter, defender) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let target = shooter.select_target(defender.board())?;
        let outcome = defender.board_mut().receive_shot(target)?;
        self.shots[side.index()] += 1;
        self.turns += 1;
        shooter.receive_result(target, outcome)?;
        debug!(
            "turn {}: {} fired at {}: {}",
            self.turns,
            shooter.name(),
            target,
            outcome
        );
        if outcome.is_sunk() {
            if let Some(kind) = outcome.ship() {
                info!("{} sank {}'s {}", shooter.name(), defender.name(), kind);
            }
        }

        self.state = if defender.has_lost() {
            info!(
                "{} wins after {} shots",
                shooter.name(),
                self.shots[side.index()]
            );
            GameState::GameOver(side)
        } else {
            GameState::AwaitingShot(side.opponent())
        };
        Ok(TurnReport {
            side,
            target,
            outcome,
            state: self.state,
        })
    }

    /// Play turns until one side wins.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        while let GameState::AwaitingShot(_) = self.state {
            self.play_turn()?;
        }
        self.outcome().ok_or(GameError::AlreadyOver)
    }

    /// Summary of the game, once it is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.winner().map(|winner| GameOutcome {
            winner,
            winner_name: self.player(winner).name().to_owned(),
            shots: self.shots,
            turns: self.turns,
        })
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Game")
            .field("first", &self.players[0].name())
            .field("second", &self.players[1].name())
            .field("state", &self.state)
            .field("shots", &self.shots)
            .field("turns", &self.turns)
            .finish()
    }
}
