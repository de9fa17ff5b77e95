//! Implementation of the classic game Battleship as a two-player simulation.
//!
//! The crate is layered leaf-first:
//!
//! - [`coordinate`]: board [`Dimensions`] and conversion between `"B4"`-style labels
//!   and [`Coordinate`]s.
//! - [`config`]: [`GameConfig`] and the game [`Mode`].
//! - [`ships`]: [`Ship`]s, their kinds and their hit tracking.
//! - [`board`]: a single player's [`Board`], which places ships and resolves shots.
//! - [`fleet`]: random placement of a whole fleet.
//! - [`player`]: the [`Player`] trait and its manual and random implementations.
//! - [`game`]: the two-player turn state machine.
//! - [`simulation`]: runs one or more games and aggregates the results.

use thiserror::Error;

pub use crate::{
    board::{Board, CellView, Rendering, ShotOutcome, View},
    config::{GameConfig, Mode},
    coordinate::{Coordinate, Dimensions},
    fleet::{FleetGenerator, Spacing},
    game::{Game, GameOutcome, GameState, Side, TurnReport},
    player::{LineInput, ManualPlayer, Player, RandomPlayer, Scripted, Terminal},
    ships::{Ship, ShipKind},
    simulation::{ConsoleReporter, Reporter, Simulation, SimulationReport},
};

pub mod board;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod game;
pub mod player;
pub mod ships;
pub mod simulation;

/// Any error that can escape from a simulation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Fleet(#[from] fleet::FleetError),
    #[error(transparent)]
    Player(#[from] player::PlayerError),
    #[error(transparent)]
    Game(#[from] game::GameError),
}
