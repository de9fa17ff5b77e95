//! Settings for a simulation run.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    coordinate::Dimensions,
    fleet::{FleetGenerator, Spacing},
    game::Side,
    ships::{ShipKind, UnknownShipKind},
};

/// Which kinds of player sit at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    /// Two people at the same console.
    ManualVsManual,
    /// A person against the random player.
    ManualVsRandom,
    /// Two random players.
    RandomVsRandom,
}

impl FromStr for Mode {
    type Err = ConfigError;

    /// Parses the numeric mode selector used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Mode::ManualVsManual),
            "1" => Ok(Mode::ManualVsRandom),
            "2" => Ok(Mode::RandomVsRandom),
            other => Err(ConfigError::UnknownMode(other.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Mode::ManualVsManual => "manual vs manual",
            Mode::ManualVsRandom => "manual vs random",
            Mode::RandomVsRandom => "random vs random",
        })
    }
}

/// Reasons a configuration cannot be used.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    #[error("unknown mode {0:?}, expected 0 (manual vs manual), 1 (manual vs random) or 2 (random vs random)")]
    UnknownMode(String),
    #[error("a board must have at least one row and between 1 and 26 columns, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("the fleet must contain at least one ship")]
    EmptyFleet,
    #[error(transparent)]
    UnknownShip(#[from] UnknownShipKind),
    #[error("a {kind} does not fit on a {dim} board")]
    ShipTooLong { kind: ShipKind, dim: Dimensions },
    #[error("the fleet needs {needed} cells but a {dim} board only has {available}")]
    FleetTooLarge {
        needed: usize,
        available: usize,
        dim: Dimensions,
    },
    #[error("at least one game must be played")]
    NoGames,
}

/// Settings for a simulation run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Dimensions of every board.
    pub dim: Dimensions,
    /// Kinds of ship each player gets, one entry per ship.
    pub fleet: Vec<ShipKind>,
    /// Whether randomly placed ships may touch.
    pub spacing: Spacing,
    /// Number of games to play.
    pub games: usize,
    /// Seed for the random number generator. Uses entropy when `None`.
    pub seed: Option<u64>,
    /// Which side fires first in every game.
    pub first: Side,
}

impl GameConfig {
    /// Build the dimensions from raw row and column counts.
    pub fn dimensions(rows: usize, cols: usize) -> Result<Dimensions, ConfigError> {
        Dimensions::try_new(rows, cols).ok_or(ConfigError::InvalidDimensions { rows, cols })
    }

    /// Parse a comma separated list of ship kinds, such as `"carrier,bb,dd,dd"`.
    pub fn parse_fleet(list: &str) -> Result<Vec<ShipKind>, ConfigError> {
        let fleet = list
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ShipKind>, _>>()?;
        if fleet.is_empty() {
            Err(ConfigError::EmptyFleet)
        } else {
            Ok(fleet)
        }
    }

    /// Check that the fleet can be laid out on the board and that there is work to do.
    /// This doesn't guarantee that a spaced-out layout exists, only that the ships fit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        let longest = self.dim.rows().max(self.dim.cols());
        if let Some(&kind) = self.fleet.iter().find(|kind| kind.len() > longest) {
            return Err(ConfigError::ShipTooLong {
                kind,
                dim: self.dim,
            });
        }
        let needed: usize = self.fleet.iter().map(|kind| kind.len()).sum();
        if needed > self.dim.total_size() {
            return Err(ConfigError::FleetTooLarge {
                needed,
                available: self.dim.total_size(),
                dim: self.dim,
            });
        }
        Ok(())
    }

    /// The fleet generator described by this configuration.
    pub fn fleet_generator(&self) -> FleetGenerator {
        FleetGenerator::new(self.fleet.clone(), self.spacing)
    }
}

impl Default for GameConfig {
    /// One game on a 10x10 board with the classic fleet placed apart.
    fn default() -> Self {
        Self {
            dim: Dimensions::default(),
            fleet: ShipKind::CLASSIC_FLEET.to_vec(),
            spacing: Spacing::default(),
            games: 1,
            seed: None,
            first: Side::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn parses_modes() {
        assert_eq!("0".parse(), Ok(Mode::ManualVsManual));
        assert_eq!("1".parse(), Ok(Mode::ManualVsRandom));
        assert_eq!(" 2 ".parse(), Ok(Mode::RandomVsRandom));
        assert_eq!(
            "3".parse::<Mode>(),
            Err(ConfigError::UnknownMode("3".to_owned()))
        );
    }

    #[test]
    fn parses_fleet_lists() {
        assert_eq!(
            GameConfig::parse_fleet("carrier, dd,DD"),
            Ok(vec![ShipKind::Carrier, ShipKind::Destroyer, ShipKind::Destroyer])
        );
        assert_eq!(GameConfig::parse_fleet(" , "), Err(ConfigError::EmptyFleet));
        assert!(matches!(
            GameConfig::parse_fleet("carrier,yacht"),
            Err(ConfigError::UnknownShip(_))
        ));
    }

    #[test]
    fn rejects_fleets_that_cannot_fit() {
        let mut config = GameConfig::default();
        config.dim = Dimensions::new(4, 4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ShipTooLong {
                kind: ShipKind::Carrier,
                ..
            })
        ));

        config.fleet = vec![ShipKind::Battleship; 5];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FleetTooLarge { needed: 20, .. })
        ));

        config.fleet = vec![ShipKind::Destroyer];
        config.games = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoGames));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            GameConfig::dimensions(3, 0),
            Err(ConfigError::InvalidDimensions { rows: 3, cols: 0 })
        );
        assert_eq!(GameConfig::dimensions(3, 8), Ok(Dimensions::new(3, 8)));
    }
}
