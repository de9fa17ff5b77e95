//! Runs a series of games and tallies the results.

use std::fmt;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{ConfigError, GameConfig, Mode},
    game::{Game, GameOutcome, Side},
    player::{LineInput, ManualPlayer, Player, RandomPlayer},
    Error,
};

/// Hands out player names in the order players are created.
#[derive(Debug, Default, Clone)]
pub struct PlayerNames {
    count: usize,
}

impl PlayerNames {
    /// The name of the next player, starting from `"Player 1"`.
    pub fn next_name(&mut self) -> String {
        self.count += 1;
        format!("Player {}", self.count)
    }
}

/// Receives the result of each game as it finishes.
pub trait Reporter {
    /// Called once per game, `number` counts from 1.
    fn game_over(&mut self, number: usize, outcome: &GameOutcome);
}

/// Prints the winner of each game to stdout.
#[derive(Debug, Default, Copy, Clone)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn game_over(&mut self, number: usize, outcome: &GameOutcome) {
        println!(
            "Game {}: {} wins after {} shots.",
            number,
            outcome.winner_name,
            outcome.shots[outcome.winner.index()]
        );
    }
}

impl<F: FnMut(usize, &GameOutcome)> Reporter for F {
    fn game_over(&mut self, number: usize, outcome: &GameOutcome) {
        self(number, outcome)
    }
}

/// Aggregated results of a simulation.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SimulationReport {
    /// Names of the players in each seat.
    names: [String; 2],
    /// Games won by each side.
    wins: [usize; 2],
    /// Shots fired by both sides in each game, in the order the games were played.
    shots_per_game: Vec<usize>,
}

impl SimulationReport {
    fn new(names: [String; 2]) -> Self {
        Self {
            names,
            ..Default::default()
        }
    }

    fn record(&mut self, outcome: &GameOutcome) {
        self.wins[outcome.winner.index()] += 1;
        self.shots_per_game.push(outcome.shots.iter().sum());
    }

    /// Number of games played.
    pub fn games_played(&self) -> usize {
        self.shots_per_game.len()
    }

    /// Number of games won by the given side.
    pub fn wins(&self, side: Side) -> usize {
        self.wins[side.index()]
    }

    /// Name of the player in the given seat.
    pub fn name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    /// Shots fired by both sides in each game.
    pub fn shots_per_game(&self) -> &[usize] {
        &self.shots_per_game
    }

    /// Shots fired across all games.
    pub fn total_shots(&self) -> usize {
        self.shots_per_game.iter().sum()
    }

    /// Mean number of shots per game, `None` before any game is played.
    pub fn average_shots(&self) -> Option<f64> {
        if self.shots_per_game.is_empty() {
            None
        } else {
            Some(self.total_shots() as f64 / self.games_played() as f64)
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Games played: {}", self.games_played())?;
        for &side in &Side::BOTH {
            writeln!(f, "{} wins: {}", self.name(side), self.wins(side))?;
        }
        writeln!(f, "Total shots: {}", self.total_shots())?;
        match self.average_shots() {
            Some(avg) => write!(f, "Average shots per game: {:.1}", avg),
            None => write!(f, "Average shots per game: -"),
        }
    }
}

/// Plays a series of games with fresh boards and fleets for every game.
pub struct Simulation<Rep = ConsoleReporter> {
    config: GameConfig,
    rng: StdRng,
    names: [String; 2],
    report: SimulationReport,
    reporter: Rep,
}

impl Simulation {
    /// Create a simulation that prints each winner to stdout.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_reporter(config, ConsoleReporter)
    }
}

impl<Rep: Reporter> Simulation<Rep> {
    /// Create a simulation that sends each game result to `reporter`.
    pub fn with_reporter(config: GameConfig, reporter: Rep) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut counter = PlayerNames::default();
        let names = [counter.next_name(), counter.next_name()];
        Ok(Self {
            config,
            rng,
            report: SimulationReport::new(names.clone()),
            names,
            reporter,
        })
    }

    /// Results gathered so far.
    pub fn report(&self) -> &SimulationReport {
        &self.report
    }

    /// Play every configured game. Manual players read from consoles created by
    /// `input`, which is called once per manual player per game.
    pub fn run<I, F>(&mut self, mode: Mode, mut input: F) -> Result<SimulationReport, Error>
    where
        I: LineInput + 'static,
        F: FnMut() -> I,
    {
        info!(
            "playing {} {} game(s) on a {} board",
            self.config.games, mode, self.config.dim
        );
        for _ in 0..self.config.games {
            self.play_one(mode, &mut input)?;
        }
        Ok(self.report.clone())
    }

    /// Set up and play a single game, recording its outcome.
    pub fn play_one<I, F>(&mut self, mode: Mode, input: &mut F) -> Result<GameOutcome, Error>
    where
        I: LineInput + 'static,
        F: FnMut() -> I,
    {
        let (first_manual, second_manual) = match mode {
            Mode::ManualVsManual => (true, true),
            Mode::ManualVsRandom => (true, false),
            Mode::RandomVsRandom => (false, false),
        };
        let first = self.seat(Side::First, first_manual, input)?;
        let second = self.seat(Side::Second, second_manual, input)?;

        let mut game = Game::new(first, second, self.config.first)?;
        let outcome = game.run()?;
        self.report.record(&outcome);
        self.reporter
            .game_over(self.report.games_played(), &outcome);
        Ok(outcome)
    }

    /// Create the player for one seat and let them place their fleet.
    fn seat<I, F>(
        &mut self,
        side: Side,
        manual: bool,
        input: &mut F,
    ) -> Result<Box<dyn Player>, Error>
    where
        I: LineInput + 'static,
        F: FnMut() -> I,
    {
        let name = self.names[side.index()].clone();
        let mut player: Box<dyn Player> = if manual {
            Box::new(ManualPlayer::new(name, self.config.dim, input()))
        } else {
            let rng = StdRng::seed_from_u64(self.rng.gen());
            Box::new(RandomPlayer::new(name, self.config.dim, rng))
        };
        player.place_fleet(&self.config.fleet_generator(), &mut self.rng)?;
        Ok(player)
    }
}

impl<Rep> fmt::Debug for Simulation<Rep> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("names", &self.names)
            .field("report", &self.report)
            .finish()
    }
}
