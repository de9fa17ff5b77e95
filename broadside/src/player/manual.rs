use log::debug;
use once_cell::sync::Lazy;
use rand::RngCore;
use regex::Regex;

use crate::{
    board::{Board, ShotOutcome, View},
    coordinate::{Coordinate, Dimensions},
    fleet::FleetGenerator,
    player::{LineInput, Player, PlayerError},
    ships::{Ship, ShipKind},
};

const PLACEMENT_HELP: &str = "Placement commands:
    <start> <end>   place the ship between two cells, e.g. A1 A5, A1-A5, A1,A5 or A1 to A5.
                    A ship of length 1 only needs a single cell.
    random          place this ship and all remaining ships at random.
    help, ?         show this help.";

/// Matches a placement given as one or two cell labels.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)^
        (?P<start>[a-z]\s*[0-9]+)
        (?:\s*(?:-|,|\s|to)\s*(?P<end>[a-z]\s*[0-9]+))?
        $",
    )
    .unwrap()
});

/// Parsed placement command.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Command {
    /// Place the ship between two cell labels.
    Place(String, String),
    Random,
    Help,
}

fn parse_command(line: &str) -> Result<Command, String> {
    match line.to_ascii_lowercase().as_str() {
        "?" | "h" | "help" => return Ok(Command::Help),
        "random" | "rand" | "randomize" => return Ok(Command::Random),
        _ => {}
    }
    let captures = PLACE
        .captures(line)
        .ok_or_else(|| format!("Invalid placement {:?}. Use '?' for help.", line))?;
    let start = captures.name("start").map_or("", |m| m.as_str());
    let end = captures.name("end").map_or(start, |m| m.as_str());
    Ok(Command::Place(start.to_owned(), end.to_owned()))
}

/// A person playing at a console.
#[derive(Debug)]
pub struct ManualPlayer<I> {
    name: String,
    board: Board,
    input: I,
}

impl<I: LineInput> ManualPlayer<I> {
    /// Create a player with an empty board who reads their moves from `input`.
    pub fn new<S: Into<String>>(name: S, dim: Dimensions, input: I) -> Self {
        Self {
            name: name.into(),
            board: Board::new(dim),
            input,
        }
    }

    /// The console this player reads from.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Ask for the placement of one ship until it is valid. Returns `true` if the
    /// player asked for the rest of the fleet to be placed at random.
    fn place_one(&mut self, kind: ShipKind) -> Result<bool, PlayerError> {
        let prompt = format!("{}, place your {} ({} cells): ", self.name, kind, kind.len());
        loop {
            self.input.write_line(&self.board.render(View::Owner).to_string())?;
            let (start, end) = match self.input.read_input(&prompt, parse_command)? {
                Command::Place(start, end) => (start, end),
                Command::Random => return Ok(true),
                Command::Help => {
                    self.input.write_line(PLACEMENT_HELP)?;
                    continue;
                }
            };
            let placed = Ship::from_labels(kind, &start, &end, self.board.dimensions())
                .map_err(|err| err.to_string())
                .and_then(|ship| self.board.place_ship(ship).map_err(|err| err.to_string()));
            match placed {
                Ok(()) => return Ok(false),
                Err(msg) => self.input.write_line(&format!("Invalid placement: {}", msg))?,
            }
        }
    }
}

impl<I: LineInput> Player for ManualPlayer<I> {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn place_fleet(
        &mut self,
        generator: &FleetGenerator,
        rng: &mut dyn RngCore,
    ) -> Result<(), PlayerError> {
        let kinds = generator.kinds();
        self.input
            .write_line(&format!("{}, place your ships. Type help or ? for commands.", self.name))?;
        let mut idx = 0;
        while idx < kinds.len() {
            if !self.place_one(kinds[idx])? {
                idx += 1;
                continue;
            }
            match generator.fill(&mut self.board, &kinds[idx..], rng) {
                Ok(()) => {
                    debug!("{} placed {} ships at random", self.name, kinds.len() - idx);
                    break;
                }
                Err(err) => self
                    .input
                    .write_line(&format!("Could not place the remaining ships: {}", err))?,
            }
        }
        self.input.write_line(&self.board.render(View::Owner).to_string())?;
        Ok(())
    }

    fn select_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError> {
        self.input.write_line(&opponent.render(View::Opponent).to_string())?;
        self.input
            .write_line(&format!("It is now {}'s turn.", self.name))?;
        let dim = *opponent.dimensions();
        self.input.read_input("coordinates target = ", |line| {
            dim.parse(line).map_err(|err| err.to_string())
        })
    }

    fn receive_result(
        &mut self,
        target: Coordinate,
        outcome: ShotOutcome,
    ) -> Result<(), PlayerError> {
        let msg = match outcome {
            ShotOutcome::AlreadyShot => {
                format!("{} was already shot, the turn is lost.", target)
            }
            outcome => format!("{}: {}", target, outcome),
        };
        self.input.write_line(&msg)?;
        Ok(())
    }
}
