use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use log::info;

use broadside::{GameConfig, Mode, Side, Simulation, Spacing, Terminal};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = app().get_matches();

    let mode: Mode = matches.value_of("mode").unwrap_or("0").parse()?;
    let config = config_from_args(&matches)?;
    info!("starting {} with {:?}", mode, config);

    let mut simulation = Simulation::new(config)?;
    let report = simulation.run(mode, || Terminal)?;
    println!();
    println!("{}", report);
    Ok(())
}

/// The command line interface.
fn app() -> App<'static, 'static> {
    App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line battleship between people at the console and random players.")
        .arg(
            Arg::with_name("mode")
                .value_name("MODE")
                .help("0: manual vs manual, 1: manual vs random, 2: random vs random")
                .index(1)
                .possible_values(&["0", "1", "2"])
                .default_value("0"),
        )
        .arg(
            Arg::with_name("games")
                .short("n")
                .long("games")
                .value_name("N")
                .help("number of games to play")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random number generator, for reproducible games")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows on each board")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("cols")
                .long("cols")
                .value_name("COLS")
                .help("number of columns on each board, at most 26")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("LIST")
                .help("comma separated ship kinds, e.g. carrier,bb,dd,dd")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("touching")
                .long("touching")
                .help("let randomly placed ships touch each other"),
        )
        .arg(
            Arg::with_name("second")
                .long("second")
                .help("the second player fires first"),
        )
}

/// Build the game configuration from the command line.
fn config_from_args(matches: &ArgMatches) -> Result<GameConfig> {
    let mut config = GameConfig::default();
    let rows = parse_arg(matches, "rows")?.unwrap_or(config.dim.rows());
    let cols = parse_arg(matches, "cols")?.unwrap_or(config.dim.cols());
    config.dim = GameConfig::dimensions(rows, cols)?;
    if let Some(games) = parse_arg(matches, "games")? {
        config.games = games;
    }
    config.seed = parse_arg(matches, "seed")?;
    if let Some(list) = matches.value_of("fleet") {
        config.fleet = GameConfig::parse_fleet(list)?;
    }
    if matches.is_present("touching") {
        config.spacing = Spacing::Touching;
    }
    if matches.is_present("second") {
        config.first = Side::Second;
    }
    Ok(config)
}

/// Parse an optional argument, naming the argument if it is not a valid number.
fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .value_of(name)
        .map(|value| {
            value
                .parse()
                .with_context(|| format!("invalid value {:?} for --{}", value, name))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadside::ShipKind;

    fn config_for(args: &[&str]) -> Result<GameConfig> {
        let argv = std::iter::once("battleship").chain(args.iter().copied());
        config_from_args(&app().get_matches_from(argv))
    }

    #[test]
    fn defaults_match_the_library() {
        assert_eq!(config_for(&[]).unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_too_many_columns() {
        let err = config_for(&["--cols", "27"]).unwrap_err();
        assert!(err.to_string().contains("27"));
    }

    #[test]
    fn rejects_unknown_ship_kinds() {
        assert!(config_for(&["--fleet", "carrier,yacht"]).is_err());
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = config_for(&["--games", "many"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value \"many\" for --games");
    }

    #[test]
    fn maps_flags_to_config() {
        let config = config_for(&[
            "2", "--touching", "--second", "-n", "4", "-s", "7", "--rows", "6", "--cols", "8",
            "-f", "bb,dd",
        ])
        .unwrap();
        assert_eq!(config.spacing, Spacing::Touching);
        assert_eq!(config.first, Side::Second);
        assert_eq!(config.games, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.dim, GameConfig::dimensions(6, 8).unwrap());
        assert_eq!(config.fleet, vec![ShipKind::Battleship, ShipKind::Destroyer]);
    }
}
