use std::collections::HashSet;

use broadside::{
    coordinate::{to_indices, to_label},
    Board, Coordinate, Dimensions, FleetGenerator, Player, RandomPlayer, Ship, ShipKind,
    ShotOutcome, Spacing,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_board(seed: u64) -> (Board, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(Dimensions::default());
    FleetGenerator::default()
        .populate(&mut board, &mut rng)
        .unwrap();
    (board, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn labels_round_trip_to_canonical_form(
        col in 0..26usize,
        row in 0..999usize,
        lower in any::<bool>(),
        zeros in 0..3usize,
        pad in 0..3usize,
    ) {
        let dim = Dimensions::new(999, 26);
        let letter = char::from(b'A' + col as u8);
        let typed_letter = if lower { letter.to_ascii_lowercase() } else { letter };
        let spaces = " ".repeat(pad);
        let label = format!(
            "{}{}{}{}{}{}",
            spaces,
            typed_letter,
            spaces,
            "0".repeat(zeros),
            row + 1,
            spaces
        );

        let coord = to_indices(&label, &dim).unwrap();
        prop_assert_eq!(coord, Coordinate::new(row, col));
        prop_assert_eq!(to_label(coord), format!("{}{}", letter, row + 1));
        prop_assert_eq!(to_indices(&to_label(coord), &dim), Ok(coord));
    }

    #[test]
    fn repeat_shot_changes_nothing(seed in any::<u64>(), row in 0..10usize, col in 0..10usize) {
        let (mut board, _) = random_board(seed);
        let target = Coordinate::new(row, col);
        let first = board.receive_shot(target).unwrap();
        prop_assert_ne!(first, ShotOutcome::AlreadyShot);

        let ships: Vec<Ship> = board.ships().to_vec();
        let shots: Vec<Coordinate> = board.shots().to_vec();
        prop_assert_eq!(board.receive_shot(target), Ok(ShotOutcome::AlreadyShot));
        prop_assert_eq!(board.ships(), &ships[..]);
        prop_assert_eq!(board.shots(), &shots[..]);
    }

    #[test]
    fn all_sunk_iff_every_ship_cell_is_shot(seed in any::<u64>(), shots in 0..100usize) {
        let (mut board, mut rng) = random_board(seed);
        for _ in 0..shots {
            let target = Coordinate::new(rng.gen_range(0, 10), rng.gen_range(0, 10));
            board.receive_shot(target).unwrap();
        }
        let every_cell_shot = board
            .ships()
            .iter()
            .flat_map(|ship| ship.coords())
            .all(|coord| board.is_shot(coord));
        prop_assert_eq!(board.all_sunk(), every_cell_shot);
        prop_assert_eq!(board.all_sunk(), board.ships().iter().all(Ship::is_sunk));
        prop_assert_eq!(board.all_sunk(), board.remaining_ships() == 0);
    }

    #[test]
    fn fleet_never_overlaps(seed in any::<u64>(), apart in any::<bool>()) {
        let spacing = if apart { Spacing::Apart } else { Spacing::Touching };
        let mut rng = StdRng::seed_from_u64(seed);
        let generator = FleetGenerator::new(ShipKind::ALL, spacing);
        let dim = Dimensions::default();
        let ships = generator.generate(&dim, &mut rng).unwrap();

        let mut cells = HashSet::new();
        for ship in &ships {
            for coord in ship.coords() {
                prop_assert!(dim.contains(coord));
                prop_assert!(cells.insert(*coord), "{} is used twice", coord);
            }
        }
        if apart {
            for (i, a) in ships.iter().enumerate() {
                for b in &ships[i + 1..] {
                    prop_assert!(!a.is_near(b));
                }
            }
        }
        let mut board = Board::new(dim);
        prop_assert!(board.place_ships(ships).is_ok());
    }

    #[test]
    fn random_player_covers_the_board_once(seed in any::<u64>(), rows in 1..6usize, cols in 1..6usize) {
        let dim = Dimensions::new(rows, cols);
        let opponent = Board::new(dim);
        let mut player = RandomPlayer::new("Player 1", dim, StdRng::seed_from_u64(seed));
        let mut seen = HashSet::new();
        for _ in 0..dim.total_size() {
            let target = player.select_target(&opponent).unwrap();
            prop_assert!(seen.insert(target));
        }
        prop_assert!(player.select_target(&opponent).is_err());
    }
}
