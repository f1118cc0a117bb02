use std::env;
use std::process;

use clap::{App, Arg};

use eight_puzzle_solver::board::Board;
use eight_puzzle_solver::moves::Moves;
use eight_puzzle_solver::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle-solver")
        .arg(
            Arg::with_name("scramble")
                .short("s")
                .long("scramble")
                .takes_value(true)
                .value_name("MOVES")
                .help("Solve a random scramble of the given length instead of a file"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print status while searching"),
        )
        .arg(
            Arg::with_name("file")
                .required_unless("scramble")
                .conflicts_with("scramble"),
        )
        .get_matches();

    let board = if let Some(moves) = matches.value_of("scramble") {
        let moves = moves.parse().unwrap_or_else(|err| {
            println!("Invalid scramble length: {}", err);
            process::exit(1);
        });
        Board::scrambled(&mut rand::thread_rng(), moves)
    } else {
        let path = matches.value_of("file").unwrap();
        path.load_board().unwrap_or_else(|err| {
            let current_dir = env::current_dir().unwrap();
            println!(
                "Can't load board {} in {}: {}",
                path,
                current_dir.display(),
                err
            );
            process::exit(1);
        })
    };

    println!("Solving:");
    println!("{}", board);

    let solution = board.solve(matches.is_present("verbose")).unwrap();
    println!("{}", solution.stats);

    match solution.path_boards {
        Some(ref path) => {
            println!("Found solution:");
            for (moves_done, board) in path.iter().enumerate() {
                println!("Move {}:", moves_done);
                println!("{}", board);
            }
            let moves = Moves::from_path(path).unwrap();
            println!("{}", moves);
            println!("{} moves", moves.move_cnt());
        }
        None => println!("No solution"),
    }
}
