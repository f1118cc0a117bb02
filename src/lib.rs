// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod data;
pub mod moves;
pub mod parser;
pub mod solver;
pub mod state;

mod fs;

use std::error::Error;

use crate::board::{Board, BoardError};
use crate::solver::SolverOk;

pub trait LoadBoard {
    fn load_board(&self) -> Result<Board, Box<dyn Error>>;
}

impl<T: AsRef<std::path::Path>> LoadBoard for T {
    fn load_board(&self) -> Result<Board, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        let board = text.parse::<Board>()?;
        Ok(board)
    }
}

pub trait Solve {
    fn solve(&self, print_status: bool) -> Result<SolverOk, BoardError>;
}
