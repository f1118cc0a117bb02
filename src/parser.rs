use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::{Board, BoardError};
use crate::data::SIZE;

#[derive(Debug, PartialEq)]
pub enum ParserErr {
    BadDimensions,
    BadCell(usize, usize),
    InvalidBoard(BoardError),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::BadDimensions => write!(f, "Expected 3 rows of 3 cells"),
            ParserErr::BadCell(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::InvalidBoard(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a board: 3 lines of 3 cells, digits `1`-`8` plus `0` or `_` for
/// the empty slot, whitespace between cells optional.
pub(crate) fn parse(text: &str) -> Result<Board, ParserErr> {
    // trim so boards can be specified using raw strings more easily
    let lines: Vec<&str> = text.trim_matches('\n').trim_end().lines().collect();
    if lines.len() != SIZE as usize {
        return Err(ParserErr::BadDimensions);
    }

    let mut grid = [[0; 3]; 3];
    for (r, line) in lines.iter().enumerate() {
        let cells: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
        if cells.len() != SIZE as usize {
            return Err(ParserErr::BadDimensions);
        }
        for (c, &ch) in cells.iter().enumerate() {
            grid[r][c] = match ch {
                '_' => 0,
                '0'..='8' => ch as u8 - b'0',
                _ => return Err(ParserErr::BadCell(r, c)),
            };
        }
    }

    Board::new(grid).map_err(ParserErr::InvalidBoard)
}
