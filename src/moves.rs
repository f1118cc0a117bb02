use std::fmt::{self, Debug, Display, Formatter};

use crate::board::{Board, BoardError};
use crate::data::Dir;

/// The moves a solution path implies - each one is the direction the empty
/// slot travels (equivalently, the opposite of the slid tile's direction).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    /// Derives the move sequence from consecutive boards. Fails with
    /// `MalformedBoard` if two neighbors don't differ by exactly one
    /// adjacent swap with the empty slot.
    pub fn from_path(path: &[Board]) -> Result<Moves, BoardError> {
        let mut moves = Vec::new();
        for pair in path.windows(2) {
            moves.push(Self::step(pair[0], pair[1])?);
        }
        Ok(Moves(moves))
    }

    fn step(from: Board, to: Board) -> Result<Dir, BoardError> {
        let from_empty = from.empty_pos()?;
        let to_empty = to.empty_pos()?;
        if from.swapped(from_empty, to_empty) != to {
            return Err(BoardError::MalformedBoard);
        }
        let dir = match (to_empty.r - from_empty.r, to_empty.c - from_empty.c) {
            (-1, 0) => Dir::Up,
            (1, 0) => Dir::Down,
            (0, -1) => Dir::Left,
            (0, 1) => Dir::Right,
            _ => return Err(BoardError::MalformedBoard),
        };
        Ok(dir)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl IntoIterator for Moves {
    type Item = Dir;
    type IntoIter = std::vec::IntoIter<Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
