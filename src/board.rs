use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{Pos, DIRECTIONS, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Not a permutation of 0..=8 on a 3x3 grid.
    InvalidBoard,
    /// Internal invariant violation - e.g. no empty slot. Should be
    /// unreachable through the validated constructors.
    MalformedBoard,
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::InvalidBoard => {
                write!(f, "Board is not a 3x3 permutation of the tiles 0-8")
            }
            BoardError::MalformedBoard => write!(f, "Board has no empty slot"),
        }
    }
}

impl Error for BoardError {}

/// One puzzle configuration - a permutation of 0..=8 in row-major order,
/// 0 being the empty slot.
///
/// The array is also the canonical key for visited-set deduplication:
/// two boards with the same tiles hash and compare equal no matter
/// how they were reached.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board([u8; 9]);

impl Board {
    pub fn new(grid: [[u8; 3]; 3]) -> Result<Board, BoardError> {
        let mut cells = [0; 9];
        for r in 0..SIZE {
            for c in 0..SIZE {
                cells[Pos::new(r, c).index()] = grid[r as usize][c as usize];
            }
        }

        let mut seen = [false; 9];
        for &v in &cells {
            if v > 8 || seen[v as usize] {
                return Err(BoardError::InvalidBoard);
            }
            seen[v as usize] = true;
        }

        Ok(Board(cells))
    }

    pub fn goal() -> Board {
        Board([0, 1, 2, 3, 4, 5, 6, 7, 8])
    }

    pub fn is_goal(&self) -> bool {
        *self == Board::goal()
    }

    /// Where the goal places tile `v`.
    pub(crate) fn target_pos(v: u8) -> Pos {
        Pos::new(v as i8 / SIZE, v as i8 % SIZE)
    }

    pub fn empty_pos(&self) -> Result<Pos, BoardError> {
        for r in 0..SIZE {
            for c in 0..SIZE {
                let pos = Pos::new(r, c);
                if self[pos] == 0 {
                    return Ok(pos);
                }
            }
        }
        Err(BoardError::MalformedBoard)
    }

    /// New board with the tiles at `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: Pos, b: Pos) -> Board {
        let mut cells = self.0;
        cells.swap(a.index(), b.index());
        Board(cells)
    }

    /// Whether the goal is reachable from this board.
    ///
    /// Legal moves preserve the parity of the inversion count (the empty
    /// slot doesn't count) and the goal has zero inversions, so exactly the
    /// even-parity half of the permutations is solvable.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..self.0.len() {
            if self.0[i] == 0 {
                continue;
            }
            for j in i + 1..self.0.len() {
                if self.0[j] != 0 && self.0[j] < self.0[i] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Board reached from the goal by `moves` random legal moves.
    ///
    /// This is how a UI scrambles - it can only produce solvable boards
    /// and the solution is never longer than `moves`.
    pub fn scrambled<R: Rng>(rng: &mut R, moves: u32) -> Board {
        let mut board = Board::goal();
        let mut empty = Pos::new(0, 0);
        for _ in 0..moves {
            let targets: Vec<_> = DIRECTIONS
                .iter()
                .map(|&dir| empty + dir)
                .filter(|pos| pos.in_bounds())
                .collect();
            // every cell of a 3x3 grid has at least 2 in-bounds neighbors
            let &target = targets.choose(rng).unwrap();
            board = board.swapped(empty, target);
            empty = target;
        }
        board
    }
}

impl Index<Pos> for Board {
    type Output = u8;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if c > 0 {
                    write!(f, " ")?;
                }
                let tile = self[Pos::new(r, c)];
                if tile == 0 {
                    write!(f, "_")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn constructing_valid() {
        let board = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(board[Pos::new(0, 0)], 1);
        assert_eq!(board[Pos::new(0, 1)], 0);
        assert_eq!(board[Pos::new(2, 2)], 8);
        assert_eq!(board.empty_pos().unwrap(), Pos::new(0, 1));
    }

    #[test]
    fn constructing_duplicate() {
        let res = Board::new([[1, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(res.unwrap_err(), BoardError::InvalidBoard);
    }

    #[test]
    fn constructing_out_of_range() {
        let res = Board::new([[9, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(res.unwrap_err(), BoardError::InvalidBoard);
    }

    #[test]
    fn goal_check() {
        assert!(Board::goal().is_goal());
        // any single swap away from the goal is not the goal
        let one_off = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert!(!one_off.is_goal());
    }

    #[test]
    fn equality_is_canonical() {
        let a = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        let b = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Board::goal());
    }

    #[test]
    fn solvability() {
        assert!(Board::goal().is_solvable());
        // moving the empty slot never changes parity
        let moved = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert!(moved.is_solvable());
        // swapping two tiles (not the empty slot) flips parity
        let swapped = Board::new([[0, 2, 1], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn scrambles_are_solvable() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
        for moves in 0..50 {
            let board = Board::scrambled(&mut rng, moves);
            assert!(board.is_solvable());
            assert!(board.empty_pos().is_ok());
        }
    }

    #[test]
    fn scramble_distance_is_bounded() {
        use crate::Solve;

        // n random legal moves can only get n moves away from the goal,
        // so the optimal solution is never longer than the scramble
        let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
        for moves in 0..=12 {
            let board = Board::scrambled(&mut rng, moves);
            let path = board.solve(false).unwrap().path_boards.unwrap();
            assert!(path.len() as u32 - 1 <= moves, "scramble of {}:\n{}", moves, board);
        }
    }

    #[test]
    fn formatting() {
        let board = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        assert_eq!(board.to_string(), "1 _ 2\n3 4 5\n6 7 8\n");
    }
}
