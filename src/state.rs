use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::board::{Board, BoardError};
use crate::data::{Pos, DIRECTIONS};

/// A board plus everything the search needs to track about how it was
/// reached. Identity is the board alone - `dist` and `prev` stay out of
/// equality and hashing so independently reached copies of a configuration
/// collide in the visited set.
#[derive(Debug, Clone)]
pub struct State {
    pub board: Board,
    /// Number of moves from the initial board (path cost g).
    pub dist: u32,
    /// Predecessor chain for path reconstruction - always acyclic because
    /// successors are freshly allocated from their parent.
    pub prev: Option<Rc<State>>,
    /// Cached at construction to avoid re-scanning the board.
    pub empty_pos: Pos,
}

impl State {
    pub fn initial(board: Board) -> Result<State, BoardError> {
        let empty_pos = board.empty_pos()?;
        Ok(State {
            board,
            dist: 0,
            prev: None,
            empty_pos,
        })
    }

    pub fn is_goal(&self) -> bool {
        self.board.is_goal()
    }

    /// Up to 4 new states, one per in-bounds direction of the empty slot,
    /// in the fixed up/down/left/right order.
    pub fn successors(parent: &Rc<State>) -> Vec<State> {
        let mut new_states = Vec::with_capacity(4);

        for &dir in &DIRECTIONS {
            let target = parent.empty_pos + dir;
            if !target.in_bounds() {
                continue;
            }
            new_states.push(State {
                board: parent.board.swapped(parent.empty_pos, target),
                dist: parent.dist + 1,
                prev: Some(Rc::clone(parent)),
                // the moved tile leaves the empty slot exactly where
                // the swap targeted
                empty_pos: target,
            });
        }

        new_states
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.board.hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_center() {
        // empty slot in the center - all 4 directions legal
        let board = Board::new([[1, 2, 3], [4, 0, 5], [6, 7, 8]]).unwrap();
        let state = Rc::new(State::initial(board).unwrap());
        let succs = State::successors(&state);
        assert_eq!(succs.len(), 4);
        assert_eq!(succs[0].board, Board::new([[1, 0, 3], [4, 2, 5], [6, 7, 8]]).unwrap());
        assert_eq!(succs[1].board, Board::new([[1, 2, 3], [4, 7, 5], [6, 0, 8]]).unwrap());
        assert_eq!(succs[2].board, Board::new([[1, 2, 3], [0, 4, 5], [6, 7, 8]]).unwrap());
        assert_eq!(succs[3].board, Board::new([[1, 2, 3], [4, 5, 0], [6, 7, 8]]).unwrap());
        for succ in &succs {
            assert_eq!(succ.dist, 1);
            assert_eq!(succ.empty_pos, succ.board.empty_pos().unwrap());
            assert!(Rc::ptr_eq(succ.prev.as_ref().unwrap(), &state));
        }
    }

    #[test]
    fn successors_corner() {
        let state = Rc::new(State::initial(Board::goal()).unwrap());
        assert_eq!(State::successors(&state).len(), 2);
    }

    #[test]
    fn successors_edge() {
        let board = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        let state = Rc::new(State::initial(board).unwrap());
        assert_eq!(State::successors(&state).len(), 3);
    }

    #[test]
    fn equality_ignores_path() {
        let board = Board::new([[1, 0, 2], [3, 4, 5], [6, 7, 8]]).unwrap();
        let a = State::initial(board).unwrap();
        let parent = Rc::new(State::initial(Board::goal()).unwrap());
        let b = State::successors(&parent)
            .into_iter()
            .find(|s| s.board == board)
            .unwrap();
        assert_eq!(b.dist, 1);
        assert!(b.prev.is_some());
        assert_eq!(a, b);
    }
}
