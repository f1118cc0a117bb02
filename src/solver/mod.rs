pub(crate) mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use fnv::FnvHashSet;
use log::debug;

use crate::board::{Board, BoardError};
use crate::data::{Pos, SIZE};
use crate::state::State;
use crate::Solve;

use self::a_star::SearchNode;
pub use self::a_star::Stats;

pub struct SolverOk {
    /// Boards from the initial one to the goal, one move apart.
    /// `None` means the frontier was exhausted without reaching the goal -
    /// a normal outcome for odd-parity scrambles, not an error.
    pub path_boards: Option<Vec<Board>>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(path_boards: Option<Vec<Board>>, stats: Stats) -> Self {
        Self { path_boards, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path_boards {
            None => writeln!(f, "No solution")?,
            Some(ref boards) => writeln!(f, "moves: {}", boards.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, print_status: bool) -> Result<SolverOk, BoardError> {
        let initial = State::initial(*self)?;
        Ok(search(initial, print_status))
    }
}

/// Sum over all non-empty tiles of the distance to their goal position.
/// Admissible (a move changes one tile's distance by exactly 1) and
/// consistent, so the first pop of any board already has its shortest
/// distance - together with the closed set this makes A* move-optimal.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut dist = 0;
    for r in 0..SIZE {
        for c in 0..SIZE {
            let pos = Pos::new(r, c);
            let tile = board[pos];
            if tile != 0 {
                dist += pos.dist(Board::target_pos(tile));
            }
        }
    }
    dist
}

fn search(initial: State, print_status: bool) -> SolverOk {
    debug!("Search called");

    let mut stats = a_star::Stats::new();

    let mut to_visit = BinaryHeap::new();
    let mut visited = FnvHashSet::default();
    let mut next_seq = 0;

    let h = manhattan_distance(&initial.board);
    let start = SearchNode::new(Rc::new(initial), h, next_seq);
    next_seq += 1;
    stats.add_created(&start);
    to_visit.push(Reverse(start));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if cur_node.state.is_goal() {
            debug!("Solved at depth {}, backtracking path", cur_node.state.dist);
            return SolverOk::new(Some(backtrack_path(&cur_node.state)), stats);
        }

        // a board can be pushed several times via different parents
        // before it gets popped - only the first pop is expanded
        if visited.contains(&cur_node.state.board) {
            stats.add_reached_duplicate(&cur_node);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.state.dist);
            println!("{:?}", stats);
        }
        visited.insert(cur_node.state.board);

        for neighbor in State::successors(&cur_node.state) {
            if visited.contains(&neighbor.board) {
                continue;
            }
            let f = neighbor.dist + manhattan_distance(&neighbor.board);
            let next_node = SearchNode::new(Rc::new(neighbor), f, next_seq);
            next_seq += 1;
            stats.add_created(&next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    debug!("Frontier exhausted - goal not reachable");
    SolverOk::new(None, stats)
}

/// Walks the predecessor chain back to the initial state and reverses it.
/// The result always has `final_state.dist + 1` boards.
fn backtrack_path(final_state: &State) -> Vec<Board> {
    let mut ret = Vec::with_capacity(final_state.dist as usize + 1);
    let mut state = final_state;
    loop {
        ret.push(state.board);
        match state.prev {
            Some(ref prev) => state = prev,
            None => {
                ret.reverse();
                return ret;
            }
        }
    }
}
