use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use separator::Separatable;

use crate::state::State;

/// Frontier entry: a state with its priority cost `f = g + h` and an
/// insertion sequence number. Ordering is ascending by `(f, seq)` so ties
/// on `f` break toward the earlier-pushed node - the frontier is fully
/// deterministic for a fixed insertion sequence.
#[derive(Debug)]
pub(crate) struct SearchNode {
    pub(crate) state: Rc<State>,
    pub(crate) f: u32,
    pub(crate) seq: u64,
}

impl SearchNode {
    pub(crate) fn new(state: Rc<State>, f: u32, seq: u64) -> Self {
        SearchNode { state, f, seq }
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        (self.f, self.seq) == (other.f, other.seq)
    }
}

impl Eq for SearchNode {}

#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u32>,
    visited_states: Vec<u32>,
    duplicate_states: Vec<u32>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> u32 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u32 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u32 {
        self.duplicate_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add(counts: &mut Vec<u32>, node: &SearchNode) -> bool {
        let mut new_depth = false;

        // while because some depths might be skipped
        while node.state.dist as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[node.state.dist as usize] += 1;
        new_depth
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<16}{:<17}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            duplicates.separated_string()
        )?;
        writeln!(
            f,
            "Created but not reached total: {}",
            left.separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"
        )?;
        // created_states is always the longest vec
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = *self.visited_states.get(depth).unwrap_or(&0);
            let duplicates = *self.duplicate_states.get(depth).unwrap_or(&0);
            let left = created - visited - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}
