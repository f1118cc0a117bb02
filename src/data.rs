use std::fmt::{self, Display, Formatter};
use std::ops::Add;

pub(crate) const SIZE: i8 = 3;

// Expansion order is fixed - it decides which of several equally short
// solutions the search returns, so changing it changes test expectations.
pub(crate) const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub r: i8,
    pub c: i8,
}

impl Pos {
    pub fn new(r: i8, c: i8) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u32 {
        ((self.r - other.r).abs() + (self.c - other.c).abs()) as u32
    }

    pub(crate) fn in_bounds(self) -> bool {
        self.r >= 0 && self.r < SIZE && self.c >= 0 && self.c < SIZE
    }

    pub(crate) fn index(self) -> usize {
        self.r as usize * SIZE as usize + self.c as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn offset(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Dir::Up => 'u',
            Dir::Down => 'd',
            Dir::Left => 'l',
            Dir::Right => 'r',
        };
        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions() {
        let pos = Pos::new(1, 1);
        assert_eq!(pos + Dir::Up, Pos::new(0, 1));
        assert_eq!(pos + Dir::Down, Pos::new(2, 1));
        assert_eq!(pos + Dir::Left, Pos::new(1, 0));
        assert_eq!(pos + Dir::Right, Pos::new(1, 2));
        assert_eq!(pos.dist(Pos::new(0, 2)), 2);
    }

    #[test]
    fn bounds() {
        assert!(Pos::new(0, 0).in_bounds());
        assert!(Pos::new(2, 2).in_bounds());
        assert!(!(Pos::new(0, 0) + Dir::Up).in_bounds());
        assert!(!(Pos::new(2, 2) + Dir::Right).in_bounds());
    }
}
