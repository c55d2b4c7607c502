use std::fmt;

use runpath_core::{Direction, Point};

/// One atomic search transition: a straight run of `run` unit steps in a
/// single direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub dir: Direction,
    pub run: u8,
}

impl Move {
    /// Landing position after applying this move from `from`.
    #[inline]
    pub fn landing(self, from: Point) -> Point {
        from + self.dir.delta() * self.run as i32
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.dir, self.run)
    }
}

/// An optimal route from the grid origin: an ordered move sequence plus the
/// total cost of every cell entered along it.
///
/// Invariant: consecutive moves never share a direction nor reverse the
/// previous one, and every run length lies within the bounds the route was
/// searched under. Fields are plain data fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub moves: Vec<Move>,
    pub cost: i32,
}

impl Route {
    /// Landing position of the final move, starting from the origin.
    pub fn end(&self) -> Point {
        self.moves
            .iter()
            .fold(Point::ZERO, |pos, &m| m.landing(pos))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.moves {
            write!(f, "{m}")?;
        }
        write!(f, " = {}", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_landing() {
        let m = Move {
            dir: Direction::East,
            run: 3,
        };
        assert_eq!(m.landing(Point::ZERO), Point::new(3, 0));
        let m = Move {
            dir: Direction::North,
            run: 2,
        };
        assert_eq!(m.landing(Point::new(1, 5)), Point::new(1, 3));
    }

    #[test]
    fn route_end_folds_moves() {
        let route = Route {
            moves: vec![
                Move {
                    dir: Direction::East,
                    run: 2,
                },
                Move {
                    dir: Direction::South,
                    run: 3,
                },
                Move {
                    dir: Direction::East,
                    run: 1,
                },
            ],
            cost: 12,
        };
        assert_eq!(route.end(), Point::new(3, 3));
    }

    #[test]
    fn display_compact() {
        let m = Move {
            dir: Direction::South,
            run: 4,
        };
        assert_eq!(m.to_string(), "S(4)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn move_round_trip() {
        let m = Move {
            dir: Direction::West,
            run: 7,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
