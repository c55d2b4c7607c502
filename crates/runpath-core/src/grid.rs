//! The [`CostGrid`] type — an immutable rectangular grid of traversal costs.
//!
//! A `CostGrid` is parsed once from line-oriented digit input and is
//! read-only thereafter, so it can be shared freely by reference into any
//! number of searches.

use std::fmt;

use crate::geom::Point;

/// An immutable rectangular grid of per-cell traversal costs (0–9).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGrid {
    costs: Vec<u8>,
    width: i32,
    height: i32,
}

impl CostGrid {
    /// Parse a grid from text: one row per line, ASCII digits only, all
    /// rows the same width.
    ///
    /// A trailing newline is tolerated; anything else malformed (empty
    /// input, ragged rows, non-digit characters) is rejected up front so
    /// that a search never has to deal with a partially valid grid.
    pub fn parse(input: &str) -> Result<CostGrid, GridError> {
        let mut costs = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0i32;

        for (line_no, line) in input.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(GridError::RaggedRow {
                    line: line_no + 1,
                    expected,
                    found: line.len(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch.to_digit(10) {
                    Some(d) => costs.push(d as u8),
                    None => {
                        return Err(GridError::InvalidDigit {
                            ch,
                            pos: Point::new(col as i32, height),
                        });
                    }
                }
            }
            height += 1;
        }

        let width = width.unwrap_or(0) as i32;
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        Ok(CostGrid {
            costs,
            width,
            height,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bottom-right cell, i.e. (width-1, height-1).
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Cost of entering the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u8> {
        if !self.contains(p) {
            return None;
        }
        Some(self.costs[(p.y as usize) * (self.width as usize) + p.x as usize])
    }
}

/// Errors that can occur when parsing a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no rows (or only empty rows).
    Empty,
    /// A row's width differed from the first row's.
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside '0'..='9' was found.
    InvalidDigit { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty input"),
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => {
                write!(
                    f,
                    "grid contains invalid character \u{201c}{ch}\u{201d} at ({}, {})",
                    pos.x, pos.y
                )
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
241
321
143";

    #[test]
    fn parse_and_size() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.size(), Point::new(3, 3));
        assert_eq!(g.bottom_right(), Point::new(2, 2));
    }

    #[test]
    fn parse_tolerates_trailing_newline() {
        let g = CostGrid::parse("12\n34\n").unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
    }

    #[test]
    fn cell_access() {
        let g = CostGrid::parse(SMALL).unwrap();
        assert_eq!(g.at(Point::new(0, 0)), Some(2));
        assert_eq!(g.at(Point::new(2, 0)), Some(1));
        assert_eq!(g.at(Point::new(1, 2)), Some(4));
        assert_eq!(g.at(Point::new(3, 0)), None);
        assert_eq!(g.at(Point::new(0, -1)), None);
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(CostGrid::parse(""), Err(GridError::Empty));
        assert_eq!(CostGrid::parse("\n"), Err(GridError::Empty));
    }

    #[test]
    fn ragged_row_rejected() {
        let err = CostGrid::parse("123\n12\n123").unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn non_digit_rejected() {
        let err = CostGrid::parse("12\n3x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1),
            }
        );
    }

    #[test]
    fn errors_display() {
        let err = CostGrid::parse("12\n345").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
