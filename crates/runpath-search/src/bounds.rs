use std::fmt;

/// Inclusive bounds on the length of a single straight-line move.
///
/// A mover must travel at least `min_run` cells before it may turn or stop,
/// and at most `max_run` cells before a turn becomes mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunBounds {
    min_run: u8,
    max_run: u8,
}

impl RunBounds {
    /// A nimble mover: turns freely, 1–3 cells per move.
    pub const NIMBLE: RunBounds = RunBounds {
        min_run: 1,
        max_run: 3,
    };

    /// A heavy mover: needs momentum, 4–10 cells per move.
    pub const HEAVY: RunBounds = RunBounds {
        min_run: 4,
        max_run: 10,
    };

    /// Create validated bounds. `min_run` must be at least 1 and no greater
    /// than `max_run`.
    pub fn new(min_run: u8, max_run: u8) -> Result<RunBounds, BoundsError> {
        if min_run < 1 {
            return Err(BoundsError::ZeroMinRun);
        }
        if min_run > max_run {
            return Err(BoundsError::Inverted { min_run, max_run });
        }
        Ok(RunBounds { min_run, max_run })
    }

    /// Minimum legal run length.
    #[inline]
    pub fn min_run(self) -> u8 {
        self.min_run
    }

    /// Maximum legal run length.
    #[inline]
    pub fn max_run(self) -> u8 {
        self.max_run
    }
}

impl fmt::Display for RunBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min_run, self.max_run)
    }
}

/// Errors from constructing [`RunBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// `min_run` was 0; a move must cover at least one cell.
    ZeroMinRun,
    /// `min_run` exceeded `max_run`.
    Inverted { min_run: u8, max_run: u8 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinRun => write!(f, "run bounds: min_run must be at least 1"),
            Self::Inverted { min_run, max_run } => {
                write!(f, "run bounds: min_run {min_run} exceeds max_run {max_run}")
            }
        }
    }
}

impl std::error::Error for BoundsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bounds() {
        let b = RunBounds::new(2, 5).unwrap();
        assert_eq!(b.min_run(), 2);
        assert_eq!(b.max_run(), 5);
    }

    #[test]
    fn degenerate_single_step() {
        let b = RunBounds::new(1, 1).unwrap();
        assert_eq!(b.min_run(), b.max_run());
    }

    #[test]
    fn zero_min_rejected() {
        assert_eq!(RunBounds::new(0, 3), Err(BoundsError::ZeroMinRun));
    }

    #[test]
    fn inverted_rejected() {
        assert_eq!(
            RunBounds::new(5, 2),
            Err(BoundsError::Inverted {
                min_run: 5,
                max_run: 2,
            })
        );
    }

    #[test]
    fn presets_are_valid() {
        assert_eq!(
            RunBounds::new(1, 3).unwrap(),
            RunBounds::NIMBLE
        );
        assert_eq!(
            RunBounds::new(4, 10).unwrap(),
            RunBounds::HEAVY
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn run_bounds_round_trip() {
        let b = RunBounds::new(4, 10).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: RunBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
