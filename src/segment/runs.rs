//! Run detection over a 1-D projection profile

use num_traits::Zero;

/// A maximal contiguous interval of positive profile values
///
/// The interval is half-open: `start` is occupied, `end` is the first index
/// past the run. Runs returned by [`find_runs`] are non-overlapping, ordered
/// by `start`, and at least the requested minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First index of the run
    pub start: usize,
    /// First index past the run
    pub end: usize,
}

impl Run {
    /// Number of indices covered by the run
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the run covers no indices
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Scan a profile for contiguous positive runs of at least `min_run_length`
///
/// Single left-to-right pass: a run opens at the first positive value after a
/// gap and closes at the next zero; it is emitted only if it meets the
/// minimum length, otherwise silently dropped (never merged with a
/// neighbor). A run still open at the end of the profile is emitted against
/// the profile length under the same length test, with no special-casing of
/// the boundary.
pub fn find_runs<I>(values: I, min_run_length: usize) -> Vec<Run>
where
    I: IntoIterator,
    I::Item: Zero + PartialOrd,
{
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    let mut length = 0;

    for (i, value) in values.into_iter().enumerate() {
        length = i + 1;
        if value > I::Item::zero() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(open) = start.take() {
            if i - open >= min_run_length {
                runs.push(Run { start: open, end: i });
            }
        }
    }

    if let Some(open) = start {
        if length - open >= min_run_length {
            runs.push(Run {
                start: open,
                end: length,
            });
        }
    }

    runs
}
