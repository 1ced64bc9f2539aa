// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Sorter results.
//!
//! `SortResult` is the plain answer to the puzzle: the final row and the
//! number of swaps it took. `SortOutcome` wraps it together with the reason
//! the sorter stopped and the statistics it collected, for callers that run
//! a sorter under a monitor.

use crate::stats::SortStatistics;
use disks_model::row::DiskRow;

/// The final row produced by a sorter and the number of swaps it performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortResult {
    after: DiskRow,
    swap_count: u64,
}

impl SortResult {
    /// Creates a new `SortResult` from an owned or a borrowed row.
    ///
    /// A borrowed row is cloned, so the result never aliases the caller's row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::row::DiskRow;
    /// # use disks_sort::result::SortResult;
    ///
    /// let row = DiskRow::new(1);
    /// let borrowed = SortResult::new(&row, 0);
    /// let owned = SortResult::new(row, 0);
    /// assert_eq!(borrowed, owned);
    /// ```
    #[inline]
    pub fn new<R>(after: R, swap_count: u64) -> Self
    where
        R: Into<DiskRow>,
    {
        Self {
            after: after.into(),
            swap_count,
        }
    }

    /// Returns the row as the sorter left it.
    #[inline]
    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    /// Returns the number of adjacent swaps performed.
    #[inline]
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Consumes the result and returns the row.
    #[inline]
    pub fn into_after(self) -> DiskRow {
        self.after
    }
}

/// Why a sorter stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The sorter ran every sweep to completion.
    Completed,
    /// A monitor requested termination with the given reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "Completed"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a monitored sorter run.
#[derive(Debug, Clone)]
pub struct SortOutcome {
    result: SortResult,
    termination_reason: TerminationReason,
    statistics: SortStatistics,
}

impl SortOutcome {
    #[inline]
    pub fn completed(after: DiskRow, statistics: SortStatistics) -> Self {
        Self {
            result: SortResult::new(after, statistics.swaps),
            termination_reason: TerminationReason::Completed,
            statistics,
        }
    }

    #[inline]
    pub fn aborted<R>(after: DiskRow, reason: R, statistics: SortStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            result: SortResult::new(after, statistics.swaps),
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the sort result.
    #[inline]
    pub fn result(&self) -> &SortResult {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the sorter statistics.
    #[inline]
    pub fn statistics(&self) -> &SortStatistics {
        &self.statistics
    }

    /// Returns `true` if the sorter ran to completion.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Completed)
    }
}

impl From<SortOutcome> for SortResult {
    fn from(outcome: SortOutcome) -> Self {
        outcome.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_swaps(swaps: u64) -> SortStatistics {
        SortStatistics {
            swaps,
            ..Default::default()
        }
    }

    #[test]
    fn test_result_from_borrowed_row_does_not_alias() {
        let mut row = DiskRow::new(2);
        let result = SortResult::new(&row, 0);
        row.swap(0);
        assert_eq!(result.after().to_string(), "D L D L");
        assert_eq!(row.to_string(), "L D D L");
    }

    #[test]
    fn test_result_accessors() {
        let result = SortResult::new(DiskRow::new(1), 7);
        assert_eq!(result.swap_count(), 7);
        assert_eq!(result.after(), &DiskRow::new(1));
        assert_eq!(result.into_after(), DiskRow::new(1));
    }

    #[test]
    fn test_completed_outcome_takes_swap_count_from_statistics() {
        let outcome = SortOutcome::completed(DiskRow::new(1), stats_with_swaps(3));
        assert!(outcome.is_completed());
        assert_eq!(outcome.result().swap_count(), 3);
        assert_eq!(outcome.statistics().swaps, 3);
        assert_eq!(outcome.termination_reason(), &TerminationReason::Completed);
    }

    #[test]
    fn test_aborted_outcome_keeps_reason_and_partial_row() {
        let outcome = SortOutcome::aborted(DiskRow::new(2), "swap limit", stats_with_swaps(1));
        assert!(!outcome.is_completed());
        match outcome.termination_reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "swap limit"),
            other => panic!("expected Aborted termination reason, got {}", other),
        }
        let result: SortResult = outcome.into();
        assert_eq!(result.swap_count(), 1);
        assert_eq!(result.after(), &DiskRow::new(2));
    }

    #[test]
    fn test_termination_reason_display() {
        assert_eq!(TerminationReason::Completed.to_string(), "Completed");
        assert_eq!(
            TerminationReason::Aborted("stop".to_string()).to_string(),
            "Aborted: stop"
        );
    }
}
