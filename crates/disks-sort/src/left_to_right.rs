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

//! The left-to-right sorter.
//!
//! Runs `light_count` forward passes. Pass `p` inspects every pair from index
//! 0 up to `N - 1 - p` and swaps each (dark, light) pair it meets, so a dark
//! disk can ride several steps to the right in a single pass while each light
//! disk moves at most one step to the left.
//!
//! After pass `p` the rightmost `p + 1` positions hold their final colors,
//! which is why the window shrinks from the right. It never shrinks from the
//! left, so the sorter handles any balanced row, not just the alternating one.
//! A light disk is preceded by at most `light_count` dark disks, so
//! `light_count` passes always suffice.

use crate::{
    monitor::sort_monitor::{SortMonitor, SweepDirection},
    result::{SortOutcome, SortResult},
    session::{Flow, SortSession},
    sorter::DiskSorter,
};
use disks_model::row::DiskRow;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeftToRightSorter;

impl LeftToRightSorter {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }

    fn run<M>(session: &mut SortSession<'_, M>) -> Flow
    where
        M: SortMonitor + ?Sized,
    {
        let total = session.row().total_count();
        let passes = session.row().light_count();

        for pass in 0..passes {
            // Exclusive bound on the left index: the last pair is (end - 1, end).
            let end = total - 1 - pass;
            for left_index in 0..end {
                session.forward_step(left_index)?;
            }
            session.end_pass(SweepDirection::Forward);
        }
        ControlFlow::Continue(())
    }
}

impl DiskSorter for LeftToRightSorter {
    fn name(&self) -> &str {
        "LeftToRightSorter"
    }

    fn sort_with_monitor(&self, row: DiskRow, monitor: &mut dyn SortMonitor) -> SortOutcome {
        let mut session = SortSession::begin(row, monitor);
        let flow = Self::run(&mut session);
        session.finish(flow)
    }
}

/// Sorts `row` with the left-to-right algorithm.
///
/// # Examples
///
/// ```rust
/// # use disks_model::row::DiskRow;
/// # use disks_sort::sort_left_to_right;
///
/// let result = sort_left_to_right(DiskRow::new(2));
/// assert_eq!(result.after().to_string(), "L L D D");
/// assert_eq!(result.swap_count(), 3);
/// ```
pub fn sort_left_to_right(row: DiskRow) -> SortResult {
    LeftToRightSorter::new().sort(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, swap_limit::SwapLimitMonitor};
    use crate::result::TerminationReason;
    use rand::{SeedableRng, rngs::StdRng};

    fn row(s: &str) -> DiskRow {
        s.parse().expect("test row should parse")
    }

    #[test]
    fn test_single_pair() {
        let result = sort_left_to_right(DiskRow::new(1));
        assert_eq!(result.after().to_string(), "L D");
        assert_eq!(result.swap_count(), 1);
    }

    #[test]
    fn test_two_pairs() {
        let result = sort_left_to_right(DiskRow::new(2));
        assert_eq!(result.after().to_string(), "L L D D");
        assert_eq!(result.swap_count(), 3);
    }

    #[test]
    fn test_four_pairs() {
        let result = sort_left_to_right(DiskRow::new(4));
        assert_eq!(result.after().to_string(), "L L L L D D D D");
        assert_eq!(result.swap_count(), 10);
    }

    #[test]
    fn test_swap_count_closed_form_and_bound() {
        for k in 1..=40u64 {
            let result = sort_left_to_right(DiskRow::new(k as usize));
            assert!(result.after().is_sorted(), "k = {k}: {}", result.after());
            assert_eq!(result.swap_count(), k * (k + 1) / 2, "k = {k}");
            assert!(result.swap_count() <= k * k, "k = {k}");
        }
    }

    #[test]
    fn test_sorted_input_needs_no_swaps() {
        let sorted = row("L L L D D D");
        let result = sort_left_to_right(sorted.clone());
        assert_eq!(result.swap_count(), 0);
        assert_eq!(result.after(), &sorted);
    }

    #[test]
    fn test_handles_rows_that_are_not_alternating() {
        // Worst case: every light disk starts behind every dark disk.
        let result = sort_left_to_right(row("D D D L L L"));
        assert_eq!(result.after().to_string(), "L L L D D D");
        assert_eq!(result.swap_count(), 9);

        let result = sort_left_to_right(row("D D L L"));
        assert!(result.after().is_sorted());
    }

    #[test]
    fn test_random_rows_swap_once_per_inversion() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for k in 1..=24 {
            for _ in 0..8 {
                let input = DiskRow::random(k, &mut rng);
                let inversions = input.inversion_count();
                let result = sort_left_to_right(input);
                assert!(result.after().is_sorted());
                assert_eq!(result.swap_count(), inversions);
            }
        }
    }

    #[test]
    fn test_statistics_count_passes_and_comparisons() {
        let k = 5u64;
        let outcome = LeftToRightSorter::new()
            .sort_with_monitor(DiskRow::new(k as usize), &mut NoOperationMonitor::new());
        let stats = outcome.statistics();
        assert!(outcome.is_completed());
        assert_eq!(stats.passes, k);
        // Pass p inspects 2k - 1 - p pairs.
        let expected: u64 = (0..k).map(|p| 2 * k - 1 - p).sum();
        assert_eq!(stats.comparisons, expected);
        assert_eq!(stats.swaps, outcome.result().swap_count());
    }

    #[test]
    fn test_swap_limit_aborts_with_partial_row() {
        let mut monitor = SwapLimitMonitor::new(4);
        let outcome = LeftToRightSorter::new().sort_with_monitor(DiskRow::new(4), &mut monitor);
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::Aborted("Swap limit reached".to_string())
        );
        assert_eq!(outcome.result().swap_count(), 4);
        assert!(!outcome.result().after().is_sorted());
    }

    #[test]
    fn test_caller_row_is_untouched_when_cloned() {
        let original = DiskRow::new(3);
        let result = sort_left_to_right(original.clone());
        assert!(original.is_alternating());
        assert!(result.after().is_sorted());
    }
}
