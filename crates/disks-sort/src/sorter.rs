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

use crate::{
    monitor::{no_op::NoOperationMonitor, sort_monitor::SortMonitor},
    result::{SortOutcome, SortResult},
};
use disks_model::row::DiskRow;

/// A strategy that sorts a disk row using adjacent swaps only.
///
/// Sorters take the row by value. A caller that wants to keep the original
/// clones it first; the sorted row comes back inside the result.
pub trait DiskSorter {
    /// Returns the name of the sorter.
    fn name(&self) -> &str;

    /// Sorts `row`, reporting progress to `monitor`, which may stop the
    /// sorter early.
    fn sort_with_monitor(&self, row: DiskRow, monitor: &mut dyn SortMonitor) -> SortOutcome;

    /// Sorts `row` to completion.
    fn sort(&self, row: DiskRow) -> SortResult {
        self.sort_with_monitor(row, &mut NoOperationMonitor::new())
            .into()
    }
}

impl std::fmt::Debug for dyn DiskSorter + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskSorter({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        lawnmower::LawnmowerSorter,
        left_to_right::LeftToRightSorter,
        monitor::{composite::CompositeSortMonitor, log::LogMonitor, swap_limit::SwapLimitMonitor},
        result::TerminationReason,
    };
    use rand::{SeedableRng, rngs::StdRng};

    fn sorters() -> [&'static dyn DiskSorter; 2] {
        [&LeftToRightSorter, &LawnmowerSorter]
    }

    #[test]
    fn test_every_sorter_sorts_alternating_rows() {
        for sorter in sorters() {
            for k in 1..=32 {
                let result = sorter.sort(DiskRow::new(k));
                assert!(
                    result.after().is_sorted(),
                    "{:?} left {} unsorted",
                    sorter,
                    result.after()
                );
                assert_eq!(result.after().total_count(), 2 * k);
            }
        }
    }

    #[test]
    fn test_sorters_agree_on_final_row() {
        let mut rng = StdRng::seed_from_u64(2025);
        for k in 1..=20 {
            let inputs = [DiskRow::new(k), DiskRow::random(k, &mut rng)];
            for input in inputs {
                let a = LeftToRightSorter.sort(input.clone());
                let b = LawnmowerSorter.sort(input);
                assert_eq!(a.after(), b.after());
                assert_eq!(a.swap_count(), b.swap_count());
            }
        }
    }

    #[test]
    fn test_sorting_is_idempotent() {
        for sorter in sorters() {
            for k in 1..=10 {
                let once = sorter.sort(DiskRow::new(k));
                let twice = sorter.sort(once.after().clone());
                assert_eq!(twice.swap_count(), 0, "{:?}", sorter);
                assert_eq!(twice.after(), once.after(), "{:?}", sorter);
            }
        }
    }

    #[test]
    fn test_composite_monitor_with_log_and_limit() {
        for sorter in sorters() {
            let mut composite = CompositeSortMonitor::new();
            composite.add_monitor(SwapLimitMonitor::new(5));
            composite.add_monitor(LogMonitor::default());
            let outcome = sorter.sort_with_monitor(DiskRow::new(6), &mut composite);
            assert_eq!(
                outcome.termination_reason(),
                &TerminationReason::Aborted("Swap limit reached".to_string())
            );
            assert_eq!(outcome.result().swap_count(), 5);
        }
    }

    #[test]
    fn test_names_and_debug() {
        assert_eq!(LeftToRightSorter.name(), "LeftToRightSorter");
        assert_eq!(LawnmowerSorter.name(), "LawnmowerSorter");
        let sorter: &dyn DiskSorter = &LawnmowerSorter;
        assert_eq!(format!("{:?}", sorter), "DiskSorter(LawnmowerSorter)");
    }
}
