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

//! Swap limit monitor
//!
//! `SwapLimitMonitor` stops a sorter once it has performed a configured number
//! of swaps. The sorter returns an aborted outcome holding the partially
//! sorted row.

use crate::{
    monitor::sort_monitor::{SortCommand, SortMonitor, SweepDirection},
    stats::SortStatistics,
};
use disks_model::row::DiskRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapLimitMonitor {
    swap_limit: u64,
}

impl SwapLimitMonitor {
    /// Creates a new `SwapLimitMonitor` with the specified swap limit.
    pub fn new(swap_limit: u64) -> Self {
        Self { swap_limit }
    }

    /// Returns the configured swap limit.
    pub fn swap_limit(&self) -> u64 {
        self.swap_limit
    }
}

impl SortMonitor for SwapLimitMonitor {
    fn name(&self) -> &str {
        "SwapLimitMonitor"
    }

    fn on_enter_sort(&mut self, _row: &DiskRow, _statistics: &SortStatistics) {}

    fn on_exit_sort(&mut self, _row: &DiskRow, _statistics: &SortStatistics) {}

    fn sort_command(&mut self, _row: &DiskRow, statistics: &SortStatistics) -> SortCommand {
        if statistics.swaps >= self.swap_limit {
            SortCommand::Terminate("Swap limit reached".to_string())
        } else {
            SortCommand::Continue
        }
    }

    fn on_swap(
        &mut self,
        _row: &DiskRow,
        _left_index: usize,
        _direction: SweepDirection,
        _statistics: &SortStatistics,
    ) {
    }

    fn on_pass_complete(
        &mut self,
        _row: &DiskRow,
        _direction: SweepDirection,
        _statistics: &SortStatistics,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continues_below_limit_and_terminates_at_limit() {
        let row = DiskRow::new(2);
        let mut monitor = SwapLimitMonitor::new(2);
        let mut stats = SortStatistics::default();
        assert_eq!(monitor.sort_command(&row, &stats), SortCommand::Continue);
        stats.on_swap();
        assert_eq!(monitor.sort_command(&row, &stats), SortCommand::Continue);
        stats.on_swap();
        assert_eq!(
            monitor.sort_command(&row, &stats),
            SortCommand::Terminate("Swap limit reached".to_string())
        );
    }

    #[test]
    fn test_zero_limit_terminates_immediately() {
        let mut monitor = SwapLimitMonitor::new(0);
        assert!(matches!(
            monitor.sort_command(&DiskRow::new(1), &SortStatistics::default()),
            SortCommand::Terminate(_)
        ));
    }
}
