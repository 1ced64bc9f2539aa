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
    monitor::sort_monitor::{SortCommand, SortMonitor, SweepDirection},
    stats::SortStatistics,
};
use disks_model::row::DiskRow;

/// A monitor that ignores every event and never stops the sorter.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl SortMonitor for NoOperationMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_sort(&mut self, _row: &DiskRow, _statistics: &SortStatistics) {}

    #[inline(always)]
    fn on_exit_sort(&mut self, _row: &DiskRow, _statistics: &SortStatistics) {}

    #[inline(always)]
    fn sort_command(&mut self, _row: &DiskRow, _statistics: &SortStatistics) -> SortCommand {
        SortCommand::Continue
    }

    #[inline(always)]
    fn on_swap(
        &mut self,
        _row: &DiskRow,
        _left_index: usize,
        _direction: SweepDirection,
        _statistics: &SortStatistics,
    ) {
    }

    #[inline(always)]
    fn on_pass_complete(
        &mut self,
        _row: &DiskRow,
        _direction: SweepDirection,
        _statistics: &SortStatistics,
    ) {
    }
}
