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

//! Shared bookkeeping for one sorter run.
//!
//! A `SortSession` owns the row being sorted and the statistics, and routes
//! every comparison and swap through the monitor. The sorters only decide
//! which pair to look at next.

use crate::{
    monitor::sort_monitor::{SortCommand, SortMonitor, SweepDirection},
    result::SortOutcome,
    stats::SortStatistics,
};
use disks_model::row::DiskRow;
use std::{ops::ControlFlow, time::Instant};

/// `Break` carries the termination reason requested by the monitor.
pub(crate) type Flow = ControlFlow<String>;

pub(crate) struct SortSession<'m, M>
where
    M: SortMonitor + ?Sized,
{
    row: DiskRow,
    statistics: SortStatistics,
    monitor: &'m mut M,
    start_time: Instant,
}

impl<'m, M> SortSession<'m, M>
where
    M: SortMonitor + ?Sized,
{
    pub(crate) fn begin(row: DiskRow, monitor: &'m mut M) -> Self {
        let statistics = SortStatistics::default();
        monitor.on_enter_sort(&row, &statistics);
        Self {
            row,
            statistics,
            monitor,
            start_time: Instant::now(),
        }
    }

    #[inline(always)]
    pub(crate) fn row(&self) -> &DiskRow {
        &self.row
    }

    #[inline(always)]
    fn command(&mut self) -> Flow {
        match self.monitor.sort_command(&self.row, &self.statistics) {
            SortCommand::Continue => ControlFlow::Continue(()),
            SortCommand::Terminate(reason) => ControlFlow::Break(reason),
        }
    }

    /// Inspects the pair `(left_index, left_index + 1)` and swaps it if it
    /// is out of order.
    #[inline]
    pub(crate) fn forward_step(&mut self, left_index: usize) -> Flow {
        self.command()?;
        self.statistics.on_comparison();
        if self.row.is_inverted(left_index) {
            self.row.swap(left_index);
            self.record_swap(left_index, SweepDirection::Forward);
        }
        ControlFlow::Continue(())
    }

    /// Inspects the pair `(right_index - 1, right_index)` and swaps it if it
    /// is out of order.
    #[inline]
    pub(crate) fn backward_step(&mut self, right_index: usize) -> Flow {
        debug_assert!(
            right_index > 0,
            "called `SortSession::backward_step` with right index 0"
        );
        self.command()?;
        self.statistics.on_comparison();
        let left_index = right_index - 1;
        if self.row.is_inverted(left_index) {
            self.row.rev_swap(right_index);
            self.record_swap(left_index, SweepDirection::Backward);
        }
        ControlFlow::Continue(())
    }

    #[inline(always)]
    fn record_swap(&mut self, left_index: usize, direction: SweepDirection) {
        self.statistics.on_swap();
        self.monitor
            .on_swap(&self.row, left_index, direction, &self.statistics);
    }

    #[inline]
    pub(crate) fn end_pass(&mut self, direction: SweepDirection) {
        self.statistics.on_pass_complete();
        self.monitor
            .on_pass_complete(&self.row, direction, &self.statistics);
    }

    pub(crate) fn finish(mut self, flow: Flow) -> SortOutcome {
        self.statistics.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_sort(&self.row, &self.statistics);
        match flow {
            ControlFlow::Continue(()) => SortOutcome::completed(self.row, self.statistics),
            ControlFlow::Break(reason) => SortOutcome::aborted(self.row, reason, self.statistics),
        }
    }
}
