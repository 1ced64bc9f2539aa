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

//! Structured logging for disk sorters.
//!
//! `LogMonitor` emits `tracing` events: `info` when a sort starts and ends,
//! `debug` for every `pass_interval`-th completed sweep, and `trace` for each
//! swap when swap logging is enabled. The crate never installs a subscriber;
//! the caller decides where events go.

use crate::{
    monitor::sort_monitor::{SortMonitor, SweepDirection},
    stats::SortStatistics,
};
use disks_model::row::DiskRow;
use std::time::Instant;
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    pass_interval: u64,
    log_swaps: bool,
}

impl LogMonitor {
    /// Creates a monitor that logs every `pass_interval`-th pass.
    /// An interval of zero disables pass logging.
    pub fn new(pass_interval: u64, log_swaps: bool) -> Self {
        Self {
            start_time: Instant::now(),
            pass_interval,
            log_swaps,
        }
    }

    #[inline(always)]
    fn should_log_pass(&self, passes: u64) -> bool {
        self.pass_interval != 0 && passes % self.pass_interval == 0
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(1, false)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(pass_interval: {}, log_swaps: {})",
            self.pass_interval, self.log_swaps
        )
    }
}

impl SortMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_sort(&mut self, row: &DiskRow, _statistics: &SortStatistics) {
        self.start_time = Instant::now();
        info!(
            disks = row.total_count(),
            alternating = row.is_alternating(),
            inversions = row.inversion_count(),
            "sort started"
        );
    }

    fn on_exit_sort(&mut self, row: &DiskRow, statistics: &SortStatistics) {
        info!(
            swaps = statistics.swaps,
            comparisons = statistics.comparisons,
            passes = statistics.passes,
            sorted = row.is_sorted(),
            elapsed = ?self.start_time.elapsed(),
            "sort finished"
        );
    }

    fn on_swap(
        &mut self,
        row: &DiskRow,
        left_index: usize,
        direction: SweepDirection,
        statistics: &SortStatistics,
    ) {
        if self.log_swaps {
            trace!(
                left_index,
                %direction,
                swaps = statistics.swaps,
                row = %row,
                "swap"
            );
        }
    }

    fn on_pass_complete(
        &mut self,
        row: &DiskRow,
        direction: SweepDirection,
        statistics: &SortStatistics,
    ) {
        if self.should_log_pass(statistics.passes) {
            debug!(
                pass = statistics.passes,
                %direction,
                swaps = statistics.swaps,
                row = %row,
                "pass complete"
            );
        }
    }
}
