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

//! Monitoring combinators for disk sorters
//!
//! Provides `CompositeSortMonitor`, a fan-out monitor that forwards every
//! event to its children, so logging and early stopping can be combined
//! without touching the sorters.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `sort_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::sort_monitor::{SortCommand, SortMonitor, SweepDirection},
    stats::SortStatistics,
};
use disks_model::row::DiskRow;

/// A sort monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeSortMonitor<'a> {
    monitors: Vec<Box<dyn SortMonitor + 'a>>,
}

impl Default for CompositeSortMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeSortMonitor<'a> {
    /// Creates a new empty `CompositeSortMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSortMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SortMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds an already boxed monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SortMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SortMonitor + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn SortMonitor + 'a>> for CompositeSortMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SortMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl SortMonitor for CompositeSortMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeSortMonitor"
    }

    #[inline(always)]
    fn on_enter_sort(&mut self, row: &DiskRow, statistics: &SortStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_sort(row, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_sort(&mut self, row: &DiskRow, statistics: &SortStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_sort(row, statistics);
        }
    }

    #[inline(always)]
    fn sort_command(&mut self, row: &DiskRow, statistics: &SortStatistics) -> SortCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.sort_command(row, statistics);
            if !matches!(cmd, SortCommand::Continue) {
                return cmd;
            }
        }
        SortCommand::Continue
    }

    #[inline(always)]
    fn on_swap(
        &mut self,
        row: &DiskRow,
        left_index: usize,
        direction: SweepDirection,
        statistics: &SortStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_swap(row, left_index, direction, statistics);
        }
    }

    #[inline(always)]
    fn on_pass_complete(
        &mut self,
        row: &DiskRow,
        direction: SweepDirection,
        statistics: &SortStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_pass_complete(row, direction, statistics);
        }
    }
}
