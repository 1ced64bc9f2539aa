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

//! Sorter monitoring interface
//!
//! Declares the `SortMonitor` trait, the `SortCommand` a monitor uses to stop
//! a sorter early, and the `SweepDirection` reported with swap and pass
//! events.
//!
//! Lifecycle
//! - enter → {command → compare → swap?}* per sweep → pass complete → exit
//! - `SortStatistics` is provided to every callback.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are single-threaded.
//! - `sort_command` runs before every pair comparison; keep it cheap.

use crate::stats::SortStatistics;
use disks_model::row::DiskRow;

/// What a sorter should do next.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SortCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SortCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortCommand::Continue => write!(f, "Continue"),
            SortCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// The direction of the sweep in which an event happened.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SweepDirection {
    /// Low index to high index.
    Forward,
    /// High index to low index.
    Backward,
}

impl std::fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepDirection::Forward => write!(f, "forward"),
            SweepDirection::Backward => write!(f, "backward"),
        }
    }
}

/// Trait for observing and controlling a disk sorter.
pub trait SortMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first comparison.
    fn on_enter_sort(&mut self, row: &DiskRow, statistics: &SortStatistics);
    /// Called once after the sorter stopped, whether it completed or not.
    fn on_exit_sort(&mut self, row: &DiskRow, statistics: &SortStatistics);
    /// Called before every pair comparison.
    fn sort_command(&mut self, _row: &DiskRow, _statistics: &SortStatistics) -> SortCommand {
        SortCommand::Continue
    }
    /// Called after the pair `(left_index, left_index + 1)` was swapped.
    fn on_swap(
        &mut self,
        row: &DiskRow,
        left_index: usize,
        direction: SweepDirection,
        statistics: &SortStatistics,
    );
    /// Called after a sweep finished.
    fn on_pass_complete(
        &mut self,
        row: &DiskRow,
        direction: SweepDirection,
        statistics: &SortStatistics,
    );
}

impl std::fmt::Debug for dyn SortMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SortMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor({})", self.name())
    }
}
