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

//! The lawnmower sorter.
//!
//! Sweeps forward and backward over a window `[front, back)` that shrinks by
//! one disk after every sweep: a forward sweep settles a dark disk at
//! `back - 1`, a backward sweep settles a light disk at `front`.
//!
//! The traversal is a small state machine. The window bounds are the state;
//! each sweep is a transition that shrinks one side of the window and hands
//! over to the sweep in the other direction, until fewer than two disks are
//! left inside the window.

use crate::{
    monitor::sort_monitor::{SortMonitor, SweepDirection},
    result::{SortOutcome, SortResult},
    session::{Flow, SortSession},
    sorter::DiskSorter,
};
use disks_model::row::DiskRow;
use std::ops::ControlFlow;

/// The unsettled part of the row, `[front, back)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    front: usize,
    back: usize,
}

impl Window {
    #[inline(always)]
    fn new(len: usize) -> Self {
        Self {
            front: 0,
            back: len,
        }
    }

    #[inline(always)]
    fn contains(&self, index: usize) -> bool {
        self.front <= index && index < self.back
    }

    /// A window needs at least one adjacent pair to be worth sweeping.
    #[inline(always)]
    fn has_pair(&self) -> bool {
        self.back.saturating_sub(self.front) >= 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Forward,
    Backward,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LawnmowerSorter;

impl LawnmowerSorter {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }

    fn run<M>(session: &mut SortSession<'_, M>) -> Flow
    where
        M: SortMonitor + ?Sized,
    {
        let mut window = Window::new(session.row().total_count());
        let mut phase = if window.has_pair() {
            Phase::Forward
        } else {
            Phase::Done
        };

        loop {
            phase = match phase {
                Phase::Forward => {
                    Self::forward_sweep(session, window)?;
                    window.back -= 1;
                    if window.has_pair() {
                        Phase::Backward
                    } else {
                        Phase::Done
                    }
                }
                Phase::Backward => {
                    Self::backward_sweep(session, window)?;
                    window.front += 1;
                    if window.has_pair() {
                        Phase::Forward
                    } else {
                        Phase::Done
                    }
                }
                Phase::Done => return ControlFlow::Continue(()),
            };
        }
    }

    /// Pairs `(i, i + 1)` for `i` in `front ..= back - 2`.
    fn forward_sweep<M>(session: &mut SortSession<'_, M>, window: Window) -> Flow
    where
        M: SortMonitor + ?Sized,
    {
        for left_index in window.front..window.back - 1 {
            debug_assert!(
                window.contains(left_index + 1) && session.row().is_index(left_index + 1),
                "forward sweep left the window {:?} at index {}",
                window,
                left_index
            );
            session.forward_step(left_index)?;
        }
        session.end_pass(SweepDirection::Forward);
        ControlFlow::Continue(())
    }

    /// Pairs `(i - 1, i)` for `i` in `back - 1` down to `front + 1`.
    fn backward_sweep<M>(session: &mut SortSession<'_, M>, window: Window) -> Flow
    where
        M: SortMonitor + ?Sized,
    {
        for right_index in (window.front + 1..window.back).rev() {
            debug_assert!(
                window.contains(right_index - 1) && session.row().is_index(right_index),
                "backward sweep left the window {:?} at index {}",
                window,
                right_index
            );
            session.backward_step(right_index)?;
        }
        session.end_pass(SweepDirection::Backward);
        ControlFlow::Continue(())
    }
}

impl DiskSorter for LawnmowerSorter {
    fn name(&self) -> &str {
        "LawnmowerSorter"
    }

    fn sort_with_monitor(&self, row: DiskRow, monitor: &mut dyn SortMonitor) -> SortOutcome {
        let mut session = SortSession::begin(row, monitor);
        let flow = Self::run(&mut session);
        session.finish(flow)
    }
}

/// Sorts `row` with the lawnmower algorithm.
///
/// # Examples
///
/// ```rust
/// # use disks_model::row::DiskRow;
/// # use disks_sort::sort_lawnmower;
///
/// let result = sort_lawnmower(DiskRow::new(2));
/// assert_eq!(result.after().to_string(), "L L D D");
/// assert_eq!(result.swap_count(), 3);
/// ```
pub fn sort_lawnmower(row: DiskRow) -> SortResult {
    LawnmowerSorter::new().sort(row)
}
