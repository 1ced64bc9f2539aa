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

//! # Disks Sort
//!
//! Two adjacent-swap sorters for the alternating disks puzzle, each turning a
//! `DiskRow` into one with every light disk on the left and every dark disk
//! on the right while counting swaps.
//!
//! Core flow
//! - Build a row with `disks_model::row::DiskRow::new(k)`.
//! - Call `sort_left_to_right(row)` or `sort_lawnmower(row)` for a
//!   `SortResult`, or pick a `DiskSorter` and call `sort_with_monitor` to
//!   observe progress and collect statistics.
//!
//! Guarantees
//! - Both sorters only swap (dark, light) pairs, so each swap removes exactly
//!   one inversion and the swap count equals the inversion count of the
//!   input. For the alternating row of `2k` disks that is `k(k+1)/2`.
//! - Both sorters accept any balanced row, not only the alternating one.
//! - Rows are taken by value; the caller's binding is never mutated.
//!
//! Module map
//! - `left_to_right`: repeated forward passes with a right-shrinking window.
//! - `lawnmower`: alternating forward/backward sweeps over a two-sided window.
//! - `sorter`: the `DiskSorter` trait.
//! - `monitor`: sorter monitors (log, composite, swap limit, no-op).
//! - `result`: `SortResult`, `SortOutcome`, `TerminationReason`.
//! - `stats`: swap, comparison and pass counters.

pub mod lawnmower;
pub mod left_to_right;
pub mod monitor;
pub mod result;
mod session;
pub mod sorter;
pub mod stats;

pub use lawnmower::sort_lawnmower;
pub use left_to_right::sort_left_to_right;
