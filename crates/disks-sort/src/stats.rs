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

use std::time::Duration;

/// Statistics collected during a single sorter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortStatistics {
    /// Adjacent swaps performed.
    pub swaps: u64,
    /// Adjacent pairs inspected.
    pub comparisons: u64,
    /// Sweeps completed, in either direction.
    pub passes: u64,
    /// Total time spent in the sorter.
    pub time_total: Duration,
}

impl SortStatistics {
    #[inline]
    pub fn on_swap(&mut self) {
        self.swaps = self.swaps.saturating_add(1);
    }

    #[inline]
    pub fn on_comparison(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    #[inline]
    pub fn on_pass_complete(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Disk Sort Statistics:")?;
        writeln!(f, "  Swaps:        {}", self.swaps)?;
        writeln!(f, "  Comparisons:  {}", self.comparisons)?;
        writeln!(f, "  Passes:       {}", self.passes)?;
        writeln!(f, "  Total time:   {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero_and_increment() {
        let mut stats = SortStatistics::default();
        assert_eq!(stats.swaps, 0);
        stats.on_swap();
        stats.on_swap();
        stats.on_comparison();
        stats.on_pass_complete();
        assert_eq!(stats.swaps, 2);
        assert_eq!(stats.comparisons, 1);
        assert_eq!(stats.passes, 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = SortStatistics {
            swaps: u64::MAX,
            ..Default::default()
        };
        stats.on_swap();
        assert_eq!(stats.swaps, u64::MAX);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let text = SortStatistics::default().to_string();
        assert!(text.contains("Swaps:"));
        assert!(text.contains("Comparisons:"));
        assert!(text.contains("Passes:"));
        assert!(text.contains("Total time:"));
    }
}
