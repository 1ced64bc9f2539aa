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

//! # Disk Rows
//!
//! A `DiskRow` is a fixed-length row of light and dark disks. The only way to
//! rearrange it is an adjacent swap, which mirrors the physical puzzle: two
//! disks next to each other trade places.
//!
//! ## Invariants
//!
//! - The length is even, positive, and never changes after construction.
//! - The row always holds exactly as many light disks as dark disks.
//!
//! ## Storage
//!
//! Disks are stored in a `FixedBitSet` where a set bit marks a dark disk.
//! Both predicates reduce to bit counting or a single linear scan.
//!
//! ## Preconditions
//!
//! Index-taking methods (`get`, `swap`, `rev_swap`, `is_inverted`) assert that
//! every addressed index satisfies `is_index`. A violation is a bug in the
//! caller and panics, in release builds as well.
//!
//! ## Usage
//!
//! ```rust
//! use disks_model::row::DiskRow;
//!
//! let mut row = DiskRow::new(2);
//! assert_eq!(row.to_string(), "D L D L");
//! assert!(row.is_alternating());
//!
//! row.swap(0);
//! row.rev_swap(3);
//! row.swap(1);
//! assert_eq!(row.to_string(), "L L D D");
//! assert!(row.is_sorted());
//! ```

use crate::{color::DiskColor, error::DiskRowError};
use fixedbitset::FixedBitSet;
use rand::{Rng, seq::SliceRandom};
use std::str::FromStr;

/// A row of `2k` disks with `k` light and `k` dark disks.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DiskRow {
    dark: FixedBitSet, // bit `i` is set iff the disk at `i` is dark
}

impl DiskRow {
    /// Creates the alternating row of `2 * light_count` disks: dark at even
    /// indices, light at odd indices.
    ///
    /// # Panics
    ///
    /// Panics if `light_count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::row::DiskRow;
    ///
    /// let row = DiskRow::new(3);
    /// assert_eq!(row.total_count(), 6);
    /// assert_eq!(row.to_string(), "D L D L D L");
    /// ```
    pub fn new(light_count: usize) -> Self {
        assert!(
            light_count > 0,
            "called `DiskRow::new` with a light count of zero"
        );
        Self::alternating(light_count)
    }

    /// Creates the alternating row of `2 * light_count` disks, or returns
    /// `DiskRowError::ZeroLightCount` if `light_count` is zero.
    pub fn try_new(light_count: usize) -> Result<Self, DiskRowError> {
        if light_count == 0 {
            return Err(DiskRowError::ZeroLightCount);
        }
        Ok(Self::alternating(light_count))
    }

    /// Creates a row from an explicit sequence of colors.
    ///
    /// The sequence must be non-empty, of even length, and balanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::{color::DiskColor, row::DiskRow};
    ///
    /// let row = DiskRow::from_colors([DiskColor::Light, DiskColor::Dark]).unwrap();
    /// assert!(row.is_sorted());
    /// ```
    pub fn from_colors<I>(colors: I) -> Result<Self, DiskRowError>
    where
        I: IntoIterator<Item = DiskColor>,
    {
        let colors: Vec<DiskColor> = colors.into_iter().collect();
        let dark_count = colors.iter().filter(|c| c.is_dark()).count();
        Self::check_shape(colors.len(), dark_count)?;
        Ok(Self::from_slice(&colors))
    }

    /// Creates a uniformly shuffled balanced row of `2 * light_count` disks.
    ///
    /// # Panics
    ///
    /// Panics if `light_count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::row::DiskRow;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let row = DiskRow::random(5, &mut rng);
    /// assert_eq!(row.light_count(), 5);
    /// ```
    pub fn random<R>(light_count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(
            light_count > 0,
            "called `DiskRow::random` with a light count of zero"
        );
        let mut colors = vec![DiskColor::Light; light_count * 2];
        colors[light_count..].fill(DiskColor::Dark);
        colors.shuffle(rng);
        Self::from_slice(&colors)
    }

    fn alternating(light_count: usize) -> Self {
        let total = light_count * 2;
        let mut dark = FixedBitSet::with_capacity(total);
        for i in (0..total).step_by(2) {
            dark.insert(i);
        }
        Self { dark }
    }

    fn from_slice(colors: &[DiskColor]) -> Self {
        let mut dark = FixedBitSet::with_capacity(colors.len());
        for (i, color) in colors.iter().enumerate() {
            dark.set(i, color.is_dark());
        }
        Self { dark }
    }

    fn check_shape(total: usize, dark_count: usize) -> Result<(), DiskRowError> {
        if total == 0 {
            return Err(DiskRowError::Empty);
        }
        if total % 2 != 0 {
            return Err(DiskRowError::OddLength(total));
        }
        let light_count = total - dark_count;
        if light_count != dark_count {
            return Err(DiskRowError::Unbalanced {
                light: light_count,
                dark: dark_count,
            });
        }
        Ok(())
    }

    /// Returns the number of disks in the row.
    #[inline(always)]
    pub fn total_count(&self) -> usize {
        self.dark.len()
    }

    /// Returns the number of light disks, which is half the row.
    #[inline(always)]
    pub fn light_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Returns the number of dark disks, which is half the row.
    #[inline(always)]
    pub fn dark_count(&self) -> usize {
        self.light_count()
    }

    /// Returns `true` if `index` addresses a disk in this row.
    #[inline(always)]
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Returns the color of the disk at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "called `DiskRow::get` with index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            index
        );
        self.color_at(index)
    }

    #[inline(always)]
    fn color_at(&self, index: usize) -> DiskColor {
        if self.dark.contains(index) {
            DiskColor::Dark
        } else {
            DiskColor::Light
        }
    }

    /// Exchanges the disks at `left_index` and `left_index + 1`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, left_index: usize) {
        assert!(
            self.is_index(left_index),
            "called `DiskRow::swap` with left index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            left_index
        );
        let right_index = left_index + 1;
        assert!(
            self.is_index(right_index),
            "called `DiskRow::swap` with right index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            right_index
        );
        self.exchange(left_index, right_index);
    }

    /// Exchanges the disks at `right_index - 1` and `right_index`.
    ///
    /// This is the same move as `swap(right_index - 1)`, addressed from the
    /// right-hand disk of the pair.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds, including `right_index == 0`.
    #[inline]
    pub fn rev_swap(&mut self, right_index: usize) {
        assert!(
            self.is_index(right_index),
            "called `DiskRow::rev_swap` with right index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            right_index
        );
        let Some(left_index) = right_index.checked_sub(1) else {
            panic!("called `DiskRow::rev_swap` with right index 0: there is no disk to its left");
        };
        self.exchange(left_index, right_index);
    }

    #[inline(always)]
    fn exchange(&mut self, left_index: usize, right_index: usize) {
        let left_dark = self.dark.contains(left_index);
        let right_dark = self.dark.contains(right_index);
        self.dark.set(left_index, right_dark);
        self.dark.set(right_index, left_dark);
    }

    /// Returns `true` if the disk at `left_index` is dark and the disk right
    /// after it is light, i.e. the pair is out of order.
    ///
    /// # Panics
    ///
    /// Panics if `left_index` or `left_index + 1` is out of bounds.
    #[inline]
    pub fn is_inverted(&self, left_index: usize) -> bool {
        assert!(
            self.is_index(left_index) && self.is_index(left_index + 1),
            "called `DiskRow::is_inverted` with a pair out of bounds: the len is {} but the pair is ({}, {})",
            self.total_count(),
            left_index,
            left_index + 1
        );
        self.dark.contains(left_index) && !self.dark.contains(left_index + 1)
    }

    /// Returns `true` if the row reads dark, light, dark, light, ... from
    /// index 0 to the end.
    pub fn is_alternating(&self) -> bool {
        (0..self.total_count()).all(|i| self.dark.contains(i) == (i % 2 == 0))
    }

    /// Returns `true` if the first half of the row is all light and the second
    /// half is all dark.
    pub fn is_sorted(&self) -> bool {
        let half = self.light_count();
        self.dark.count_ones(..half) == 0 && self.dark.count_ones(half..) == half
    }

    /// Returns the number of (dark, light) pairs in which the dark disk sits at
    /// the lower index.
    ///
    /// Every adjacent swap of an inverted pair removes exactly one inversion,
    /// so this is the swap count of any sorter that only swaps inverted pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::row::DiskRow;
    ///
    /// assert_eq!(DiskRow::new(4).inversion_count(), 10);
    /// ```
    pub fn inversion_count(&self) -> u64 {
        let mut darks_seen: u64 = 0;
        let mut inversions: u64 = 0;
        for color in self.colors() {
            match color {
                DiskColor::Dark => darks_seen += 1,
                DiskColor::Light => inversions += darks_seen,
            }
        }
        inversions
    }

    /// Returns an iterator over the disk colors from left to right.
    pub fn colors(&self) -> impl ExactSizeIterator<Item = DiskColor> + '_ {
        (0..self.total_count()).map(|i| self.color_at(i))
    }
}

impl From<&DiskRow> for DiskRow {
    #[inline]
    fn from(row: &DiskRow) -> Self {
        row.clone()
    }
}

impl std::fmt::Display for DiskRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.colors().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DiskRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiskRow({})", self)
    }
}

impl FromStr for DiskRow {
    type Err = DiskRowError;

    /// Parses the textual dump produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split_whitespace()
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(symbol), None) => DiskColor::try_from(symbol),
                    _ => Err(DiskRowError::UnknownSymbol(token.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_colors(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn row(s: &str) -> DiskRow {
        s.parse().expect("test row should parse")
    }

    #[test]
    fn test_new_builds_alternating_row_of_twice_the_light_count() {
        for k in 1..=16 {
            let r = DiskRow::new(k);
            assert_eq!(r.total_count(), 2 * k);
            assert_eq!(r.light_count(), k);
            assert_eq!(r.dark_count(), k);
            assert!(r.is_alternating(), "row {} should alternate", r);
        }
    }

    #[test]
    fn test_new_row_is_not_sorted_beyond_one_pair() {
        assert!(!DiskRow::new(1).is_sorted());
        for k in 2..=16 {
            assert!(!DiskRow::new(k).is_sorted());
        }
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::new` with a light count of zero")]
    fn test_new_panics_on_zero_light_count() {
        let _ = DiskRow::new(0);
    }

    #[test]
    fn test_try_new_reports_zero_light_count() {
        assert_eq!(DiskRow::try_new(0), Err(DiskRowError::ZeroLightCount));
        assert_eq!(DiskRow::try_new(2), Ok(DiskRow::new(2)));
    }

    #[test]
    fn test_to_string_renders_one_symbol_per_disk() {
        assert_eq!(DiskRow::new(1).to_string(), "D L");
        assert_eq!(DiskRow::new(4).to_string(), "D L D L D L D L");
        assert_eq!(format!("{:?}", DiskRow::new(1)), "DiskRow(D L)");
    }

    #[test]
    fn test_get_reads_colors_by_index() {
        let r = DiskRow::new(2);
        assert_eq!(r.get(0), DiskColor::Dark);
        assert_eq!(r.get(1), DiskColor::Light);
        assert_eq!(r.get(2), DiskColor::Dark);
        assert_eq!(r.get(3), DiskColor::Light);
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::get` with index out of bounds")]
    fn test_get_panics_out_of_bounds() {
        let _ = DiskRow::new(2).get(4);
    }

    #[test]
    fn test_is_index_bounds() {
        let r = DiskRow::new(3);
        assert!(r.is_index(0));
        assert!(r.is_index(5));
        assert!(!r.is_index(6));
        assert!(!r.is_index(usize::MAX));
    }

    #[test]
    fn test_swap_exchanges_adjacent_pair() {
        let mut r = DiskRow::new(2);
        r.swap(0);
        assert_eq!(r.to_string(), "L D D L");
        r.swap(2);
        assert_eq!(r.to_string(), "L D L D");
    }

    #[test]
    fn test_rev_swap_is_swap_from_the_right() {
        let mut a = DiskRow::new(3);
        let mut b = DiskRow::new(3);
        for i in 0..5 {
            a.swap(i);
            b.rev_swap(i + 1);
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::swap` with right index out of bounds")]
    fn test_swap_panics_when_partner_is_out_of_bounds() {
        DiskRow::new(2).swap(3);
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::swap` with left index out of bounds")]
    fn test_swap_panics_when_index_is_out_of_bounds() {
        DiskRow::new(2).swap(4);
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::rev_swap` with right index 0")]
    fn test_rev_swap_panics_at_index_zero() {
        DiskRow::new(2).rev_swap(0);
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::rev_swap` with right index out of bounds")]
    fn test_rev_swap_panics_past_the_end() {
        DiskRow::new(2).rev_swap(4);
    }

    #[test]
    fn test_is_inverted_detects_dark_before_light() {
        let r = row("D L L D");
        assert!(r.is_inverted(0));
        assert!(!r.is_inverted(1));
        assert!(!r.is_inverted(2));
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::is_inverted` with a pair out of bounds")]
    fn test_is_inverted_panics_on_last_index() {
        let _ = DiskRow::new(1).is_inverted(1);
    }

    #[test]
    fn test_is_alternating_checks_every_pair() {
        assert!(row("D L D L").is_alternating());
        assert!(!row("L D L D").is_alternating());
        assert!(!row("D L L D").is_alternating());
        // Only the tail breaks the pattern.
        assert!(!row("D L D L D L L D").is_alternating());
    }

    #[test]
    fn test_is_sorted_splits_at_midpoint() {
        assert!(row("L D").is_sorted());
        assert!(row("L L L D D D").is_sorted());
        assert!(!row("L L D L D D").is_sorted());
        assert!(!row("D D L L").is_sorted());
    }

    #[test]
    fn test_equality_compares_length_and_colors() {
        assert_eq!(row("L D"), row("l d"));
        assert_ne!(row("L D"), row("D L"));
        assert_ne!(row("L D"), row("L L D D"));
    }

    #[test]
    fn test_from_str_roundtrips_display() {
        let r = DiskRow::new(5);
        assert_eq!(row(&r.to_string()), r);
    }

    #[test]
    fn test_from_str_rejects_malformed_input() {
        assert_eq!("".parse::<DiskRow>(), Err(DiskRowError::Empty));
        assert_eq!("L D L".parse::<DiskRow>(), Err(DiskRowError::OddLength(3)));
        assert_eq!(
            "L L L D".parse::<DiskRow>(),
            Err(DiskRowError::Unbalanced { light: 3, dark: 1 })
        );
        assert_eq!(
            "L DD".parse::<DiskRow>(),
            Err(DiskRowError::UnknownSymbol("DD".to_string()))
        );
        assert_eq!(
            "L X".parse::<DiskRow>(),
            Err(DiskRowError::UnknownSymbol("X".to_string()))
        );
    }

    #[test]
    fn test_from_colors_validates_shape() {
        use DiskColor::{Dark, Light};
        assert!(DiskRow::from_colors([Dark, Dark, Light, Light]).is_ok());
        assert_eq!(
            DiskRow::from_colors([Dark, Dark]),
            Err(DiskRowError::Unbalanced { light: 0, dark: 2 })
        );
        assert_eq!(
            DiskRow::from_colors(std::iter::empty()),
            Err(DiskRowError::Empty)
        );
    }

    #[test]
    fn test_inversion_count_of_alternating_row_is_triangular() {
        for k in 1..=20u64 {
            let r = DiskRow::new(k as usize);
            assert_eq!(r.inversion_count(), k * (k + 1) / 2);
        }
        assert_eq!(row("L L D D").inversion_count(), 0);
        assert_eq!(row("D D L L").inversion_count(), 4);
    }

    #[test]
    fn test_random_row_is_balanced_and_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for k in 1..=12 {
            let ra = DiskRow::random(k, &mut a);
            let rb = DiskRow::random(k, &mut b);
            assert_eq!(ra, rb);
            assert_eq!(ra.total_count(), 2 * k);
            let darks = ra.colors().filter(|c| c.is_dark()).count();
            assert_eq!(darks, k);
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = DiskRow::new(2);
        let mut copy = DiskRow::from(&original);
        copy.swap(0);
        assert_eq!(original.to_string(), "D L D L");
        assert_eq!(copy.to_string(), "L D D L");
    }
}
