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

//! Disk colors.
//!
//! A disk is either `Light` or `Dark`. Rows render each disk as a single
//! symbol (`L` or `D`), and parsing accepts the same symbols in either case.

use crate::error::DiskRowError;

/// The color of a single disk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum DiskColor {
    /// A light disk. Sorted rows hold every light disk on the low-index side.
    Light,
    /// A dark disk. Sorted rows hold every dark disk on the high-index side.
    Dark,
}

impl DiskColor {
    /// Returns the single-character symbol used in textual row dumps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use disks_model::color::DiskColor;
    ///
    /// assert_eq!(DiskColor::Light.symbol(), 'L');
    /// assert_eq!(DiskColor::Dark.symbol(), 'D');
    /// ```
    #[inline(always)]
    pub const fn symbol(self) -> char {
        match self {
            DiskColor::Light => 'L',
            DiskColor::Dark => 'D',
        }
    }

    /// Returns the other color.
    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            DiskColor::Light => DiskColor::Dark,
            DiskColor::Dark => DiskColor::Light,
        }
    }

    #[inline(always)]
    pub const fn is_light(self) -> bool {
        matches!(self, DiskColor::Light)
    }

    #[inline(always)]
    pub const fn is_dark(self) -> bool {
        matches!(self, DiskColor::Dark)
    }
}

impl std::fmt::Display for DiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for DiskColor {
    type Error = DiskRowError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'L' | 'l' => Ok(DiskColor::Light),
            'D' | 'd' => Ok(DiskColor::Dark),
            other => Err(DiskRowError::UnknownSymbol(other.to_string())),
        }
    }
}
