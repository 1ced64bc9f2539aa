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

//! Errors raised while building a disk row.
//!
//! Index and swap preconditions are programmer errors and panic at the call
//! site. Everything a caller can get wrong with *data* (a zero light count,
//! a malformed dump, an unbalanced color mix) is reported here instead.

use std::fmt::Display;

/// The error type for fallible `DiskRow` construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiskRowError {
    /// A row needs at least one disk of each color.
    ZeroLightCount,
    /// The input contained no disks at all.
    Empty,
    /// The input held an odd number of disks.
    OddLength(usize),
    /// The input did not hold the same number of light and dark disks.
    Unbalanced {
        /// Number of light disks found.
        light: usize,
        /// Number of dark disks found.
        dark: usize,
    },
    /// A token in a textual dump was neither `L` nor `D`.
    UnknownSymbol(String),
}

impl Display for DiskRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLightCount => write!(f, "Light count must be a positive integer"),
            Self::Empty => write!(f, "A disk row must contain at least two disks"),
            Self::OddLength(len) => {
                write!(f, "A disk row must hold an even number of disks, got {len}")
            }
            Self::Unbalanced { light, dark } => write!(
                f,
                "A disk row must hold as many light as dark disks, got {light} light and {dark} dark"
            ),
            Self::UnknownSymbol(token) => {
                write!(f, "Could not parse token '{}' as a disk color", token)
            }
        }
    }
}

impl std::error::Error for DiskRowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_carry_context() {
        assert_eq!(
            DiskRowError::OddLength(3).to_string(),
            "A disk row must hold an even number of disks, got 3"
        );
        assert_eq!(
            DiskRowError::Unbalanced { light: 3, dark: 1 }.to_string(),
            "A disk row must hold as many light as dark disks, got 3 light and 1 dark"
        );
        assert_eq!(
            DiskRowError::UnknownSymbol("X".to_string()).to_string(),
            "Could not parse token 'X' as a disk color"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&DiskRowError::ZeroLightCount);
    }
}
