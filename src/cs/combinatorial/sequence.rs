//! Builds every fixed-length sequence over the alphabet `{0, .., base - 1}`.
//!
//! The length is split in half. One Gray code table of half-length sequences
//! is built, and each full sequence is the concatenation of two entries from
//! that table, plus one trailing digit when the length is odd. Only the
//! half-table is ever generated digit by digit. The result is the Cartesian
//! product `[0, base)^length`, with `base^length` elements.
//!
//! # Example
//! ```
//! use radix_gray::cs::combinatorial::sequence::assemble;
//!
//! let sequences = assemble(2, 3).unwrap();
//! assert_eq!(sequences.len(), 8);
//! assert!(sequences.iter().all(|s| s.len() == 3));
//! ```

use std::iter::FusedIterator;
use std::mem::size_of;

use log::{debug, trace};

use crate::cs::combinatorial::mixed_radix::{allocate_output, vector_bytes, MixedRadixGray};
use crate::error::{Error, Result};

fn validate(base: usize, length: usize) -> Result<()> {
    if base == 0 {
        return Err(Error::invalid_input("Alphabet size must be positive"));
    }
    if length == 0 {
        return Err(Error::invalid_input("Sequence length must be positive"));
    }
    Ok(())
}

/// Returns `base^length`, the number of sequences [`assemble`] produces.
///
/// # Errors
/// * `Error::InvalidInput` if `base` or `length` is zero
/// * `Error::InputTooLarge` if `base^length` does not fit in `usize`
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::sequence::sequence_count;
///
/// assert_eq!(sequence_count(3, 4).unwrap(), 81);
/// assert_eq!(sequence_count(1, 100).unwrap(), 1);
/// ```
pub fn sequence_count(base: usize, length: usize) -> Result<usize> {
    validate(base, length)?;
    num_traits::checked_pow(base, length).ok_or_else(|| Error::InputTooLarge {
        size: format!("{}^{}", base, length),
        max: usize::MAX,
    })
}

/// Lazy form of [`assemble`].
///
/// Holds the half-table and builds each full sequence on demand. Memory stays
/// at `O(length * base^(length / 2))` instead of `O(length * base^length)`.
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::sequence::{assemble, Sequences};
///
/// let lazy: Vec<Vec<usize>> = Sequences::new(3, 3).unwrap().collect();
/// assert_eq!(lazy, assemble(3, 3).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Sequences {
    /// Half-table rows in Gray order, `half_len` digits each, stored back to back.
    half: Vec<usize>,
    half_len: usize,
    half_rows: usize,
    /// One-table size: `base` rows `[k]` for odd lengths, one empty row otherwise.
    one_rows: usize,
    odd: bool,
    length: usize,
    outer: usize,
    middle: usize,
    inner: usize,
    total: usize,
    remaining: usize,
}

impl Sequences {
    /// Prepares the half-table and one-table for `base^length` sequences.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if `base` or `length` is zero
    /// * `Error::InputTooLarge` if `base^length` overflows `usize`, or a single
    ///   sequence or the half-table cannot be allocated
    pub fn new(base: usize, length: usize) -> Result<Self> {
        let total = sequence_count(base, length)?;
        if vector_bytes(length) > isize::MAX as usize {
            return Err(Error::InputTooLarge {
                size: format!("sequences of length {}", length),
                max: isize::MAX as usize,
            });
        }

        // Odd lengths leave one trailing digit for the one-table.
        let half_len = length / 2;
        let odd = length % 2 == 1;

        let mut bounds = allocate_output(half_len, size_of::<usize>())?;
        bounds.resize(half_len, base);
        let gray = MixedRadixGray::new(&bounds)?;
        let half_rows = gray.len();
        let mut half = allocate_output(half_rows.saturating_mul(half_len), size_of::<usize>())?;
        for row in gray {
            half.extend_from_slice(&row);
        }
        let one_rows = if odd { base } else { 1 };

        debug!(
            "sequence assembler: base {}, length {}, half-table {} x {}, one-table {}, {} sequences",
            base, length, half_rows, half_len, one_rows, total
        );

        Ok(Sequences {
            half,
            half_len,
            half_rows,
            one_rows,
            odd,
            length,
            outer: 0,
            middle: 0,
            inner: 0,
            total,
            remaining: total,
        })
    }

    /// Total number of sequences, `base^length`.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rewinds to the first sequence.
    pub fn reset(&mut self) {
        self.outer = 0;
        self.middle = 0;
        self.inner = 0;
        self.remaining = self.total;
    }

    fn half_row(&self, row: usize) -> &[usize] {
        &self.half[row * self.half_len..(row + 1) * self.half_len]
    }
}

impl Iterator for Sequences {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.remaining == 0 {
            return None;
        }

        let mut sequence = Vec::with_capacity(self.length);
        sequence.extend_from_slice(self.half_row(self.middle));
        sequence.extend_from_slice(self.half_row(self.outer));
        if self.odd {
            sequence.push(self.inner);
        }

        self.inner += 1;
        if self.inner == self.one_rows {
            self.inner = 0;
            self.middle += 1;
            if self.middle == self.half_rows {
                self.middle = 0;
                self.outer += 1;
            }
        }
        self.remaining -= 1;

        Some(sequence)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Sequences {}

impl FusedIterator for Sequences {}

/// Returns every sequence of `length` digits drawn from `{0, .., base - 1}`.
///
/// With `h = length / 2` and `half` the Gray code table for `h` positions of
/// radix `base`, the result lists `half[j] ++ half[i] ++ one[k]` for `i` in
/// the outer loop, `j` in the middle loop and `k` in the inner loop. `one` is
/// `[[0], .., [base - 1]]` for odd lengths and `[[]]` for even lengths.
///
/// # Arguments
/// * `base` - Alphabet size
/// * `length` - Length of every sequence
///
/// # Returns
/// * `Ok(sequences)` - Exactly `base^length` distinct sequences
/// * `Err(Error)` - If `base` or `length` is zero, or the result is too large
///   to count or to allocate
///
/// # Complexity
/// * Time: O(length · base^length)
/// * Space: O(length · base^length); use [`Sequences`] to avoid holding the
///   whole result
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::sequence::assemble;
///
/// let mut sequences = assemble(3, 2).unwrap();
/// assert_eq!(sequences.len(), 9);
/// sequences.sort();
/// assert_eq!(sequences[0], vec![0, 0]);
/// assert_eq!(sequences[8], vec![2, 2]);
/// ```
pub fn assemble(base: usize, length: usize) -> Result<Vec<Vec<usize>>> {
    let total = sequence_count(base, length)?;
    let mut sequences = allocate_output(total, vector_bytes(length))?;
    sequences.extend(Sequences::new(base, length)?);
    trace!("sequence assembler: materialized {} sequences", sequences.len());
    Ok(sequences)
}
