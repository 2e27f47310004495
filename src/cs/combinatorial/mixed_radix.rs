//! Loopless reflected mixed-radix Gray code generation (Knuth's Algorithm H).
//!
//! Given a radix per position, these routines visit every digit vector
//! `a` with `0 <= a[p] < radix[p]`. Each vector differs from the previous
//! one by `+1` or `-1` in exactly one position. A chain of focus pointers
//! finds the position to move next in O(1), so the generator never scans
//! the digit vector or backtracks.
//!
//! Positions with radix 1 never move. They are left out of the stepping
//! state, but their fixed `0` still takes up its slot in every emitted
//! vector.
//!
//! # Example
//! ```
//! use radix_gray::cs::combinatorial::mixed_radix::enumerate;
//!
//! let vectors = enumerate(&[3, 2]).unwrap();
//! assert_eq!(vectors, vec![
//!     vec![0, 0],
//!     vec![1, 0],
//!     vec![2, 0],
//!     vec![2, 1],
//!     vec![1, 1],
//!     vec![0, 1],
//! ]);
//! ```
use std::iter::FusedIterator;
use std::mem::size_of;

use log::{debug, trace};
use num_traits::CheckedMul;

use crate::error::{Error, Result};

/// A single transition of the Gray code: add `delta` (`+1` or `-1`) to the
/// digit at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Switch {
    /// Index into the original bound vector.
    pub position: usize,
    /// Either `1` or `-1`.
    pub delta: isize,
}

impl Switch {
    /// Applies this switch to `digits` in place. `digits` must be the vector
    /// the switch was generated from.
    pub(crate) fn apply(&self, digits: &mut [usize]) {
        let digit = &mut digits[self.position];
        if self.delta > 0 {
            *digit += 1;
        } else {
            *digit -= 1;
        }
    }
}

/// Checks that every radix is positive and returns the number of vectors in
/// the product.
///
/// The empty product has exactly one element, so `product_size(&[])` is `1`.
///
/// # Errors
/// * `Error::InvalidInput` if any radix is zero
/// * `Error::InputTooLarge` if the product does not fit in `usize`
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::mixed_radix::product_size;
///
/// assert_eq!(product_size(&[2, 3, 4]).unwrap(), 24);
/// assert_eq!(product_size(&[]).unwrap(), 1);
/// assert!(product_size(&[0, 2]).is_err());
/// ```
pub fn product_size(bounds: &[usize]) -> Result<usize> {
    for (position, &radix) in bounds.iter().enumerate() {
        if radix == 0 {
            return Err(Error::invalid_input(format!(
                "radix at position {} must be positive",
                position
            )));
        }
    }

    bounds.iter().try_fold(1usize, |acc, radix| {
        CheckedMul::checked_mul(&acc, radix).ok_or_else(|| Error::InputTooLarge {
            size: format!("product of radices {:?}", bounds),
            max: usize::MAX,
        })
    })
}

/// Heap bytes held by one materialized digit vector of `width` positions.
pub(crate) fn vector_bytes(width: usize) -> usize {
    width
        .saturating_mul(size_of::<usize>())
        .saturating_add(size_of::<Vec<usize>>())
}

/// Allocates an empty output vector with room for `count` items of
/// `item_bytes` each, or reports why it cannot be held in memory.
pub(crate) fn allocate_output<T>(count: usize, item_bytes: usize) -> Result<Vec<T>> {
    let max = isize::MAX as usize;
    let bytes = count
        .checked_mul(item_bytes)
        .filter(|&bytes| bytes <= max)
        .ok_or_else(|| Error::InputTooLarge {
            size: format!("{} items of {} bytes", count, item_bytes),
            max,
        })?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(count)
        .map_err(|err| Error::InputTooLarge {
            size: format!("{} bytes ({})", bytes, err),
            max,
        })?;
    Ok(output)
}

/// Stepping state for one enumeration. All links are plain indices into
/// vectors owned by this struct.
#[derive(Debug, Clone)]
struct GrayState {
    /// `radix - 1` for each active position.
    limits: Vec<usize>,
    /// Slot in the full digit vector for each active position.
    slots: Vec<usize>,
    /// The current full-width digit vector.
    digits: Vec<usize>,
    /// Focus pointers; `focus[0]` names the next active position to move and
    /// the value `limits.len()` is the end sentinel.
    focus: Vec<usize>,
    /// Direction of travel for each active position.
    dirs: Vec<isize>,
}

impl GrayState {
    fn new(bounds: &[usize]) -> Self {
        let (slots, limits): (Vec<usize>, Vec<usize>) = bounds
            .iter()
            .enumerate()
            .filter(|&(_, &radix)| radix > 1)
            .map(|(slot, &radix)| (slot, radix - 1))
            .unzip();
        let active = limits.len();

        GrayState {
            limits,
            slots,
            digits: vec![0; bounds.len()],
            focus: (0..=active).collect(),
            dirs: vec![1; active],
        }
    }

    fn reset(&mut self) {
        self.digits.fill(0);
        self.focus.iter_mut().enumerate().for_each(|(i, f)| *f = i);
        self.dirs.fill(1);
    }

    /// Moves one digit and returns the switch that was applied, or `None` once
    /// every vector has been visited. Stays exhausted after that.
    fn advance(&mut self) -> Option<Switch> {
        let sentinel = self.limits.len();
        let j = self.focus[0];
        if j == sentinel {
            return None;
        }
        self.focus[0] = 0;

        let switch = Switch {
            position: self.slots[j],
            delta: self.dirs[j],
        };
        switch.apply(&mut self.digits);

        // Reaching either end retires position j until the positions after
        // it have moved, and reverses it for its next pass.
        let digit = self.digits[switch.position];
        if digit == 0 || digit == self.limits[j] {
            self.dirs[j] = -switch.delta;
            self.focus[j] = self.focus[j + 1];
            self.focus[j + 1] = j + 1;
        }

        Some(switch)
    }
}

/// Lazy reflected mixed-radix Gray code enumerator.
///
/// Yields the same vectors in the same order as [`enumerate`], one per call
/// to `next`, and keeps only O(n) state. Each item is a fresh vector.
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::mixed_radix::MixedRadixGray;
///
/// let mut gray = MixedRadixGray::new(&[2, 2]).unwrap();
/// assert_eq!(gray.len(), 4);
/// assert_eq!(gray.next(), Some(vec![0, 0]));
/// assert_eq!(gray.next(), Some(vec![1, 0]));
/// assert_eq!(gray.next(), Some(vec![1, 1]));
/// assert_eq!(gray.next(), Some(vec![0, 1]));
/// assert_eq!(gray.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct MixedRadixGray {
    state: GrayState,
    total: usize,
    remaining: usize,
    started: bool,
}

impl MixedRadixGray {
    /// Creates an enumerator over `∏ [0, bounds[p])`.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if any radix is zero
    /// * `Error::InputTooLarge` if the product does not fit in `usize`
    pub fn new(bounds: &[usize]) -> Result<Self> {
        let total = product_size(bounds)?;
        let state = GrayState::new(bounds);
        debug!(
            "mixed-radix gray: {} positions, {} active, {} vectors",
            bounds.len(),
            state.limits.len(),
            total
        );

        Ok(MixedRadixGray {
            state,
            total,
            remaining: total,
            started: false,
        })
    }

    /// Total number of vectors this enumerator produces from the start.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rewinds to the all-zero vector.
    pub fn reset(&mut self) {
        self.state.reset();
        self.remaining = self.total;
        self.started = false;
    }
}

impl Iterator for MixedRadixGray {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if !self.started {
            self.started = true;
        } else {
            self.state.advance()?;
        }
        self.remaining -= 1;
        Some(self.state.digits.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for MixedRadixGray {}

impl FusedIterator for MixedRadixGray {}

/// Iterator over the transitions of the Gray code, see [`switches`].
#[derive(Debug, Clone)]
pub struct Switches {
    state: GrayState,
    remaining: usize,
}

impl Iterator for Switches {
    type Item = Switch;

    fn next(&mut self) -> Option<Switch> {
        let switch = self.state.advance()?;
        self.remaining -= 1;
        Some(switch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Switches {}

impl FusedIterator for Switches {}

/// Returns the transitions of the Gray code for `bounds` without building any
/// vectors.
///
/// Starting from the all-zero vector and adding each [`Switch`]'s `delta` at
/// its `position` in order visits exactly the vectors returned by
/// [`enumerate`]. There are
/// `product_size(bounds) - 1` switches.
///
/// # Errors
/// Same as [`product_size`].
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::mixed_radix::{switches, Switch};
///
/// let steps: Vec<Switch> = switches(&[3]).unwrap().collect();
/// assert_eq!(steps, vec![
///     Switch { position: 0, delta: 1 },
///     Switch { position: 0, delta: 1 },
/// ]);
/// ```
pub fn switches(bounds: &[usize]) -> Result<Switches> {
    let total = product_size(bounds)?;
    let state = GrayState::new(bounds);
    debug!(
        "mixed-radix switches: {} positions, {} active, {} switches",
        bounds.len(),
        state.limits.len(),
        total - 1
    );

    Ok(Switches {
        state,
        remaining: total - 1,
    })
}

/// Returns every vector of `∏ [0, bounds[p])` in reflected mixed-radix Gray
/// order, starting from the all-zero vector.
///
/// # Arguments
/// * `bounds` - The radix of each position; digits at position `p` range over
///   `0..bounds[p]`
///
/// # Returns
/// * `Ok(vectors)` - `∏ bounds` vectors, each of length `bounds.len()`
/// * `Err(Error)` - If a radix is zero, or the result is too large to count or
///   to allocate
///
/// # Complexity
/// * Time: O(1) amortized per vector for stepping, plus O(n) to copy it out
/// * Space: O(n · ∏ bounds) for the materialized result
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::mixed_radix::enumerate;
///
/// // A radix-1 position stays at zero but keeps its slot.
/// let vectors = enumerate(&[1, 2]).unwrap();
/// assert_eq!(vectors, vec![vec![0, 0], vec![0, 1]]);
/// ```
pub fn enumerate(bounds: &[usize]) -> Result<Vec<Vec<usize>>> {
    let gray = MixedRadixGray::new(bounds)?;
    let mut vectors = allocate_output(gray.len(), vector_bytes(bounds.len()))?;
    vectors.extend(gray);
    trace!("mixed-radix gray: materialized {} vectors", vectors.len());
    Ok(vectors)
}
