use std::mem::size_of;

use crate::cs::combinatorial::mixed_radix::{allocate_output, switches};
use crate::error::{Error, Result};

/// Widest code whose 2^n sequence length can be counted in a `u64`. Whether the
/// sequence fits in memory is checked separately.
const MAX_BITS: usize = 63;

/// Generate the n-bit binary reflected Gray code sequence.
///
/// This is the radix-2 case of the mixed-radix Gray enumerator. Position `p`
/// of each binary vector becomes bit `p` of the code, so the result is the
/// classical `i ^ (i >> 1)` sequence of length 2^n.
///
/// # Errors
/// * `Error::InvalidInput` if `bits` exceeds 63
/// * `Error::InputTooLarge` if the 2^n codes cannot be allocated
///
/// # Example
/// ```
/// use radix_gray::cs::combinatorial::gray_code;
///
/// let codes = gray_code(2).unwrap();
/// // For n=2, the sequence is [0, 1, 3, 2].
/// assert_eq!(codes, vec![0, 1, 3, 2]);
/// ```
pub fn gray_code(bits: usize) -> Result<Vec<u64>> {
    if bits > MAX_BITS {
        return Err(Error::invalid_input(format!(
            "Gray code width must be at most {} bits, got {}",
            MAX_BITS, bits
        )));
    }

    let steps = switches(&vec![2; bits])?;
    let mut result = allocate_output(steps.len() + 1, size_of::<u64>())?;
    let mut code = 0u64;
    result.push(code);
    for step in steps {
        code ^= 1 << step.position;
        result.push(code);
    }
    Ok(result)
}
