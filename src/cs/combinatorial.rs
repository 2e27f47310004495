pub mod gray_code;
pub mod mixed_radix;
pub mod sequence;

#[cfg(test)]
mod tests;

pub use gray_code::gray_code;
pub use mixed_radix::{enumerate, product_size, switches, MixedRadixGray, Switch, Switches};
pub use sequence::{assemble, sequence_count, Sequences};
