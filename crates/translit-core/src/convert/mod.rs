//! The three converter families. Each is a single left-to-right scan over
//! the input with an explicit state enum and one owned output buffer.

mod indic_to_indic;
mod indic_to_roman;
mod roman_to_indic;
#[cfg(test)]
mod tests;

pub use indic_to_indic::{indic_to_indic, IndicConversion};
pub use indic_to_roman::indic_to_roman;
pub use roman_to_indic::roman_to_indic;
