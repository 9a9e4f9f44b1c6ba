// ============================================================================
// Digit Module
// Single machine-word digits and the shared digit-vector storage
// ============================================================================
//
// This module provides:
// - Digit: one machine word with checked arithmetic primitives
// - DigitVector: little-endian digit sequence, the shared representation
//   for every number kind
// - DEFAULT_ALPHABET: the 64-character base-N digit alphabet

mod single;
mod vector;

pub use single::{Digit, DEFAULT_ALPHABET};
pub use vector::DigitVector;
