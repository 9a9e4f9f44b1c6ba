// ============================================================================
// Numeric Module
// Error signaling surface shared by every number type
// ============================================================================
//
// This module provides:
// - NumericError: Error kinds for arithmetic operations
// - NumericResult: Result alias used by every checked_* method
//
// Design principles:
// - Arithmetic failures are returned, never clamped or defaulted
// - Operator traits wrap the checked forms and panic with context
// - Malformed base/alphabet combinations are preconditions (assert)

mod errors;

pub use errors::{NumericError, NumericResult};
