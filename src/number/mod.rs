// ============================================================================
// Number Module
// The concrete number kinds and the promoting tagged union
// ============================================================================

mod cardinal;
mod core;
mod decimal;
mod integer;
mod value;

pub use cardinal::Cardinal;
pub use core::NumberCore;
pub use decimal::Decimal;
pub use integer::{Integer, Sign};
pub use value::Number;
