// ============================================================================
// Backend Module
// Pluggable multi-digit arithmetic implementations
// ============================================================================

mod karatsuba;
mod naive;
mod selector;
mod traits;

pub use karatsuba::{KaratsubaBackend, KARATSUBA_THRESHOLD};
pub use naive::NaiveBackend;
pub use selector::{resolve_backend, BackendKind};
pub use traits::Backend;
