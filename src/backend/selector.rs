// ============================================================================
// Backend Selector
// Maps a requested kind to a shared backend instance
// ============================================================================

use super::karatsuba::KaratsubaBackend;
use super::naive::NaiveBackend;
use super::traits::Backend;
use std::fmt;

static NAIVE: NaiveBackend = NaiveBackend::new();
static KARATSUBA: KaratsubaBackend = KaratsubaBackend::new();

/// Which arithmetic implementation a number should use.
///
/// `Auto` picks the available backend with the highest priority; the
/// explicit kinds force one implementation, chiefly for tests and
/// benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    #[default]
    Auto,
    Naive,
    Karatsuba,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Naive => write!(f, "Naive"),
            Self::Karatsuba => write!(f, "Karatsuba"),
        }
    }
}

/// Resolves a kind to the shared instance implementing it.
pub fn resolve_backend(kind: BackendKind) -> &'static dyn Backend {
    match kind {
        BackendKind::Naive => &NAIVE,
        BackendKind::Karatsuba => &KARATSUBA,
        BackendKind::Auto => detect_best(),
    }
}

/// Highest-priority available implementation; the schoolbook backend is
/// always available, so the search cannot come up empty.
fn detect_best() -> &'static dyn Backend {
    let candidates: [&'static dyn Backend; 2] = [&KARATSUBA, &NAIVE];
    let mut best: &'static dyn Backend = &NAIVE;
    for candidate in candidates {
        if candidate.available() && candidate.priority() > best.priority() {
            best = candidate;
        }
    }
    tracing::debug!(backend = best.name(), "auto-selected arithmetic backend");
    best
}
