use std::fmt;

use thiserror::Error;

/// Which external catalog a dangling layer id pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Terrain,
    Unit,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Terrain => write!(f, "terrain"),
            CatalogKind::Unit => write!(f, "unit"),
        }
    }
}

/// Failures surfaced by map construction, queries, and mutation.
///
/// All failures are local and immediate; this layer has no I/O and no
/// transient conditions, so nothing here is retryable.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("coordinates ({x}, {y}) outside {height}x{width} grid")]
    OutOfRange {
        x: u32,
        y: u32,
        height: u32,
        width: u32,
    },

    #[error("{catalog} catalog has no entry for id {id}")]
    BadCatalogRef { catalog: CatalogKind, id: u32 },

    #[error("invalid map construction: {0}")]
    InvalidConstruction(String),
}
