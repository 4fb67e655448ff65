//! Data models
//!
//! Field names are English in Rust and Spanish on the wire, matching the
//! remote API (`/sabores`, `/pedidos`). All IDs are `i64` assigned by the
//! remote system.

pub mod flavor;
pub mod order;

use thiserror::Error;

// Re-exports
pub use flavor::*;
pub use order::*;

/// A wire enum value that is not one of the known variants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
