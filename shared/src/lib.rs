//! Shared types for the Cookies & Cream panel
//!
//! Wire models exchanged with the remote ordering API, plus the small
//! amount of static reference data the panel renders.

pub mod error;
pub mod models;

// Re-exports
pub use error::ErrorBody;
pub use models::{
    Flavor, FlavorCreate, Order, OrderCreate, OrderSize, OrderStatus, OrderStatusReport,
    ParseEnumError, StatusReferenceRow, status_reference,
};
pub use serde::{Deserialize, Serialize};
