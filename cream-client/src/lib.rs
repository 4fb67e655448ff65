//! Cream Client - operator panel core for the Cookies & Cream ordering API
//!
//! Keeps a race-free local view of the flavor catalog, the order list and
//! one order's status, and reports the outcome of every write through a
//! self-expiring notification queue. The API itself is remote; all state
//! here mirrors it and is refreshed by re-fetching after each write.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod panel;
pub mod sync;

pub use api::CreamApi;
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use panel::{FlavorForm, OrderForm, Panel};
pub use sync::{
    ErrorPolicy, FetchView, FlavorCatalog, Notification, NotificationId, NotificationQueue,
    NotificationVariant, OrderCollection, ProbeState, ResourceState, StatusProbe,
};

// Re-export shared types for convenience
pub use shared::{
    Flavor, FlavorCreate, Order, OrderCreate, OrderSize, OrderStatus, OrderStatusReport,
};
