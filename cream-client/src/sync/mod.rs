//! Client-side view of the remote resources
//!
//! Each component owns its slice of state and is its only writer. Locks
//! are never held across a network call; staleness is handled by
//! generation tokens instead.

pub mod catalog;
pub mod fetch_state;
pub mod notify;
pub mod orders;
pub mod probe;

pub use catalog::{FlavorCatalog, available_flavors};
pub use fetch_state::{ErrorPolicy, FetchTicket, FetchView, ResourceState};
pub use notify::{Notification, NotificationId, NotificationQueue, NotificationVariant};
pub use orders::{OrderCollection, RECENT_ORDERS_LIMIT, recent_orders};
pub use probe::{ProbeState, StatusProbe};
