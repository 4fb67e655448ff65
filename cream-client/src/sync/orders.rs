//! Order collection sync
//!
//! Owns the full order list. A failed refresh clears it so no stale orders
//! are shown next to the error.

use std::sync::Arc;

use shared::Order;
use tokio::sync::RwLock;

use super::catalog::load_error_message;
use super::fetch_state::{ErrorPolicy, ResourceState};
use crate::{CreamApi, HttpClient};

/// Number of orders in the "recent orders" view
pub const RECENT_ORDERS_LIMIT: usize = 5;

pub struct OrderCollection<C> {
    api: Arc<CreamApi<C>>,
    state: RwLock<ResourceState<Order>>,
}

impl<C: HttpClient> OrderCollection<C> {
    pub fn new(api: Arc<CreamApi<C>>) -> Self {
        Self {
            api,
            state: RwLock::new(ResourceState::new(ErrorPolicy::ClearData)),
        }
    }

    /// Fetch the order list; failures are recorded in the state, not returned
    pub async fn load(&self) {
        let ticket = self.state.write().await.begin_fetch();
        tracing::debug!(generation = ticket.generation(), "Loading orders");

        match self.api.list_orders().await {
            Ok(orders) => {
                let count = orders.len();
                if self.state.write().await.fetch_succeeded(ticket, orders) {
                    tracing::debug!(count, "Orders loaded");
                } else {
                    tracing::warn!(generation = ticket.generation(), "Discarded stale order list");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load orders");
                let message = load_error_message("orders", &e);
                self.state.write().await.fetch_failed(ticket, message);
            }
        }
    }

    /// The full fetched sequence
    pub async fn orders(&self) -> Vec<Order> {
        self.state.read().await.data().to_vec()
    }

    /// The most recent orders, newest first
    pub async fn recent(&self) -> Vec<Order> {
        recent_orders(self.state.read().await.data())
    }

    pub async fn snapshot(&self) -> ResourceState<Order> {
        self.state.read().await.clone()
    }
}

/// Presentation slice: the last [`RECENT_ORDERS_LIMIT`] orders, reversed
pub fn recent_orders(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .rev()
        .take(RECENT_ORDERS_LIMIT)
        .cloned()
        .collect()
}
