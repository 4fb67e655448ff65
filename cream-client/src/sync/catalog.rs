//! Flavor catalog sync
//!
//! Owns the flavor collection. A failed refresh keeps the last good catalog
//! (the render gate hides it while the error is shown), so the order form
//! can still offer previously known available flavors.

use std::sync::Arc;

use shared::Flavor;
use tokio::sync::RwLock;

use super::fetch_state::{ErrorPolicy, ResourceState};
use crate::{ClientError, ClientResult, CreamApi, HttpClient};

pub struct FlavorCatalog<C> {
    api: Arc<CreamApi<C>>,
    state: RwLock<ResourceState<Flavor>>,
}

impl<C: HttpClient> FlavorCatalog<C> {
    pub fn new(api: Arc<CreamApi<C>>) -> Self {
        Self {
            api,
            state: RwLock::new(ResourceState::new(ErrorPolicy::KeepData)),
        }
    }

    /// Fetch the catalog
    ///
    /// Returns what this fetch received (empty on failure) so callers can
    /// use the fresh list without reading the state back. A response that
    /// was overtaken by a newer fetch is returned but not stored.
    pub async fn load(&self) -> Vec<Flavor> {
        let ticket = self.state.write().await.begin_fetch();
        tracing::debug!(generation = ticket.generation(), "Loading flavors");

        match self.api.list_flavors().await {
            Ok(flavors) => {
                if !self.state.write().await.fetch_succeeded(ticket, flavors.clone()) {
                    tracing::warn!(generation = ticket.generation(), "Discarded stale flavor list");
                }
                flavors
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load flavors");
                let message = load_error_message("flavors", &e);
                self.state.write().await.fetch_failed(ticket, message);
                Vec::new()
            }
        }
    }

    /// Available flavors as filtered by the server
    ///
    /// A one-off query: the catalog's fetch state is left alone.
    pub async fn fetch_available(&self) -> ClientResult<Vec<Flavor>> {
        self.api.list_flavors_filtered(true).await
    }

    /// Flavors with availability on, in catalog order
    pub async fn available(&self) -> Vec<Flavor> {
        available_flavors(self.state.read().await.data())
    }

    pub async fn is_available(&self, flavor_id: i64) -> bool {
        self.state
            .read()
            .await
            .data()
            .iter()
            .any(|f| f.id == flavor_id && f.available)
    }

    pub async fn flavors(&self) -> Vec<Flavor> {
        self.state.read().await.data().to_vec()
    }

    pub async fn snapshot(&self) -> ResourceState<Flavor> {
        self.state.read().await.clone()
    }
}

/// Pass-through filter over a catalog
pub fn available_flavors(catalog: &[Flavor]) -> Vec<Flavor> {
    catalog.iter().filter(|f| f.available).cloned().collect()
}

/// Message recorded in a fetch state when loading `what` fails
pub(crate) fn load_error_message(what: &str, err: &ClientError) -> String {
    match err.status() {
        Some(status) => format!("Failed to load {} ({})", what, status),
        None => format!("Failed to load {}: {}", what, err),
    }
}
