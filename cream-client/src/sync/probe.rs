//! Order status probe
//!
//! One on-demand status lookup keyed by the identifier typed by the
//! operator. The last issued lookup wins: a response from an earlier call
//! that arrives late is dropped.

use std::sync::Arc;

use shared::OrderStatusReport;
use tokio::sync::RwLock;

use crate::{CreamApi, HttpClient};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProbeState {
    /// No lookup performed, or the last error was cleared by a new lookup
    #[default]
    Empty,
    Resolved(OrderStatusReport),
    Errored(String),
}

#[derive(Debug, Default)]
struct ProbeInner {
    /// Contents of the lookup field
    input: String,
    state: ProbeState,
    generation: u64,
}

pub struct StatusProbe<C> {
    api: Arc<CreamApi<C>>,
    inner: RwLock<ProbeInner>,
}

impl<C: HttpClient> StatusProbe<C> {
    pub fn new(api: Arc<CreamApi<C>>) -> Self {
        Self {
            api,
            inner: RwLock::new(ProbeInner::default()),
        }
    }

    pub async fn input(&self) -> String {
        self.inner.read().await.input.clone()
    }

    pub async fn set_input(&self, value: impl Into<String>) {
        self.inner.write().await.input = value.into();
    }

    pub async fn state(&self) -> ProbeState {
        self.inner.read().await.state.clone()
    }

    /// Look up the identifier currently in the lookup field
    pub async fn check_input(&self) -> ProbeState {
        let input = self.input().await;
        self.check(&input).await
    }

    /// Look up one order's status
    ///
    /// Blank input is a no-op. Input that is not a positive integer moves the
    /// probe to `Errored` without issuing a request. Returns the state after
    /// this call (which may be a newer call's state if this one was overtaken).
    pub async fn check(&self, identifier: &str) -> ProbeState {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return self.state().await;
        }

        let (order_id, generation) = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            match parse_positive_id(identifier) {
                Some(id) => {
                    if matches!(inner.state, ProbeState::Errored(_)) {
                        inner.state = ProbeState::Empty;
                    }
                    (id, inner.generation)
                }
                None => {
                    inner.state =
                        ProbeState::Errored("Order id must be a positive integer".to_string());
                    return inner.state.clone();
                }
            }
        };

        tracing::debug!(order_id, generation, "Checking order status");
        let result = self.api.order_status(order_id).await;

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            tracing::debug!(order_id, generation, "Discarded stale status response");
            return inner.state.clone();
        }
        inner.state = match result {
            Ok(report) => ProbeState::Resolved(report),
            Err(e) => {
                tracing::warn!(order_id, error = %e, "Status lookup failed");
                ProbeState::Errored(e.user_message("Could not check the order status"))
            }
        };
        inner.state.clone()
    }
}

/// Positive integer id, as typed into a form field
pub(crate) fn parse_positive_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
