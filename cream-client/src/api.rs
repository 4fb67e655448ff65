//! Typed facade over the ordering API
//!
//! One method per endpoint. Every method returns the raw result; deciding
//! what a failure means for the operator is left to the sync layer.

use shared::{Flavor, FlavorCreate, Order, OrderCreate, OrderStatusReport};

use crate::{ClientResult, HttpClient};

const FLAVORS: &str = "/sabores";
const ORDERS: &str = "/pedidos";

/// Ordering API bound to a transport
#[derive(Debug, Clone)]
pub struct CreamApi<C> {
    http: C,
}

impl<C: HttpClient> CreamApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    // ========== Flavors ==========

    /// `GET /sabores`
    pub async fn list_flavors(&self) -> ClientResult<Vec<Flavor>> {
        self.http.get(FLAVORS).await
    }

    /// `GET /sabores?disponible=<bool>`, filtered by the server
    pub async fn list_flavors_filtered(&self, available: bool) -> ClientResult<Vec<Flavor>> {
        self.http
            .get(&format!("{}?disponible={}", FLAVORS, available))
            .await
    }

    /// `POST /sabores`
    pub async fn create_flavor(&self, input: &FlavorCreate) -> ClientResult<Flavor> {
        self.http.post(FLAVORS, input).await
    }

    // ========== Orders ==========

    /// `GET /pedidos`, ascending by creation
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.http.get(ORDERS).await
    }

    /// `POST /pedidos`
    pub async fn create_order(&self, input: &OrderCreate) -> ClientResult<Order> {
        self.http.post(ORDERS, input).await
    }

    /// `GET /pedidos/{id}`
    pub async fn get_order(&self, id: i64) -> ClientResult<Order> {
        self.http.get(&format!("{}/{}", ORDERS, id)).await
    }

    /// `GET /pedidos/{id}/estado`
    pub async fn order_status(&self, id: i64) -> ClientResult<OrderStatusReport> {
        self.http.get(&format!("{}/{}/estado", ORDERS, id)).await
    }
}
