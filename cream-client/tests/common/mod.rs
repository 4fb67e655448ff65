// cream-client/tests/common/mod.rs
// In-process mock of the ordering API, served through OneshotHttpClient

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use cream_client::{
    ClientConfig, Flavor, FlavorCreate, OneshotHttpClient, Order, OrderCreate, OrderSize,
    OrderStatus, Panel,
};
use serde_json::json;
use tokio::sync::{mpsc, oneshot};

/// A canned error response: status plus raw body
#[derive(Debug, Clone)]
pub struct Rejection {
    pub status: StatusCode,
    pub body: String,
}

impl Rejection {
    pub fn detail(status: StatusCode, detail: &str) -> Self {
        Self {
            status,
            body: json!({ "detail": detail }).to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

#[derive(Default)]
pub struct MockState {
    pub flavors: Mutex<Vec<Flavor>>,
    pub orders: Mutex<Vec<Order>>,

    pub fail_flavor_list: AtomicBool,
    pub fail_order_list: AtomicBool,
    pub reject_flavor_create: Mutex<Option<Rejection>>,
    pub reject_order_create: Mutex<Option<Rejection>>,

    pub flavor_gets: AtomicUsize,
    pub flavor_posts: AtomicUsize,
    pub order_gets: AtomicUsize,
    pub order_posts: AtomicUsize,
    pub status_gets: AtomicUsize,

    /// Each GET /sabores (GET /pedidos, status lookup) takes the next gate
    /// and waits on it before answering
    pub flavor_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    pub order_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    pub status_gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    /// Signalled when a gated request has captured its response
    pub arrivals: Mutex<Option<mpsc::UnboundedSender<&'static str>>>,
}

#[derive(Clone, Default)]
pub struct MockApi(pub Arc<MockState>);

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog from the reference scenario: Vanilla available, Choco not
    pub fn with_reference_catalog() -> Self {
        let api = Self::new();
        api.add_flavor("Vanilla", true);
        api.add_flavor("Choco", false);
        api
    }

    pub fn add_flavor(&self, name: &str, available: bool) -> Flavor {
        let mut flavors = self.0.flavors.lock().unwrap();
        let flavor = Flavor {
            id: flavors.len() as i64 + 1,
            name: name.to_string(),
            description: "d".to_string(),
            available,
        };
        flavors.push(flavor.clone());
        flavor
    }

    pub fn add_order(&self, customer: &str, flavor_id: i64) -> Order {
        let mut orders = self.0.orders.lock().unwrap();
        let order = Order {
            id: orders.len() as i64 + 1,
            customer: customer.to_string(),
            flavor_id,
            size: OrderSize::Cup,
            status: OrderStatus::Pending,
        };
        orders.push(order.clone());
        order
    }

    pub fn set_status(&self, order_id: i64, status: OrderStatus) {
        let mut orders = self.0.orders.lock().unwrap();
        if let Some(order) = orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
    }

    pub fn track_arrivals(&self) -> mpsc::UnboundedReceiver<&'static str> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.0.arrivals.lock().unwrap() = Some(tx);
        rx
    }

    pub fn gate_flavors(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.0.flavor_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn gate_orders(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.0.order_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn gate_status(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.0.status_gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/sabores", get(list_flavors).post(create_flavor))
            .route("/pedidos", get(list_orders).post(create_order))
            .route("/pedidos/{id}", get(get_order))
            .route("/pedidos/{id}/estado", get(order_status))
            .with_state(self.clone())
    }

    pub fn panel(&self) -> Panel<OneshotHttpClient> {
        Panel::new(OneshotHttpClient::new(self.router()), &ClientConfig::default())
    }

    async fn wait_gate(&self, gates: &Mutex<VecDeque<oneshot::Receiver<()>>>, name: &'static str) {
        let gate = gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            if let Some(tx) = self.0.arrivals.lock().unwrap().as_ref() {
                let _ = tx.send(name);
            }
            let _ = gate.await;
        }
    }
}

async fn list_flavors(
    State(api): State<MockApi>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    api.0.flavor_gets.fetch_add(1, Ordering::SeqCst);
    let failing = api.0.fail_flavor_list.load(Ordering::SeqCst);
    let mut flavors = api.0.flavors.lock().unwrap().clone();
    if let Some(available) = query.get("disponible").and_then(|v| v.parse::<bool>().ok()) {
        flavors.retain(|f| f.available == available);
    }
    api.wait_gate(&api.0.flavor_gates, "flavors").await;

    if failing {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(flavors).into_response()
}

async fn create_flavor(State(api): State<MockApi>, Json(input): Json<FlavorCreate>) -> Response {
    api.0.flavor_posts.fetch_add(1, Ordering::SeqCst);
    if let Some(rejection) = api.0.reject_flavor_create.lock().unwrap().clone() {
        return rejection.into_response();
    }
    let mut flavors = api.0.flavors.lock().unwrap();
    let flavor = Flavor {
        id: flavors.len() as i64 + 1,
        name: input.name,
        description: input.description,
        available: input.available,
    };
    flavors.push(flavor.clone());
    (StatusCode::CREATED, Json(flavor)).into_response()
}

async fn list_orders(State(api): State<MockApi>) -> Response {
    api.0.order_gets.fetch_add(1, Ordering::SeqCst);
    let failing = api.0.fail_order_list.load(Ordering::SeqCst);
    let orders = api.0.orders.lock().unwrap().clone();
    api.wait_gate(&api.0.order_gates, "orders").await;

    if failing {
        return Rejection::raw(StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }
    Json(orders).into_response()
}

async fn create_order(State(api): State<MockApi>, Json(input): Json<OrderCreate>) -> Response {
    api.0.order_posts.fetch_add(1, Ordering::SeqCst);
    if let Some(rejection) = api.0.reject_order_create.lock().unwrap().clone() {
        return rejection.into_response();
    }
    let flavor_ok = api
        .0
        .flavors
        .lock()
        .unwrap()
        .iter()
        .any(|f| f.id == input.flavor_id && f.available);
    if !flavor_ok {
        return Rejection::detail(
            StatusCode::BAD_REQUEST,
            "El sabor solicitado no existe o no esta disponible.",
        )
        .into_response();
    }
    let mut orders = api.0.orders.lock().unwrap();
    let order = Order {
        id: orders.len() as i64 + 1,
        customer: input.customer,
        flavor_id: input.flavor_id,
        size: input.size,
        status: OrderStatus::Pending,
    };
    orders.push(order.clone());
    (StatusCode::CREATED, Json(order)).into_response()
}

fn find_order(api: &MockApi, id: i64) -> Option<Order> {
    api.0.orders.lock().unwrap().iter().find(|o| o.id == id).cloned()
}

async fn get_order(State(api): State<MockApi>, Path(id): Path<i64>) -> Response {
    match find_order(&api, id) {
        Some(order) => Json(order).into_response(),
        None => Rejection::detail(StatusCode::NOT_FOUND, "Pedido no encontrado.").into_response(),
    }
}

async fn order_status(State(api): State<MockApi>, Path(id): Path<i64>) -> Response {
    api.0.status_gets.fetch_add(1, Ordering::SeqCst);
    let found = find_order(&api, id);
    api.wait_gate(&api.0.status_gates, "status").await;

    match found {
        Some(order) => Json(json!({ "pedido_id": order.id, "estado": order.status })).into_response(),
        None => Rejection::detail(StatusCode::NOT_FOUND, "Pedido no encontrado.").into_response(),
    }
}
