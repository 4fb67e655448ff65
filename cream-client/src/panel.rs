//! Operator panel
//!
//! Hosts the three synced resources, the notification queue and the two
//! creation forms, and implements the submission controllers that tie them
//! together:
//!
//! - a write is validated first; a validation failure issues no request
//!   and pushes no notification
//! - a transport failure pushes an error notification and leaves every list
//!   untouched
//! - a success pushes a success notification, resets the form and then
//!   reloads the affected collection (strictly after the write resolved)

use std::sync::Arc;

use shared::{Flavor, FlavorCreate, Order, OrderCreate, OrderSize};
use tokio::sync::RwLock;

use crate::sync::probe::parse_positive_id;
use crate::sync::{FlavorCatalog, NotificationQueue, OrderCollection, ProbeState, StatusProbe};
use crate::{ClientConfig, ClientError, ClientResult, CreamApi, HttpClient, NetworkHttpClient};

/// Flavor creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorForm {
    pub name: String,
    pub description: String,
    pub available: bool,
}

impl Default for FlavorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            available: true,
        }
    }
}

impl FlavorForm {
    /// Required-field check, producing the request payload
    pub fn validate(&self) -> ClientResult<FlavorCreate> {
        let input = FlavorCreate {
            name: self.name.clone(),
            description: self.description.clone(),
            available: self.available,
        };
        validate_flavor(&input)?;
        Ok(input)
    }
}

/// Order creation form
///
/// `flavor_id` holds the selected option as text; it is coerced to a number
/// on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub customer: String,
    pub flavor_id: String,
    pub size: OrderSize,
}

impl OrderForm {
    /// Required-field check against the flavors currently offered
    pub fn validate(&self, available: &[Flavor]) -> ClientResult<OrderCreate> {
        let flavor_id = parse_positive_id(&self.flavor_id)
            .ok_or_else(|| ClientError::validation("Select an available flavor"))?;
        let input = OrderCreate {
            customer: self.customer.clone(),
            flavor_id,
            size: self.size,
        };
        validate_order(&input, available)?;
        Ok(input)
    }
}

fn validate_flavor(input: &FlavorCreate) -> ClientResult<()> {
    if input.name.trim().is_empty() {
        return Err(ClientError::validation("Flavor name is required"));
    }
    if input.description.trim().is_empty() {
        return Err(ClientError::validation("Flavor description is required"));
    }
    Ok(())
}

fn validate_order(input: &OrderCreate, available: &[Flavor]) -> ClientResult<()> {
    if input.customer.trim().is_empty() {
        return Err(ClientError::validation("Customer name is required"));
    }
    if !available.iter().any(|f| f.id == input.flavor_id) {
        return Err(ClientError::validation(format!(
            "Flavor {} is not available",
            input.flavor_id
        )));
    }
    Ok(())
}

pub struct Panel<C> {
    api: Arc<CreamApi<C>>,
    flavors: FlavorCatalog<C>,
    orders: OrderCollection<C>,
    probe: StatusProbe<C>,
    notifications: NotificationQueue,
    flavor_form: RwLock<FlavorForm>,
    order_form: RwLock<OrderForm>,
}

impl Panel<NetworkHttpClient> {
    /// Panel talking to the API at `config.base_url`
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?, config))
    }
}

impl<C: HttpClient> Panel<C> {
    pub fn new(http: C, config: &ClientConfig) -> Self {
        let api = Arc::new(CreamApi::new(http));
        Self {
            flavors: FlavorCatalog::new(api.clone()),
            orders: OrderCollection::new(api.clone()),
            probe: StatusProbe::new(api.clone()),
            api,
            notifications: NotificationQueue::new(config.notification_ttl),
            flavor_form: RwLock::new(FlavorForm::default()),
            order_form: RwLock::new(OrderForm::default()),
        }
    }

    pub fn flavors(&self) -> &FlavorCatalog<C> {
        &self.flavors
    }

    pub fn orders(&self) -> &OrderCollection<C> {
        &self.orders
    }

    pub fn probe(&self) -> &StatusProbe<C> {
        &self.probe
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Initial load of both collections; they complete in either order
    pub async fn mount(&self) {
        futures::join!(self.flavors.load(), self.orders.load());
    }

    // ========== Forms ==========

    pub async fn flavor_form(&self) -> FlavorForm {
        self.flavor_form.read().await.clone()
    }

    pub async fn update_flavor_form(&self, f: impl FnOnce(&mut FlavorForm)) {
        f(&mut *self.flavor_form.write().await);
    }

    pub async fn order_form(&self) -> OrderForm {
        self.order_form.read().await.clone()
    }

    pub async fn update_order_form(&self, f: impl FnOnce(&mut OrderForm)) {
        f(&mut *self.order_form.write().await);
    }

    pub async fn submit_flavor_form(&self) -> ClientResult<Flavor> {
        let input = self.flavor_form().await.validate()?;
        self.create_flavor(input).await
    }

    pub async fn submit_order_form(&self) -> ClientResult<Order> {
        let available = self.flavors.available().await;
        let input = self.order_form().await.validate(&available)?;
        self.create_order(input).await
    }

    // ========== Submission controllers ==========

    pub async fn create_flavor(&self, input: FlavorCreate) -> ClientResult<Flavor> {
        validate_flavor(&input)?;

        match self.api.create_flavor(&input).await {
            Ok(flavor) => {
                tracing::info!(flavor_id = flavor.id, name = %flavor.name, "Flavor created");
                self.notifications.success("Flavor created successfully");
                *self.flavor_form.write().await = FlavorForm::default();
                self.flavors.load().await;
                Ok(flavor)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Flavor creation failed");
                self.notifications
                    .error(e.user_message("Could not create the flavor"));
                Err(e)
            }
        }
    }

    /// Only flavors in the current available view may be ordered
    pub async fn create_order(&self, input: OrderCreate) -> ClientResult<Order> {
        let available = self.flavors.available().await;
        validate_order(&input, &available)?;

        match self.api.create_order(&input).await {
            Ok(order) => {
                tracing::info!(order_id = order.id, status = %order.status, "Order created");
                self.notifications.success(format!(
                    "Order {} created with status {}",
                    order.id, order.status
                ));
                self.probe.set_input(order.id.to_string()).await;
                *self.order_form.write().await = OrderForm::default();
                self.orders.load().await;
                Ok(order)
            }
            Err(e) => {
                tracing::warn!(flavor_id = input.flavor_id, error = %e, "Order creation failed");
                self.notifications
                    .error(e.user_message("Could not register the order"));
                Err(e)
            }
        }
    }

    /// Fetch one full order by the identifier typed by the operator
    pub async fn order(&self, identifier: &str) -> ClientResult<Order> {
        let order_id = parse_positive_id(identifier)
            .ok_or_else(|| ClientError::validation("Order id must be a positive integer"))?;
        self.api.get_order(order_id).await
    }

    /// Probe the identifier in the lookup field
    pub async fn check_pending_status(&self) -> ProbeState {
        self.probe.check_input().await
    }

    /// Type an identifier into the lookup field and probe it
    pub async fn check_status(&self, identifier: &str) -> ProbeState {
        self.probe.set_input(identifier).await;
        self.probe.check(identifier).await
    }
}
