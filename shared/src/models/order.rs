//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

/// Serving size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderSize {
    #[serde(rename = "cono")]
    Cone,
    #[default]
    #[serde(rename = "vaso")]
    Cup,
    #[serde(rename = "litro")]
    Liter,
}

impl OrderSize {
    pub const ALL: [OrderSize; 3] = [OrderSize::Cone, OrderSize::Cup, OrderSize::Liter];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cone => "cono",
            Self::Cup => "vaso",
            Self::Liter => "litro",
        }
    }
}

impl fmt::Display for OrderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderSize {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "order size",
                value: s.to_string(),
            })
    }
}

/// Order status lifecycle: pending -> preparing -> delivered
///
/// Only the remote system moves an order forward; variants are declared in
/// lifecycle order so `Ord` follows the lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "preparando")]
    Preparing,
    #[serde(rename = "entregado")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Delivered,
    ];

    /// Wire name, also used as the display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Preparing => "preparando",
            Self::Delivered => "entregado",
        }
    }

    /// Recommended use of the status, shown in the reference table
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Pending => "Just taken, not yet in production.",
            Self::Preparing => "In the kitchen or on the road; notify when delivery is close.",
            Self::Delivered => "Delivered, ready to close.",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "order status",
                value: s.to_string(),
            })
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "cliente")]
    pub customer: String,
    /// Flavor reference
    #[serde(rename = "sabor_id")]
    pub flavor_id: i64,
    #[serde(rename = "tamano")]
    pub size: OrderSize,
    #[serde(rename = "estado", default)]
    pub status: OrderStatus,
}

/// Create order payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "cliente")]
    pub customer: String,
    #[serde(rename = "sabor_id")]
    pub flavor_id: i64,
    #[serde(rename = "tamano")]
    pub size: OrderSize,
}

/// Response of `GET /pedidos/{id}/estado`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusReport {
    #[serde(rename = "pedido_id")]
    pub order_id: i64,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
}

/// One row of the static status reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusReferenceRow {
    pub status: OrderStatus,
    pub label: &'static str,
    pub hint: &'static str,
}

/// The status reference table, in lifecycle order
pub fn status_reference() -> Vec<StatusReferenceRow> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| StatusReferenceRow {
            status,
            label: status.label(),
            hint: status.hint(),
        })
        .collect()
}
