use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Delivery status. The wire vocabulary keeps the original Portuguese labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "A caminho")]
    InTransit,
    #[serde(rename = "Entregue")]
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InTransit => "A caminho",
            OrderStatus::Delivered => "Entregue",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("status inválido: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A caminho" => Ok(OrderStatus::InTransit),
            "Entregue" => Ok(OrderStatus::Delivered),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "produto")]
    pub product: String,
    pub status: OrderStatus,
}

impl Order {
    /// Applies a partial update; fields absent from `changes` keep their value.
    pub fn apply(&mut self, changes: OrderChanges) {
        if let Some(client) = changes.client {
            self.client = client;
        }
        if let Some(address) = changes.address {
            self.address = address;
        }
        if let Some(product) = changes.product {
            self.product = product;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
    }
}

/// A validated order that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub client: String,
    pub address: String,
    pub product: String,
    pub status: OrderStatus,
}

impl NewOrder {
    pub fn new(
        client: String,
        address: String,
        product: String,
        status: OrderStatus,
    ) -> anyhow::Result<Self> {
        if client.trim().is_empty() {
            anyhow::bail!("cliente vazio");
        }
        if address.trim().is_empty() {
            anyhow::bail!("endereco vazio");
        }
        if product.trim().is_empty() {
            anyhow::bail!("produto vazio");
        }
        Ok(Self {
            client,
            address,
            product,
            status,
        })
    }

    pub fn into_order(self, id: i64) -> Order {
        Order {
            id,
            client: self.client,
            address: self.address,
            product: self.product,
            status: self.status,
        }
    }
}

/// Field-by-field patch for an order; `None` means "leave untouched".
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub client: Option<String>,
    pub address: Option<String>,
    pub product: Option<String>,
    pub status: Option<OrderStatus>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.client.is_none()
            && self.address.is_none()
            && self.product.is_none()
            && self.status.is_none()
    }
}
