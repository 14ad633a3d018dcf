//! pedidos-types: domain model and repository ports for the Pedidos API.

pub mod domain;
pub mod ports;
