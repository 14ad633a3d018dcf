//! pedidos-hex: hexagonal Pedidos API library (core + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use pedidos_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
