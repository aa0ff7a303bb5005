//! HTTP access to the Tarjama translation backend.
//!
//! This crate is the only place that performs network I/O.

pub mod http_gateway;
mod wire;

pub use http_gateway::HttpGateway;
