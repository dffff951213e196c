//! Domain layer for the static stock catalog plugin.

mod client;
pub mod service;

pub use service::Service;
