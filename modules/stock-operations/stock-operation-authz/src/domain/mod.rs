//! Domain layer for the stock operation `AuthZ` module.

pub mod error;
pub mod local_client;
pub mod resolver;
pub mod service;


pub use error::DomainError;
pub use local_client::StockOperationAuthzLocalClient;
pub use resolver::{CreationPolicy, PermissionPrivileges};
pub use service::{CatalogSourceSlot, Service};
