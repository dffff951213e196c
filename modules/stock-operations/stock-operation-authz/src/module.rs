//! Stock operation `AuthZ` module.

use std::sync::{Arc, OnceLock};

use stock_operation_authz_sdk::{StockCatalogPluginClient, StockOperationAuthzClient};
use tracing::info;

use crate::config::StockOperationAuthzConfig;
use crate::domain::{CatalogSourceSlot, Service, StockOperationAuthzLocalClient};

/// Stock operation `AuthZ` module.
///
/// This module:
/// 1. Builds the service from configuration
/// 2. Hands out the public client
/// 3. Accepts a catalog source, before or after `init`
///
/// Calls made before a catalog source is registered fail with
/// `NoCatalogSource`.
pub struct StockOperationAuthzModule {
    source: CatalogSourceSlot,
    service: OnceLock<Arc<Service>>,
}

impl Default for StockOperationAuthzModule {
    fn default() -> Self {
        Self {
            source: Arc::new(OnceLock::new()),
            service: OnceLock::new(),
        }
    }
}

impl StockOperationAuthzModule {
    pub const MODULE_NAME: &'static str = "stock-operation-authz";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the catalog source the service reads snapshots from.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog source is already registered.
    pub fn register_catalog_source(
        &self,
        source: Arc<dyn StockCatalogPluginClient>,
    ) -> anyhow::Result<()> {
        self.source
            .set(source)
            .map_err(|_| anyhow::anyhow!("{} catalog source already registered", Self::MODULE_NAME))?;
        info!("Registered catalog source for {}", Self::MODULE_NAME);
        Ok(())
    }

    /// Initialize the module and return its public client.
    ///
    /// # Errors
    ///
    /// Returns an error if the module is already initialized.
    #[tracing::instrument(skip_all, fields(mutate_privilege = %cfg.mutate_privilege))]
    pub fn init(
        &self,
        cfg: &StockOperationAuthzConfig,
    ) -> anyhow::Result<Arc<dyn StockOperationAuthzClient>> {
        info!(
            allow_stock_issue_without_requisition = cfg.allow_stock_issue_without_requisition,
            "Initializing {} module",
            Self::MODULE_NAME
        );

        let svc = Arc::new(Service::new(Arc::clone(&self.source), cfg));
        self.service
            .set(svc.clone())
            .map_err(|_| anyhow::anyhow!("{} module already initialized", Self::MODULE_NAME))?;

        let api: Arc<dyn StockOperationAuthzClient> =
            Arc::new(StockOperationAuthzLocalClient::new(svc));

        info!("{} module initialized successfully", Self::MODULE_NAME);

        Ok(api)
    }
}
