//! Service implementation for the static stock catalog plugin.

use std::collections::HashMap;

use stock_operation_authz_sdk::{OperationType, Party, PrivilegeGrant};
use tracing::info;
use uuid::Uuid;

use crate::config::StaticStockCatalogPluginConfig;

/// Static stock catalog service.
///
/// Snapshots are fixed at construction. Users listed more than once have
/// their grants concatenated.
#[derive(Debug, Default)]
pub struct Service {
    pub(crate) grants: HashMap<Uuid, Vec<PrivilegeGrant>>,
    pub(crate) operation_types: Vec<OperationType>,
    pub(crate) parties: Vec<Party>,
}

impl Service {
    /// Create a service from configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticStockCatalogPluginConfig) -> Self {
        let mut grants: HashMap<Uuid, Vec<PrivilegeGrant>> = HashMap::new();
        for user in &cfg.users {
            grants
                .entry(user.user_id)
                .or_default()
                .extend(user.grants.iter().cloned());
        }

        info!(
            users = grants.len(),
            operation_types = cfg.operation_types.len(),
            parties = cfg.parties.len(),
            "Loaded static stock catalog"
        );

        Self {
            grants,
            operation_types: cfg.operation_types.clone(),
            parties: cfg.parties.clone(),
        }
    }

    /// Grants held by `user_id`; unknown users hold none.
    #[must_use]
    pub fn user_grants(&self, user_id: Uuid) -> Vec<PrivilegeGrant> {
        self.grants.get(&user_id).cloned().unwrap_or_default()
    }
}
