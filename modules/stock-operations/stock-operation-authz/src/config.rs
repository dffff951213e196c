//! Configuration for the stock operation `AuthZ` module.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use stock_operation_authz_sdk::{operation_codes, privileges};

use crate::domain::{CreationPolicy, PermissionPrivileges};

/// Environment variable prefix, e.g. `STOCK_OPERATION_AUTHZ__MUTATE_PRIVILEGE`.
pub const ENV_PREFIX: &str = "STOCK_OPERATION_AUTHZ__";

/// Configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StockOperationAuthzConfig {
    /// Privilege granting access to the stock operations screens.
    pub view_privilege: String,

    /// Privilege required to create and edit stock operations.
    pub mutate_privilege: String,

    /// Privilege required to approve stock operations.
    pub approve_privilege: String,

    /// Privilege required to receive transferred items.
    pub receive_items_privilege: String,

    /// When `false`, stock issues can only be raised against a requisition
    /// and are never offered as creatable.
    pub allow_stock_issue_without_requisition: bool,

    /// Operation type codes treated as stock issues.
    pub stock_issue_operation_codes: Vec<String>,
}

impl Default for StockOperationAuthzConfig {
    fn default() -> Self {
        Self {
            view_privilege: privileges::VIEW_STOCK_OPERATIONS.to_owned(),
            mutate_privilege: privileges::MUTATE_STOCK_OPERATIONS.to_owned(),
            approve_privilege: privileges::APPROVE_STOCK_OPERATIONS.to_owned(),
            receive_items_privilege: privileges::RECEIVE_ITEMS.to_owned(),
            allow_stock_issue_without_requisition: true,
            stock_issue_operation_codes: vec![operation_codes::STOCK_ISSUE.to_owned()],
        }
    }
}

impl StockOperationAuthzConfig {
    /// Load configuration from defaults, an optional YAML file and
    /// `STOCK_OPERATION_AUTHZ__*` environment variables, in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed, or if a
    /// value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file_exact(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX)).extract()
    }

    #[must_use]
    pub fn creation_policy(&self) -> CreationPolicy {
        CreationPolicy {
            mutate_privilege: self.mutate_privilege.clone(),
            allow_stock_issue_without_requisition: self.allow_stock_issue_without_requisition,
            stock_issue_codes: self.stock_issue_operation_codes.clone(),
        }
    }

    #[must_use]
    pub fn permission_privileges(&self) -> PermissionPrivileges {
        PermissionPrivileges {
            view: self.view_privilege.clone(),
            mutate: self.mutate_privilege.clone(),
            approve: self.approve_privilege.clone(),
            receive_items: self.receive_items_privilege.clone(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_use_well_known_privileges() {
        let cfg = StockOperationAuthzConfig::default();
        let policy = cfg.creation_policy();

        assert_eq!(policy.mutate_privilege, privileges::MUTATE_STOCK_OPERATIONS);
        assert!(policy.allow_stock_issue_without_requisition);
        assert_eq!(policy, CreationPolicy::default());
        assert_eq!(cfg.permission_privileges(), PermissionPrivileges::default());
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "mutate_privilege: \"Task: custom.mutate\"\n\
             allow_stock_issue_without_requisition: false\n\
             stock_issue_operation_codes: [stockissue, issue]"
        )
        .unwrap();

        let cfg = StockOperationAuthzConfig::load(Some(file.path())).unwrap();

        assert_eq!(cfg.mutate_privilege, "Task: custom.mutate");
        assert!(!cfg.allow_stock_issue_without_requisition);
        assert_eq!(cfg.stock_issue_operation_codes, vec!["stockissue", "issue"]);
        // Untouched keys keep their defaults.
        assert_eq!(cfg.approve_privilege, privileges::APPROVE_STOCK_OPERATIONS);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mutate_privilege_typo: x").unwrap();

        assert!(StockOperationAuthzConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stock-authz.yaml");

        assert!(StockOperationAuthzConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn env_overrides_yaml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "stock-authz.yaml",
                "allow_stock_issue_without_requisition: true\n\
                 approve_privilege: \"Task: file.approve\"",
            )?;
            jail.set_env(
                "STOCK_OPERATION_AUTHZ__ALLOW_STOCK_ISSUE_WITHOUT_REQUISITION",
                false,
            );
            jail.set_env("STOCK_OPERATION_AUTHZ__MUTATE_PRIVILEGE", "Task: env.mutate");

            let cfg = StockOperationAuthzConfig::load(Some(Path::new("stock-authz.yaml")))?;

            assert!(!cfg.allow_stock_issue_without_requisition);
            assert_eq!(cfg.mutate_privilege, "Task: env.mutate");
            assert_eq!(cfg.approve_privilege, "Task: file.approve");
            Ok(())
        });
    }

    #[test]
    fn deserializes_partial_section() {
        let cfg: StockOperationAuthzConfig =
            serde_json::from_str(r#"{"view_privilege": "App: custom"}"#).unwrap();

        assert_eq!(cfg.view_privilege, "App: custom");
        assert_eq!(cfg.mutate_privilege, privileges::MUTATE_STOCK_OPERATIONS);
    }
}
