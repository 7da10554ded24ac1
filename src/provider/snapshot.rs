use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConnectorError, ProviderError};
use crate::loader;

use super::ProviderClient;
use super::records::{RawGroup, RawRole, RawRoleBinding, RawUser};

/// A frozen copy of the provider state. Users and groups are cluster scoped,
/// roles and role bindings are keyed by namespace.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSnapshot {
    pub users: Vec<RawUser>,
    pub groups: Vec<RawGroup>,
    pub roles: BTreeMap<String, Vec<RawRole>>,
    pub role_bindings: BTreeMap<String, Vec<RawRoleBinding>>,
}

/// Serves listings out of a [`ProviderSnapshot`].
#[derive(Debug, Default, Clone)]
pub struct SnapshotProvider {
    snapshot: ProviderSnapshot,
}

impl SnapshotProvider {
    pub fn new(snapshot: ProviderSnapshot) -> Self {
        Self { snapshot }
    }

    /// Parse a JSON snapshot document.
    pub fn from_json_str(text: &str) -> Result<Self, ConnectorError> {
        Ok(Self::new(loader::load_snapshot(text)?))
    }

    pub fn snapshot(&self) -> &ProviderSnapshot {
        &self.snapshot
    }
}

impl ProviderClient for SnapshotProvider {
    fn list_users(&self) -> Result<Vec<RawUser>, ProviderError> {
        Ok(self.snapshot.users.clone())
    }

    fn list_groups(&self) -> Result<Vec<RawGroup>, ProviderError> {
        Ok(self.snapshot.groups.clone())
    }

    // An unknown namespace lists as empty, like the cluster API does.
    fn list_roles(&self, namespace: &str) -> Result<Vec<RawRole>, ProviderError> {
        Ok(self
            .snapshot
            .roles
            .get(namespace)
            .cloned()
            .unwrap_or_default())
    }

    fn list_role_bindings(&self, namespace: &str) -> Result<Vec<RawRoleBinding>, ProviderError> {
        Ok(self
            .snapshot
            .role_bindings
            .get(namespace)
            .cloned()
            .unwrap_or_default())
    }
}
