use std::sync::Arc;

use tracing::debug;

use crate::config::ConnectorConfig;
use crate::correlate::BindingCorrelator;
use crate::error::ConnectorError;
use crate::provider::ProviderClient;
use crate::syncers::{GroupSyncer, RoleSyncer, UserSyncer};
use crate::traits::ResourceSyncer;
use crate::types::{ResourceKind, ResourceType};

/// The access graph handle. Cloneable and thread-safe; it holds no state
/// beyond configuration, so concurrent queries never interfere.
#[derive(Clone)]
pub struct AccessGraph {
    config: ConnectorConfig,
    users: UserSyncer,
    groups: GroupSyncer,
    roles: RoleSyncer,
}

impl AccessGraph {
    /// Validate `config` and wire one syncer per resource kind to `client`.
    pub fn new(
        config: ConnectorConfig,
        client: Arc<dyn ProviderClient>,
    ) -> Result<Self, ConnectorError> {
        config.validate()?;
        debug!(
            event = "Connector",
            phase = "Init",
            namespace = config.namespace.as_str(),
            kube_config = ?config.kube_config
        );

        Ok(Self {
            users: UserSyncer::new(Arc::clone(&client)),
            groups: GroupSyncer::new(Arc::clone(&client)),
            roles: RoleSyncer::new(config.namespace.clone(), client),
            config,
        })
    }

    /// Swap the strategy used to match role bindings to roles.
    pub fn with_binding_correlator(mut self, correlator: Arc<dyn BindingCorrelator>) -> Self {
        self.roles = self.roles.with_correlator(correlator);
        self
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Descriptors of every resource kind, in user, group, role order.
    pub fn resource_types(&self) -> Vec<&'static ResourceType> {
        self.syncers()
            .into_iter()
            .map(|syncer| syncer.resource_type())
            .collect()
    }

    /// Every syncer, in user, group, role order.
    pub fn syncers(&self) -> Vec<&dyn ResourceSyncer> {
        let syncers: [&dyn ResourceSyncer; 3] = [&self.users, &self.groups, &self.roles];
        syncers.to_vec()
    }

    pub fn syncer(&self, kind: ResourceKind) -> &dyn ResourceSyncer {
        match kind {
            ResourceKind::User => &self.users,
            ResourceKind::Group => &self.groups,
            ResourceKind::Role => &self.roles,
        }
    }

    pub fn users(&self) -> &UserSyncer {
        &self.users
    }

    pub fn groups(&self) -> &GroupSyncer {
        &self.groups
    }

    pub fn roles(&self) -> &RoleSyncer {
        &self.roles
    }
}

#[cfg(test)]
mod tests;
