use std::sync::Arc;

use tracing::{debug, info};

use crate::convert::convert_roles;
use crate::correlate::{BindingCorrelator, NameTokenCorrelator};
use crate::error::{ConnectorError, ProviderOperation};
use crate::provider::ProviderClient;
use crate::traits::ResourceSyncer;
use crate::types::{
    Entitlement, Grant, MEMBER_ENTITLEMENT, Page, PageToken, ROLE_RESOURCE_TYPE, Resource,
    ResourceId, ResourceType,
};

use super::{candidate_users, principal_ids};

/// Roles and role bindings of one namespace.
#[derive(Clone)]
pub struct RoleSyncer {
    namespace: String,
    client: Arc<dyn ProviderClient>,
    correlator: Arc<dyn BindingCorrelator>,
}

impl RoleSyncer {
    pub fn new(namespace: impl Into<String>, client: Arc<dyn ProviderClient>) -> Self {
        Self {
            namespace: namespace.into(),
            client,
            correlator: Arc::new(NameTokenCorrelator),
        }
    }

    /// Replace the binding-to-role matching strategy.
    pub fn with_correlator(mut self, correlator: Arc<dyn BindingCorrelator>) -> Self {
        self.correlator = correlator;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl ResourceSyncer for RoleSyncer {
    fn resource_type(&self) -> &'static ResourceType {
        &ROLE_RESOURCE_TYPE
    }

    fn list(
        &self,
        _parent: Option<&ResourceId>,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Resource>, ConnectorError> {
        debug!(
            event = "List",
            phase = "Fetch",
            kind = "role",
            namespace = self.namespace.as_str()
        );
        let raw = self
            .client
            .list_roles(&self.namespace)
            .map_err(ConnectorError::provider(ProviderOperation::ListRoles))?;
        let roles = convert_roles(&raw)?;
        info!(
            event = "List",
            phase = "Result",
            kind = "role",
            namespace = self.namespace.as_str(),
            count = roles.len()
        );
        Ok(Page::complete(roles))
    }

    fn entitlements(
        &self,
        resource: &Resource,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Entitlement>, ConnectorError> {
        let name = resource.display_name();
        Ok(Page::complete(vec![Entitlement::assignment(
            resource,
            MEMBER_ENTITLEMENT,
            format!("{name} Role member"),
            format!("Access to {name} role in {} namespace", self.namespace),
        )]))
    }

    // `resource` is the role, not a user.
    fn grants(
        &self,
        resource: &Resource,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Grant>, ConnectorError> {
        let users = candidate_users(self.client.as_ref())?;

        debug!(
            event = "Grants",
            phase = "Fetch",
            role = resource.id().to_string(),
            namespace = self.namespace.as_str()
        );
        let bindings = self
            .client
            .list_role_bindings(&self.namespace)
            .map_err(ConnectorError::provider(ProviderOperation::ListRoleBindings))?;

        let grants = self.correlator.correlate(resource, &bindings, &users);
        info!(
            event = "Grants",
            phase = "Result",
            role = resource.id().to_string(),
            bindings = bindings.len(),
            count = grants.len(),
            principals = principal_ids(&grants)
        );
        Ok(Page::complete(grants))
    }
}
