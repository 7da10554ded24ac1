use std::sync::Arc;

use tracing::{debug, info};

use crate::convert::convert_users;
use crate::error::{ConnectorError, ProviderOperation};
use crate::provider::ProviderClient;
use crate::traits::ResourceSyncer;
use crate::types::{
    Entitlement, Grant, Page, PageToken, Resource, ResourceId, ResourceType, USER_RESOURCE_TYPE,
};

/// Users are principals only: they own no entitlements and receive grants
/// through groups and roles.
#[derive(Clone)]
pub struct UserSyncer {
    client: Arc<dyn ProviderClient>,
}

impl UserSyncer {
    pub fn new(client: Arc<dyn ProviderClient>) -> Self {
        Self { client }
    }
}

impl ResourceSyncer for UserSyncer {
    fn resource_type(&self) -> &'static ResourceType {
        &USER_RESOURCE_TYPE
    }

    fn list(
        &self,
        _parent: Option<&ResourceId>,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Resource>, ConnectorError> {
        debug!(event = "List", phase = "Fetch", kind = "user");
        let raw = self
            .client
            .list_users()
            .map_err(ConnectorError::provider(ProviderOperation::ListUsers))?;
        let users = convert_users(&raw)?;
        info!(event = "List", phase = "Result", kind = "user", count = users.len());
        Ok(Page::complete(users))
    }

    fn entitlements(
        &self,
        _resource: &Resource,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Entitlement>, ConnectorError> {
        Ok(Page::empty())
    }

    fn grants(
        &self,
        _resource: &Resource,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Grant>, ConnectorError> {
        Ok(Page::empty())
    }
}
