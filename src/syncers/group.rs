use std::sync::Arc;

use tracing::{debug, info};

use crate::convert::convert_groups;
use crate::correlate::match_users_to_group;
use crate::error::{ConnectorError, ProviderOperation};
use crate::provider::ProviderClient;
use crate::traits::ResourceSyncer;
use crate::types::{
    Entitlement, GROUP_RESOURCE_TYPE, Grant, MEMBER_ENTITLEMENT, Page, PageToken, Resource,
    ResourceId, ResourceType,
};

use super::{candidate_users, principal_ids};

#[derive(Clone)]
pub struct GroupSyncer {
    client: Arc<dyn ProviderClient>,
}

impl GroupSyncer {
    pub fn new(client: Arc<dyn ProviderClient>) -> Self {
        Self { client }
    }
}

impl ResourceSyncer for GroupSyncer {
    fn resource_type(&self) -> &'static ResourceType {
        &GROUP_RESOURCE_TYPE
    }

    fn list(
        &self,
        _parent: Option<&ResourceId>,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Resource>, ConnectorError> {
        debug!(event = "List", phase = "Fetch", kind = "group");
        let raw = self
            .client
            .list_groups()
            .map_err(ConnectorError::provider(ProviderOperation::ListGroups))?;
        let groups = convert_groups(&raw)?;
        info!(event = "List", phase = "Result", kind = "group", count = groups.len());
        Ok(Page::complete(groups))
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
            format!("{name} Group member"),
            format!("Access to {name} group"),
        )]))
    }

    fn grants(
        &self,
        resource: &Resource,
        _page_token: Option<&PageToken>,
    ) -> Result<Page<Grant>, ConnectorError> {
        let users = candidate_users(self.client.as_ref())?;

        debug!(
            event = "Grants",
            phase = "Fetch",
            group = resource.id().to_string()
        );
        let raw_groups = self
            .client
            .list_groups()
            .map_err(ConnectorError::provider(ProviderOperation::ListGroups))?;

        let grants = match_users_to_group(resource, &raw_groups, &users);
        info!(
            event = "Grants",
            phase = "Result",
            group = resource.id().to_string(),
            count = grants.len(),
            principals = principal_ids(&grants)
        );
        Ok(Page::complete(grants))
    }
}
