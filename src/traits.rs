use std::collections::BTreeMap;

use crate::error::ConnectorError;
use crate::provider::ObjectMeta;
use crate::types::{
    Entitlement, Grant, Page, PageToken, ProfileValue, Resource, ResourceId, ResourceKind,
    ResourceType,
};

/// Anything the provider lists that becomes one normalized [`Resource`],
/// e.g. a user, a group or a namespaced role.
pub trait IntoResource {
    /// The kind of resource this record becomes.
    fn resource_kind() -> ResourceKind;

    /// Object metadata shared by every provider record.
    fn metadata(&self) -> &ObjectMeta;

    /// Profile entries: name, generated name and the annotation map verbatim.
    fn resource_profile(&self) -> BTreeMap<String, ProfileValue> {
        let meta = self.metadata();
        BTreeMap::from([
            ("name".to_string(), ProfileValue::from(meta.name.as_str())),
            (
                "generate_name".to_string(),
                ProfileValue::from(meta.generate_name.as_str()),
            ),
            (
                "annotations".to_string(),
                ProfileValue::Map(meta.annotations.clone()),
            ),
        ])
    }

    /// Build the resource. Field access is zero-value safe, so the default
    /// never fails; the error channel stays for records that can.
    fn to_resource(&self) -> Result<Resource, ConnectorError> {
        let meta = self.metadata();
        let resource = self.resource_profile().into_iter().fold(
            Resource::new(Self::resource_kind(), meta.uid.as_str(), meta.name.as_str()),
            |res, (k, v)| res.with_profile(k, v),
        );
        Ok(resource)
    }
}

/// Per-kind query surface polled by the plugin harness.
pub trait ResourceSyncer: Send + Sync {
    /// Static descriptor for the kind this syncer serves.
    fn resource_type(&self) -> &'static ResourceType;

    /// List every instance of the kind.
    fn list(
        &self,
        parent: Option<&ResourceId>,
        page_token: Option<&PageToken>,
    ) -> Result<Page<Resource>, ConnectorError>;

    /// Entitlements owned by `resource`.
    fn entitlements(
        &self,
        resource: &Resource,
        page_token: Option<&PageToken>,
    ) -> Result<Page<Entitlement>, ConnectorError>;

    /// Grants of the entitlements owned by `resource`.
    fn grants(
        &self,
        resource: &Resource,
        page_token: Option<&PageToken>,
    ) -> Result<Page<Grant>, ConnectorError>;
}
