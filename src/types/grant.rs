//! Grants: a principal holding an entitlement on a resource.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entitlement::entitlement_id;
use super::resource::{Resource, ResourceId};

/// Points at an entitlement by owning resource and slug.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct EntitlementRef {
    pub resource: ResourceId,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Grant {
    /// `<entitlement id>:<principal type>:<principal id>`
    pub id: String,
    pub entitlement: EntitlementRef,
    pub principal: ResourceId,
}

impl Grant {
    pub fn new(resource: &Resource, slug: &str, principal: &ResourceId) -> Self {
        Self {
            id: format!("{}:{principal}", entitlement_id(resource.id(), slug)),
            entitlement: EntitlementRef {
                resource: resource.id().clone(),
                slug: slug.to_string(),
            },
            principal: principal.clone(),
        }
    }
}

impl Display for Grant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} -[{}]-> {}",
            self.principal, self.entitlement.slug, self.entitlement.resource
        )
    }
}
