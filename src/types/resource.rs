//! Normalized resources produced by the record converter.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::annotation::{Annotation, Annotations};
use super::profile_value::ProfileValue;
use super::resource_type::ResourceKind;

/// Identifies a resource: its kind plus the provider-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    pub resource_type: ResourceKind,
    pub resource: String,
}

impl ResourceId {
    pub fn new(resource_type: ResourceKind, resource: impl Into<String>) -> Self {
        Self {
            resource_type,
            resource: resource.into(),
        }
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.resource_type, self.resource)
    }
}

/// A normalized User, Group or Role.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Resource {
    id: ResourceId,
    /// Provider name, not guaranteed to be unique.
    display_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    profile: BTreeMap<String, ProfileValue>,
    /// Only set for users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    annotations: Annotations,
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, r#"{}::"{}""#, self.id, self.display_name)
    }
}

impl Resource {
    pub fn new(kind: ResourceKind, id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: ResourceId::new(kind, id),
            display_name: display_name.into(),
            profile: BTreeMap::new(),
            created_at: None,
            annotations: Annotations::default(),
        }
    }

    /// Add a profile entry, returning the updated value.
    pub fn with_profile(mut self, k: impl Into<String>, v: impl Into<ProfileValue>) -> Self {
        self.profile.insert(k.into(), v.into());
        self
    }

    pub fn with_created_at(mut self, created_at: Option<DateTime<Utc>>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.update(annotation);
        self
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn kind(&self) -> ResourceKind {
        self.id.resource_type
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn profile(&self) -> &BTreeMap<String, ProfileValue> {
        &self.profile
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }
}
