//! Provider-native records, shaped like the cluster API's JSON.
//!
//! Every field defaults when absent so a sparse listing still decodes.
//! Collections also accept `null`, which the API emits for empty lists.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    pub uid: String,
    pub name: String,
    pub generate_name: String,
    pub namespace: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub annotations: BTreeMap<String, String>,
    pub creation_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawUser {
    pub metadata: ObjectMeta,
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGroup {
    pub metadata: ObjectMeta,
    /// Member user names. These are display names, not user uids.
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyRule {
    #[serde(deserialize_with = "null_as_default")]
    pub verbs: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub api_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_names: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRole {
    pub metadata: ObjectMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub rules: Vec<PolicyRule>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleRef {
    pub api_group: String,
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
}

impl Subject {
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            kind: "User".to_string(),
            name: name.into(),
            namespace: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRoleBinding {
    pub metadata: ObjectMeta,
    pub role_ref: RoleRef,
    #[serde(deserialize_with = "null_as_default")]
    pub subjects: Vec<Subject>,
}

impl RawRoleBinding {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
