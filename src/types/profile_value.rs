//! Free-form profile values carried on normalized resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A profile entry. Provider annotations are kept verbatim as a `Map`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ProfileValue {
    String(String),
    Map(BTreeMap<String, String>),
}

impl ProfileValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ProfileValue::String(s) => Some(s),
            ProfileValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ProfileValue::Map(m) => Some(m),
            ProfileValue::String(_) => None,
        }
    }
}

impl From<&str> for ProfileValue {
    fn from(value: &str) -> Self {
        ProfileValue::String(value.to_string())
    }
}

impl From<String> for ProfileValue {
    fn from(value: String) -> Self {
        ProfileValue::String(value)
    }
}

impl From<BTreeMap<String, String>> for ProfileValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        ProfileValue::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let s = ProfileValue::from("alice");
        assert_eq!(s.as_str(), Some("alice"));
        assert!(s.as_map().is_none());

        let m = ProfileValue::from(BTreeMap::from([("k".to_string(), "v".to_string())]));
        assert!(m.as_str().is_none());
        assert_eq!(m.as_map().unwrap().get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_untagged_serialization() {
        let m = ProfileValue::Map(BTreeMap::from([(
            "openshift.io/description".to_string(),
            "ops team".to_string(),
        )]));
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "openshift.io/description": "ops team" })
        );
        let back: ProfileValue = serde_json::from_value(value).unwrap();
        assert_eq!(back, m);

        let s: ProfileValue = serde_json::from_str(r#""plain""#).unwrap();
        assert_eq!(s, ProfileValue::String("plain".to_string()));
    }
}
