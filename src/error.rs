use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// The provider listing that was in flight when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ProviderOperation {
    ListUsers,
    ListGroups,
    ListRoles,
    ListRoleBindings,
}

/// Failures reported by a provider client.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectorError {
    #[error("unable to {operation}: {source}")]
    Provider {
        operation: ProviderOperation,
        #[source]
        source: ProviderError,
    },

    #[error("resource {id}, error: {reason}")]
    Conversion { id: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid provider snapshot: {0}")]
    Snapshot(String),
}

impl ConnectorError {
    pub(crate) fn provider(operation: ProviderOperation) -> impl FnOnce(ProviderError) -> Self {
        move |source| ConnectorError::Provider { operation, source }
    }

    /// The provider error carried by this error, if it came from the client.
    pub fn provider_source(&self) -> Option<&ProviderError> {
        match self {
            ConnectorError::Provider { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::Snapshot(err.to_string())
    }
}
