//! Connector configuration.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConnectorError;

pub const DEFAULT_NAMESPACE: &str = "default";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConnectorConfig {
    /// Path to a kubeconfig file. Without one the client runs in-cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_config: Option<PathBuf>,
    /// Namespace whose roles and role bindings are read.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            kube_config: None,
            namespace: default_namespace(),
        }
    }
}

impl ConnectorConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            kube_config: None,
            namespace: namespace.into(),
        }
    }

    pub fn with_kube_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.kube_config = Some(path.into());
        self
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConnectorError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ConnectorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// An unset kubeconfig path is valid; a set one must exist.
    pub fn validate(&self) -> Result<(), ConnectorError> {
        let Some(path) = &self.kube_config else {
            return Ok(());
        };
        if path.as_os_str().is_empty() {
            return Ok(());
        }

        match std::fs::metadata(path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ConnectorError::Config(format!(
                "kubeconfig file does not exist: {}",
                path.display()
            ))),
            Err(e) => Err(ConnectorError::Config(format!(
                "unable to stat kubeconfig file ({}): {e}",
                path.display()
            ))),
        }
    }
}
