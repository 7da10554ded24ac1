use crate::error::ConnectorError;
use crate::provider::ProviderSnapshot;

/// Parse a provider snapshot document.
///
/// JSON errors are mapped into `ConnectorError::Snapshot`.
///
/// Example:
/// ```rust
/// use access_graph_core::load_snapshot;
/// let text = r#"{ "users": [{ "metadata": { "uid": "u-1", "name": "alice" } }] }"#;
/// let snapshot = load_snapshot(text).unwrap();
/// assert_eq!(snapshot.users.len(), 1);
/// ```
pub fn load_snapshot(text: &str) -> Result<ProviderSnapshot, ConnectorError> {
    Ok(serde_json::from_str(text)?)
}
