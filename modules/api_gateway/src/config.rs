use serde::{Deserialize, Serialize};

/// API gateway configuration.
///
/// An empty `bind_addr` means "derive from the server section"; the
/// application fills it in before the gateway is constructed.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ApiGatewayConfig {
    #[serde(default)]
    pub bind_addr: String,
    #[serde(default)]
    pub enable_docs: bool,
    #[serde(default)]
    pub cors_enabled: bool,
}
