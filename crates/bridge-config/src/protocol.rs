//! Host payloads delivered to the bridge
//!
//! The host process describes itself with [`ClientInfo`] and supplies its
//! settings with [`ExtensionConfiguration`]. Both arrive as camelCase JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::Result;

/// `globalState` capability value meaning the host persists extension state
pub const GLOBAL_STATE_SERVER_MANAGED: &str = "server-managed";

/// `webview` capability value meaning the host renders webviews itself
pub const WEBVIEW_NATIVE: &str = "native";

/// Identity and capabilities of the host embedding the bridge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Host name, e.g. "jetbrains"
    pub name: String,

    /// Version of the host-side extension
    pub version: String,

    /// Version of the IDE itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ide_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_root_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<ClientCapabilities>,
}

/// Optional features the host advertises
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webview: Option<String>,
}

impl ClientCapabilities {
    /// Whether the host owns global state storage
    pub fn has_server_managed_storage(&self) -> bool {
        self.global_state.as_deref() == Some(GLOBAL_STATE_SERVER_MANAGED)
    }

    /// Whether the host renders webviews natively
    pub fn has_native_webview(&self) -> bool {
        self.webview.as_deref() == Some(WEBVIEW_NATIVE)
    }
}

impl ClientInfo {
    /// Parse a client info payload from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Flat settings record supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionConfiguration {
    pub server_endpoint: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Extra HTTP headers sent with every request to the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<BTreeMap<String, String>>,

    #[serde(
        default,
        rename = "anonymousUserID",
        skip_serializing_if = "Option::is_none"
    )]
    pub anonymous_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry_client_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete_advanced_provider: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete_advanced_model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_debug: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codebase: Option<String>,

    /// Arbitrary settings keyed by dotted path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_configuration: Option<Map<String, Value>>,

    /// Same as `custom_configuration`, but JSON-encoded by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_configuration_json: Option<String>,
}

impl ExtensionConfiguration {
    /// Parse an extension configuration payload from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
