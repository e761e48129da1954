//! Shared host payload fixtures for resolver tests

#![allow(dead_code)]

use bridge_config::{
    ClientCapabilities, ClientInfo, ConfigResolver, ExtensionConfiguration, HostValue,
};
use serde_json::Value;

pub const SERVER_ENDPOINT: &str = "https://sourcegraph.test";

/// Custom settings blob the host sends alongside the flat fields.
///
/// `cody.autocomplete.advanced.provider` deliberately collides with the
/// projected field of the same name.
pub const CUSTOM_CONFIGURATION_JSON: &str = r#"{
    "cody.autocomplete.advanced.provider": "from-custom-json",
    "cody.experimental.noodle": true,
    "cody.dev.models": [{"providerString": "google", "modelId": "gemini-flash"}],
    "editor.insertSpaces": true,
    "http.experimental.systemCertificatesV2": true,
    "foo.bar": {
        "baz.qux": true,
        "baz": {"d1.d2": {"v": 1}}
    }
}"#;

pub fn client_info() -> ClientInfo {
    ClientInfo {
        name: "jetbrains".to_string(),
        version: "6.0.0".to_string(),
        ide_version: Some("2024.1".to_string()),
        workspace_root_uri: Some("file:///workspace".to_string()),
        capabilities: Some(ClientCapabilities {
            global_state: Some("server-managed".to_string()),
            webview: Some("native".to_string()),
        }),
    }
}

pub fn extension_configuration() -> ExtensionConfiguration {
    ExtensionConfiguration {
        server_endpoint: SERVER_ENDPOINT.to_string(),
        access_token: Some("sgp_test_token".to_string()),
        custom_headers: Some([("X-Requested-With".to_string(), "agent-test".to_string())].into()),
        anonymous_user_id: Some("anon-123".to_string()),
        telemetry_client_name: Some("jetbrains-test".to_string()),
        autocomplete_advanced_provider: Some("fireworks".to_string()),
        autocomplete_advanced_model: Some("starcoder-hybrid".to_string()),
        verbose_debug: Some(true),
        codebase: Some("github.com/example/repo".to_string()),
        custom_configuration: None,
        custom_configuration_json: Some(CUSTOM_CONFIGURATION_JSON.to_string()),
    }
}

/// Host slots pre-filled with the fixtures, plus a resolver reading them.
pub struct Fixture {
    pub client_info: HostValue<ClientInfo>,
    pub extension_config: HostValue<ExtensionConfiguration>,
    pub resolver: ConfigResolver,
}

pub fn fixture() -> Fixture {
    fixture_with_overrides(Vec::new())
}

pub fn fixture_with_overrides(overrides: Vec<(&str, Value)>) -> Fixture {
    let client_info = HostValue::new(Some(client_info()));
    let extension_config = HostValue::new(Some(extension_configuration()));
    let resolver = ConfigResolver::new(overrides, client_info.clone(), extension_config.clone());

    Fixture {
        client_info,
        extension_config,
        resolver,
    }
}
