//! Static projection of host payloads into the configuration tree
//!
//! Host payloads are flat records. Editor code expects nested settings such
//! as `cody.autocomplete.advanced.provider`, so each known field is placed at
//! a fixed path. Fields the host left out are not projected at all.

use serde_json::{Value, json};

use crate::path::{parse_path, set_at_path};
use crate::protocol::{ClientInfo, ExtensionConfiguration};
use crate::tree::{deep_merge, empty_tree, expand_dotted_keys};

/// Telemetry level reported by every agent session
pub const TELEMETRY_LEVEL: &str = "agent";

/// IDE name the extension code sees, whatever the real host is
pub const IDE_NAME: &str = "VSCode";

/// Build the projection layer for the given host payloads.
pub fn project(
    client_info: Option<&ClientInfo>,
    extension_config: Option<&ExtensionConfiguration>,
) -> Value {
    let mut tree = empty_tree();

    put(&mut tree, "cody.telemetry.level", json!(TELEMETRY_LEVEL));
    put(&mut tree, "cody.autocomplete.enabled", json!(true));
    put(&mut tree, "cody.advanced.agent.running", json!(true));
    put(&mut tree, "cody.experimental.tracing", json!(true));
    put(&mut tree, "cody.advanced.agent.ide.name", json!(IDE_NAME));

    if let Some(config) = extension_config {
        put(&mut tree, "cody.serverEndpoint", json!(config.server_endpoint));
        put_some(&mut tree, "cody.customHeaders", &config.custom_headers);
        put_some(&mut tree, "cody.telemetry.clientName", &config.telemetry_client_name);
        put_some(
            &mut tree,
            "cody.autocomplete.advanced.provider",
            &config.autocomplete_advanced_provider,
        );
        put_some(
            &mut tree,
            "cody.autocomplete.advanced.model",
            &config.autocomplete_advanced_model,
        );
        put_some(&mut tree, "cody.debug.verbose", &config.verbose_debug);
        put_some(&mut tree, "cody.codebase", &config.codebase);
    }

    if let Some(info) = client_info {
        put(
            &mut tree,
            "cody.advanced.agent.extension.version",
            json!(info.version),
        );
        put_some(&mut tree, "cody.advanced.agent.ide.version", &info.ide_version);

        if let Some(capabilities) = &info.capabilities {
            if capabilities.has_server_managed_storage() {
                put(&mut tree, "cody.advanced.agent.capabilities.storage", json!(true));
            }
            if capabilities.has_native_webview() {
                put(&mut tree, "cody.advanced.hasNativeWebview", json!(true));
            }
        }
    }

    tree
}

/// Build the custom configuration layer.
///
/// `customConfiguration` is applied first, then the parsed
/// `customConfigurationJson`. A blob that is not valid JSON, or not a JSON
/// object, is skipped with a warning.
pub fn custom_configuration(config: &ExtensionConfiguration) -> Value {
    let mut tree = empty_tree();

    if let Some(custom) = &config.custom_configuration {
        deep_merge(&mut tree, expand_dotted_keys(Value::Object(custom.clone())));
    }

    if let Some(raw) = &config.custom_configuration_json {
        match serde_json::from_str::<Value>(raw) {
            Ok(parsed @ Value::Object(_)) => deep_merge(&mut tree, expand_dotted_keys(parsed)),
            Ok(other) => {
                tracing::warn!(
                    kind = value_kind(&other),
                    "customConfigurationJson is not an object, ignoring it"
                );
            }
            Err(error) => {
                tracing::warn!(%error, "customConfigurationJson is malformed, ignoring it");
            }
        }
    }

    tree
}

fn put(tree: &mut Value, path: &str, value: Value) {
    let assigned = set_at_path(tree, &parse_path(path), value);
    debug_assert!(assigned, "projection path '{path}' has no segments");
}

fn put_some<T: serde::Serialize>(tree: &mut Value, path: &str, value: &Option<T>) {
    if let Some(value) = value {
        put(tree, path, json!(value));
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
