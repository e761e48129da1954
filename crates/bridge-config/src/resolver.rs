//! Configuration resolution with layered merge
//!
//! The `ConfigResolver` answers editor-style configuration reads by
//! materializing a fresh tree from three layers on every call, lowest
//! precedence first:
//!
//! 1. Custom configuration supplied by the host (`customConfiguration` and
//!    the parsed `customConfigurationJson`)
//! 2. Fixed projection of `ClientInfo` / `ExtensionConfiguration` fields
//! 3. The override store (constructor overrides plus every `update`)

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::path::{get_at_path, parse_path, set_at_path};
use crate::projection;
use crate::protocol::{ClientInfo, ExtensionConfiguration};
use crate::provider::HostProvider;
use crate::section::{ConfigSection, ConfigSectionMut};
use crate::tree::{empty_tree, expand_dotted_keys, merge_layers};
use crate::{Error, Result};

/// Per-layer breakdown of a configuration key.
///
/// Mirrors the shape editor APIs return from `inspect`. This resolver does
/// not track which layer a value came from, so [`ConfigResolver::inspect`]
/// never produces one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInspection {
    pub key: String,
    pub default_value: Option<Value>,
    pub global_value: Option<Value>,
    pub workspace_value: Option<Value>,
    pub workspace_folder_value: Option<Value>,
}

/// Resolves dotted configuration paths against host-provided settings
///
/// Host payloads are read through providers on every resolve and never
/// cached, so a host that reconfigures mid-session is reflected by the next
/// read. Writes go to an override store that outranks everything the host
/// supplies.
///
/// # Example
///
/// ```
/// use bridge_config::{ConfigResolver, ExtensionConfiguration, HostValue};
/// use serde_json::json;
///
/// let extension_config = HostValue::new(Some(ExtensionConfiguration {
///     server_endpoint: "https://sourcegraph.test".to_string(),
///     ..Default::default()
/// }));
/// let resolver = ConfigResolver::new(
///     [("editor.tabSize", json!(4))],
///     HostValue::empty(),
///     extension_config,
/// );
///
/// assert_eq!(resolver.get("cody.serverEndpoint"), Some(json!("https://sourcegraph.test")));
/// assert_eq!(resolver.get("editor"), Some(json!({"tabSize": 4})));
/// assert!(!resolver.has("editor.insertSpaces"));
/// ```
pub struct ConfigResolver {
    /// Constructor overrides and runtime updates
    overrides: Value,

    client_info: Box<dyn HostProvider<ClientInfo>>,

    extension_config: Box<dyn HostProvider<ExtensionConfiguration>>,
}

impl ConfigResolver {
    /// Create a resolver.
    ///
    /// # Arguments
    ///
    /// * `overrides` - `(dotted path, value)` pairs applied in order, as if by
    ///   [`update`](Self::update). Pairs whose path has no segments are skipped.
    /// * `client_info` - provider for the host's current `ClientInfo`
    /// * `extension_config` - provider for the host's current `ExtensionConfiguration`
    pub fn new<I, K, C, E>(overrides: I, client_info: C, extension_config: E) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
        C: HostProvider<ClientInfo> + 'static,
        E: HostProvider<ExtensionConfiguration> + 'static,
    {
        let mut store = empty_tree();
        for (path, value) in overrides {
            let path = path.as_ref();
            if !assign(&mut store, path, value) {
                tracing::warn!(path, "Skipping override without a usable path");
            }
        }

        Self {
            overrides: store,
            client_info: Box::new(client_info),
            extension_config: Box::new(extension_config),
        }
    }

    /// Materialize the full configuration tree from the current host state.
    ///
    /// Every call builds a new tree; nothing is shared with the resolver or
    /// with earlier results.
    pub fn resolve(&self) -> Value {
        let client_info = self.client_info.current();
        let extension_config = self.extension_config.current();
        tracing::trace!(
            has_client_info = client_info.is_some(),
            has_extension_config = extension_config.is_some(),
            "Materializing configuration"
        );

        let custom = extension_config
            .as_ref()
            .map(projection::custom_configuration)
            .unwrap_or_else(empty_tree);
        let projected = projection::project(client_info.as_ref(), extension_config.as_ref());

        merge_layers([custom, projected, self.overrides.clone()])
    }

    /// Get the value at `path`, or `None` if nothing resolves there.
    ///
    /// Sections come back as whole objects. The returned value is an owned
    /// copy; changing it has no effect on the resolver.
    pub fn get(&self, path: &str) -> Option<Value> {
        let tree = self.resolve();
        get_at_path(&tree, &parse_path(path)).cloned()
    }

    /// Get the value at `path`, falling back to `default`.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).unwrap_or(default)
    }

    /// Get the value at `path` deserialized as `T`.
    ///
    /// Returns `Ok(None)` when the path is absent and an error when the value
    /// does not have the expected shape.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.get(path)
            .map(serde_json::from_value)
            .transpose()
            .map_err(Error::from)
    }

    /// Check whether `path` resolves to a value.
    ///
    /// Sections count as present, as does an explicit `null`.
    pub fn has(&self, path: &str) -> bool {
        let tree = self.resolve();
        get_at_path(&tree, &parse_path(path)).is_some()
    }

    /// Layer provenance for `path`. Always `None`.
    pub fn inspect(&self, path: &str) -> Option<ConfigInspection> {
        tracing::trace!(path, "inspect requested; layer provenance is not tracked");
        None
    }

    /// Set `value` at `path` in the override store.
    ///
    /// Missing intermediate sections are created. The value replaces whatever
    /// the store held at `path`; host-supplied values underneath stay visible
    /// unless the new value covers them. Object values have dotted keys
    /// expanded.
    ///
    /// The update is visible to every read issued after the returned future
    /// completes. It fails only if `path` has no segments.
    pub async fn update(&mut self, path: &str, value: Value) -> Result<()> {
        if !assign(&mut self.overrides, path, value) {
            return Err(Error::invalid_path(path));
        }
        tracing::debug!(path, "Configuration override updated");
        Ok(())
    }

    /// Read-only view of the section at `prefix`.
    pub fn section(&self, prefix: &str) -> ConfigSection<'_> {
        ConfigSection::new(self, prefix)
    }

    /// Writable view of the section at `prefix`.
    pub fn section_mut(&mut self, prefix: &str) -> ConfigSectionMut<'_> {
        ConfigSectionMut::new(self, prefix)
    }

    /// The override store as it currently stands
    pub fn overrides(&self) -> &Value {
        &self.overrides
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

/// Deep-set `value` at `path`, expanding dotted keys inside object values.
fn assign(store: &mut Value, path: &str, value: Value) -> bool {
    set_at_path(store, &parse_path(path), expand_dotted_keys(value))
}
