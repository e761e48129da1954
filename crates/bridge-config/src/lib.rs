//! Layered configuration resolution for the IDE agent bridge
//!
//! Extension code running inside the agent expects an editor-style
//! configuration API: dotted keys, whole-section reads, and writes that stick
//! for the rest of the session. The host, however, only sends a flat
//! `ExtensionConfiguration` record and a `ClientInfo` descriptor. This crate
//! bridges the two.
//!
//! # Resolution
//!
//! Every read materializes a fresh tree from three layers (later wins):
//!
//! ```text
//!   override store          constructor overrides + update()
//!        ^
//!   projection              fixed mapping of host fields to cody.* paths
//!        ^
//!   custom configuration    customConfiguration / customConfigurationJson
//! ```
//!
//! Objects merge key by key; anything else is replaced outright.
//!
//! # Example
//!
//! ```
//! use bridge_config::{ClientInfo, ConfigResolver, ExtensionConfiguration, HostValue};
//! use serde_json::json;
//!
//! let client_info = HostValue::new(Some(ClientInfo {
//!     name: "jetbrains".to_string(),
//!     version: "6.0.0".to_string(),
//!     ..Default::default()
//! }));
//! let extension_config = HostValue::new(Some(ExtensionConfiguration {
//!     server_endpoint: "https://sourcegraph.test".to_string(),
//!     custom_configuration_json: Some(r#"{"editor.insertSpaces": true}"#.to_string()),
//!     ..Default::default()
//! }));
//!
//! let resolver = ConfigResolver::new(Vec::<(String, _)>::new(), client_info, extension_config);
//!
//! assert_eq!(resolver.get("cody.telemetry.level"), Some(json!("agent")));
//! assert_eq!(resolver.get("cody.advanced.agent.extension.version"), Some(json!("6.0.0")));
//! assert_eq!(resolver.section("editor").get("insertSpaces"), Some(json!(true)));
//! ```

pub mod error;
pub mod logging;
pub mod path;
pub mod projection;
pub mod protocol;
pub mod provider;
pub mod resolver;
pub mod section;
pub mod tree;

pub use error::{Error, Result};
pub use protocol::{ClientCapabilities, ClientInfo, ExtensionConfiguration};
pub use provider::{HostProvider, HostValue};
pub use resolver::{ConfigInspection, ConfigResolver};
pub use section::{ConfigSection, ConfigSectionMut};
