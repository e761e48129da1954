//! Command implementations

use std::fs;
use std::path::Path;

use bridge_config::path::parse_path;
use bridge_config::{ClientInfo, ConfigResolver, ExtensionConfiguration, HostValue};
use serde_json::Value;

use crate::error::{CliError, Result};

/// Build a resolver from payload files and `PATH=VALUE` overrides
pub fn build_resolver(
    client_info: Option<&Path>,
    extension_config: Option<&Path>,
    overrides: &[String],
) -> Result<ConfigResolver> {
    let client_info = client_info
        .map(|path| -> Result<ClientInfo> {
            tracing::debug!(?path, "Loading client info");
            Ok(ClientInfo::from_json(&fs::read_to_string(path)?)?)
        })
        .transpose()?;
    let extension_config = extension_config
        .map(|path| -> Result<ExtensionConfiguration> {
            tracing::debug!(?path, "Loading extension configuration");
            Ok(ExtensionConfiguration::from_json(&fs::read_to_string(path)?)?)
        })
        .transpose()?;

    let overrides = overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<Vec<_>>>()?;

    Ok(ConfigResolver::new(
        overrides,
        HostValue::new(client_info),
        HostValue::new(extension_config),
    ))
}

/// Split `PATH=VALUE`, parsing VALUE as JSON with a plain-string fallback
pub fn parse_override(raw: &str) -> Result<(String, Value)> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::user(format!("Expected PATH=VALUE, got '{}'", raw)))?;

    let path = path.trim();
    if parse_path(path).is_empty() {
        return Err(CliError::user(format!("Override '{}' has an empty path", raw)));
    }

    Ok((path.to_string(), parse_value(value)))
}

/// Print the value at `path`, or `default`, or fail
pub fn run_get(resolver: &ConfigResolver, path: &str, default: Option<&str>) -> Result<()> {
    let value = match (resolver.get(path), default) {
        (Some(value), _) => value,
        (None, Some(default)) => parse_value(default),
        (None, None) => {
            return Err(CliError::user(format!(
                "Nothing resolves at '{}'. Use --default to supply a fallback.",
                path
            )));
        }
    };

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

pub fn run_has(resolver: &ConfigResolver, path: &str) -> Result<()> {
    println!("{}", resolver.has(path));
    Ok(())
}

pub fn run_dump(resolver: &ConfigResolver) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&resolver.resolve())?);
    Ok(())
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
