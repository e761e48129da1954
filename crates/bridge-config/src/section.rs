//! Section-scoped views over a resolver
//!
//! Extension code usually asks for one section (`cody`) and reads keys
//! relative to it (`autocomplete.enabled`). A section view joins its prefix
//! onto every path and forwards to the resolver, so reads stay live and writes
//! land in the shared override store.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;
use crate::path::join_path;
use crate::resolver::{ConfigInspection, ConfigResolver};

/// Read-only view of one configuration section
#[derive(Debug, Clone)]
pub struct ConfigSection<'a> {
    resolver: &'a ConfigResolver,
    prefix: String,
}

impl<'a> ConfigSection<'a> {
    pub(crate) fn new(resolver: &'a ConfigResolver, prefix: &str) -> Self {
        Self {
            resolver,
            prefix: join_path(prefix, ""),
        }
    }

    /// Normalized dotted prefix of this section
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// View of a subsection, e.g. `autocomplete` under `cody`
    pub fn section(&self, prefix: &str) -> ConfigSection<'a> {
        ConfigSection::new(self.resolver, &self.qualify(prefix))
    }

    pub fn get(&self, path: &str) -> Option<Value> {
        self.resolver.get(&self.qualify(path))
    }

    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.resolver.get_or(&self.qualify(path), default)
    }

    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.resolver.get_as(&self.qualify(path))
    }

    pub fn has(&self, path: &str) -> bool {
        self.resolver.has(&self.qualify(path))
    }

    pub fn inspect(&self, path: &str) -> Option<ConfigInspection> {
        self.resolver.inspect(&self.qualify(path))
    }

    fn qualify(&self, path: &str) -> String {
        join_path(&self.prefix, path)
    }
}

/// Writable view of one configuration section
#[derive(Debug)]
pub struct ConfigSectionMut<'a> {
    resolver: &'a mut ConfigResolver,
    prefix: String,
}

impl<'a> ConfigSectionMut<'a> {
    pub(crate) fn new(resolver: &'a mut ConfigResolver, prefix: &str) -> Self {
        Self {
            resolver,
            prefix: join_path(prefix, ""),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Borrow this view for reading
    pub fn as_section(&self) -> ConfigSection<'_> {
        ConfigSection::new(&*self.resolver, &self.prefix)
    }

    pub fn get(&self, path: &str) -> Option<Value> {
        self.as_section().get(path)
    }

    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.as_section().get_or(path, default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.as_section().has(path)
    }

    /// Set `value` at `path` relative to this section.
    ///
    /// An empty `path` assigns the section itself, which fails only for the
    /// root view.
    pub async fn update(&mut self, path: &str, value: Value) -> Result<()> {
        let qualified = join_path(&self.prefix, path);
        self.resolver.update(&qualified, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostValue;
    use serde_json::json;

    #[test]
    fn prefix_is_normalized() {
        let resolver = ConfigResolver::new(
            Vec::<(String, Value)>::new(),
            HostValue::empty(),
            HostValue::empty(),
        );

        assert_eq!(resolver.section(".cody..autocomplete.").prefix(), "cody.autocomplete");
        assert_eq!(resolver.section("").prefix(), "");
        assert_eq!(
            resolver.section("cody").section("advanced.agent").prefix(),
            "cody.advanced.agent"
        );
    }

    #[test]
    fn section_reads_relative_paths() {
        let resolver = ConfigResolver::new(
            [("editor.tabSize", json!(2))],
            HostValue::empty(),
            HostValue::empty(),
        );
        let editor = resolver.section("editor");

        assert_eq!(editor.get("tabSize"), Some(json!(2)));
        assert_eq!(editor.get(""), Some(json!({"tabSize": 2})));
        assert!(!editor.has("insertSpaces"));
        assert_eq!(editor.get_or("insertSpaces", json!(false)), json!(false));
        assert_eq!(editor.get_as::<u8>("tabSize").unwrap(), Some(2));
        assert!(editor.inspect("tabSize").is_none());
    }
}
