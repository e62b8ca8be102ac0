// file: src/switch/registry.rs
// version: 1.1.0
// guid: 5a0c8e27-f1b3-4d69-9a4e-d62b18c07f31

//! Mapping from capability names to remote method identifiers

use crate::config::SwitchConfig;
use crate::{Result, SwitchError};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Methods the remote logging handler always understands
pub const DEFAULT_CAPABILITIES: [&str; 2] = ["Enable", "Disable"];

const SEGMENT_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

static SEGMENT: OnceLock<Regex> = OnceLock::new();

/// Capability names the client may address.
///
/// Any well-formed name resolves to `<namespace>.<name>`. In strict mode
/// only registered names resolve.
#[derive(Debug, Clone)]
pub struct CapabilityRegistry {
    namespace: String,
    known: BTreeSet<String>,
    strict: bool,
}

impl CapabilityRegistry {
    /// Registry holding the default capabilities
    pub fn new(namespace: &str) -> Result<Self> {
        let mut registry = Self::empty(namespace)?;
        for name in DEFAULT_CAPABILITIES {
            registry.register(name)?;
        }
        Ok(registry)
    }

    /// Registry with no registered capabilities
    pub fn empty(namespace: &str) -> Result<Self> {
        if !is_segment(namespace) {
            return Err(SwitchError::config(format!(
                "Invalid method namespace: '{}'",
                namespace
            )));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            known: BTreeSet::new(),
            strict: false,
        })
    }

    /// Registry with the defaults plus the configured extras
    pub fn from_config(config: &SwitchConfig) -> Result<Self> {
        let mut registry = Self::new(&config.namespace)?;
        for name in &config.capabilities {
            registry.register(name)?;
        }
        registry.set_strict(config.strict);
        Ok(registry)
    }

    /// Only resolve registered names
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Add a capability name
    pub fn register(&mut self, name: &str) -> Result<()> {
        check_name(name)?;
        self.known.insert(name.to_string());
        Ok(())
    }

    /// Method identifier for a capability name
    pub fn resolve(&self, name: &str) -> Result<String> {
        check_name(name)?;
        if self.strict && !self.known.contains(name) {
            return Err(SwitchError::UnknownCapability {
                name: name.to_string(),
                known: self.names().collect::<Vec<_>>().join(", "),
            });
        }
        Ok(format!("{}.{}", self.namespace, name))
    }

    /// Registered capability names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }
}

fn is_segment(name: &str) -> bool {
    SEGMENT
        .get_or_init(|| Regex::new(SEGMENT_PATTERN).expect("segment pattern is a valid regex"))
        .is_match(name)
}

fn check_name(name: &str) -> Result<()> {
    if is_segment(name) {
        Ok(())
    } else {
        Err(SwitchError::invalid_capability(format!(
            "'{}' must match {}",
            name, SEGMENT_PATTERN
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let registry = CapabilityRegistry::new("LogManager").unwrap();

        assert_eq!(registry.resolve("Enable").unwrap(), "LogManager.Enable");
        assert_eq!(registry.resolve("Disable").unwrap(), "LogManager.Disable");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Disable", "Enable"]);
    }

    #[test]
    fn test_unregistered_well_formed_name_resolves() {
        let registry = CapabilityRegistry::new("LogManager").unwrap();

        assert_eq!(
            registry.resolve("EnableDebug").unwrap(),
            "LogManager.EnableDebug"
        );
    }

    #[test]
    fn test_strict_mode_lists_known_names() {
        let mut registry = CapabilityRegistry::new("LogManager").unwrap();
        registry.set_strict(true);

        match registry.resolve("EnableDebug") {
            Err(SwitchError::UnknownCapability { name, known }) => {
                assert_eq!(name, "EnableDebug");
                assert_eq!(known, "Disable, Enable");
            }
            other => panic!("expected unknown capability, got {:?}", other),
        }
        assert!(registry.resolve("Enable").is_ok());
    }

    #[test]
    fn test_strict_config_accepts_registered_extras() {
        let config = SwitchConfig {
            namespace: "LogManager".to_string(),
            capabilities: vec!["EnableDebug".to_string()],
            strict: true,
        };
        let registry = CapabilityRegistry::from_config(&config).unwrap();

        assert_eq!(
            registry.resolve("EnableDebug").unwrap(),
            "LogManager.EnableDebug"
        );
        assert!(registry.resolve("DisableDebug").is_err());
    }

    #[test]
    fn test_malformed_names_are_rejected() {
        let mut registry = CapabilityRegistry::empty("LogManager").unwrap();

        for name in ["", "Enable.Other", "Enable Debug", "9Lives", "Enable;rm"] {
            let err = registry.register(name).unwrap_err();
            assert!(
                matches!(err, SwitchError::InvalidCapability(_)),
                "{:?} was accepted",
                name
            );
            assert!(registry.resolve(name).is_err());
        }
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn test_malformed_namespace_is_rejected() {
        let err = CapabilityRegistry::new("Log.Manager").unwrap_err();
        assert!(matches!(err, SwitchError::Config(_)));
    }
}
