// file: src/switch/mod.rs
// version: 1.0.0
// guid: 2c7b9f15-6d8e-4a03-b4f2-93e0a1c6d758

//! Remote logging switches

pub mod catalog;
pub mod client;
pub mod registry;

pub use client::{RemoteCall, RemoteSwitchClient};
pub use registry::CapabilityRegistry;

/// Kind of setting addressed on the remote side, sent as the type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchKind {
    /// A named boolean switch of the protocol log
    #[default]
    BooleanSwitch,
    /// The console trace listener, addressed with the value `Console`
    Trace,
}

impl SwitchKind {
    /// Get the type tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchKind::BooleanSwitch => "BooleanSwitch",
            SwitchKind::Trace => "Trace",
        }
    }
}

/// One toggle: which capability, what kind of setting, which value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRequest {
    pub capability: String,
    pub kind: SwitchKind,
    /// Forwarded untouched; the remote side decides what it means
    pub value: String,
}

impl SwitchRequest {
    pub fn new(capability: impl Into<String>, kind: SwitchKind, value: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            kind,
            value: value.into(),
        }
    }
}
