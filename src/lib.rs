// file: src/lib.rs
// version: 3.0.0
// guid: d82472d1-7f0f-4eb4-b0a3-6e1547103eb4

//! # Remote Switch
//!
//! Toggles logging switches on a running overlay node. The node exposes a
//! `LogManager` RPC handler through an XML-RPC bridge; this crate issues a
//! single bounded call against it and reports the peer's answer.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod rpc;
pub mod switch;

pub use error::{Result, SwitchError};
