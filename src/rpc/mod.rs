// file: src/rpc/mod.rs
// version: 1.0.0
// guid: 0e6d3b71-94a2-4c5f-8f17-2b9c6a0d4e83

//! XML-RPC client plumbing

pub mod client;
pub mod codec;
pub mod value;

pub use client::{RpcTransport, XmlRpcClient};
pub use codec::{decode_response, encode_call};
pub use value::Value;
