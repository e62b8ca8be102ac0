// file: src/switch/client.rs
// version: 1.0.0
// guid: e3a85c10-7b2d-4f96-a1e8-0d4c6f92b37a

//! Single-call switch toggling against a remote node

use super::{catalog, CapabilityRegistry, SwitchRequest};
use crate::config::ClientConfig;
use crate::rpc::{RpcTransport, Value, XmlRpcClient};
use crate::Result;
use tracing::{debug, info};

/// The call that goes over the wire for a request
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
    pub method: String,
    pub params: Vec<Value>,
}

/// Toggles one switch per [`invoke`](Self::invoke) call.
///
/// With a proxy method configured the call is sent as
/// `proxy(method, type_tag, value)`, otherwise as `method(type_tag, value)`.
pub struct RemoteSwitchClient<T: RpcTransport = XmlRpcClient> {
    transport: T,
    registry: CapabilityRegistry,
    proxy_method: Option<String>,
}

impl RemoteSwitchClient<XmlRpcClient> {
    /// Create a client talking XML-RPC to the configured endpoint
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = XmlRpcClient::new(&config.endpoint)?;
        let registry = CapabilityRegistry::from_config(&config.switch)?;
        Ok(Self::with_transport(
            transport,
            registry,
            config.endpoint.proxy_method.clone(),
        ))
    }
}

impl<T: RpcTransport> RemoteSwitchClient<T> {
    /// Create a client over any transport
    pub fn with_transport(
        transport: T,
        registry: CapabilityRegistry,
        proxy_method: Option<String>,
    ) -> Self {
        Self {
            transport,
            registry,
            proxy_method,
        }
    }

    /// Build the call for a request without sending it
    pub fn prepare(&self, request: &SwitchRequest) -> Result<RemoteCall> {
        let method = self.registry.resolve(&request.capability)?;
        self.info_call(&method, request);
        let args = [
            Value::from(request.kind.as_str()),
            Value::from(request.value.as_str()),
        ];

        Ok(match &self.proxy_method {
            Some(proxy) => RemoteCall {
                method: proxy.clone(),
                params: std::iter::once(Value::from(method)).chain(args).collect(),
            },
            None => RemoteCall {
                method,
                params: args.to_vec(),
            },
        })
    }

    fn info_call(&self, method: &str, request: &SwitchRequest) {
        info!(
            "Calling {} ({}, {})",
            method,
            request.kind.as_str(),
            request.value
        );
    }

    /// Perform the remote call and return the peer's value unmodified
    pub async fn invoke(&self, request: &SwitchRequest) -> Result<Value> {
        let call = self.prepare(request)?;

        if catalog::describe(&request.value).is_none() {
            debug!("'{}' is not a switch this client knows about", request.value);
        }
        let result = self.transport.call(&call.method, &call.params).await?;
        debug!("Remote returned: {:?}", result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::switch::SwitchKind;
    use crate::SwitchError;
    use std::sync::Mutex;

    /// Peer that records every call and echoes its parameters back
    #[derive(Default)]
    struct EchoTransport {
        calls: Mutex<Vec<RemoteCall>>,
    }

    #[async_trait::async_trait]
    impl RpcTransport for EchoTransport {
        async fn call(&self, method: &str, params: &[Value]) -> Result<Value> {
            self.calls.lock().unwrap().push(RemoteCall {
                method: method.to_string(),
                params: params.to_vec(),
            });
            Ok(Value::Array(params.to_vec()))
        }
    }

    struct FaultTransport;

    #[async_trait::async_trait]
    impl RpcTransport for FaultTransport {
        async fn call(&self, _method: &str, _params: &[Value]) -> Result<Value> {
            Err(SwitchError::remote_fault(0, "No such BooleanSwitch."))
        }
    }

    fn registry() -> CapabilityRegistry {
        CapabilityRegistry::new("LogManager").unwrap()
    }

    #[tokio::test]
    async fn test_direct_call_echoes_arguments() {
        let client = RemoteSwitchClient::with_transport(EchoTransport::default(), registry(), None);
        let request = SwitchRequest::new("EnableDebug", SwitchKind::BooleanSwitch, "1");

        let result = client.invoke(&request).await.unwrap();

        assert_eq!(
            result,
            Value::Array(vec![Value::from("BooleanSwitch"), Value::from("1")])
        );
        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "LogManager.EnableDebug");
    }

    #[tokio::test]
    async fn test_proxied_call_prepends_method() {
        let client = RemoteSwitchClient::with_transport(
            EchoTransport::default(),
            registry(),
            Some("localproxy".to_string()),
        );
        let request = SwitchRequest::new("Disable", SwitchKind::BooleanSwitch, "UdpEdge");

        let result = client.invoke(&request).await.unwrap();

        assert_eq!(
            result,
            Value::Array(vec![
                Value::from("LogManager.Disable"),
                Value::from("BooleanSwitch"),
                Value::from("UdpEdge"),
            ])
        );
        assert_eq!(client.transport.calls.lock().unwrap()[0].method, "localproxy");
    }

    #[tokio::test]
    async fn test_malformed_capability_never_reaches_the_peer() {
        let client = RemoteSwitchClient::with_transport(EchoTransport::default(), registry(), None);
        let request = SwitchRequest::new("Enable.Everything", SwitchKind::BooleanSwitch, "1");

        let err = client.invoke(&request).await.unwrap_err();

        assert!(matches!(err, SwitchError::InvalidCapability(_)));
        assert!(client.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_values_are_forwarded_verbatim() {
        let client = RemoteSwitchClient::with_transport(EchoTransport::default(), registry(), None);
        let request = SwitchRequest::new("Enable", SwitchKind::Trace, " Console <&> ");

        let call = client.prepare(&request).unwrap();

        assert_eq!(
            call.params,
            vec![Value::from("Trace"), Value::from(" Console <&> ")]
        );
    }

    #[tokio::test]
    async fn test_remote_fault_is_surfaced() {
        let client = RemoteSwitchClient::with_transport(FaultTransport, registry(), None);
        let request = SwitchRequest::new("Enable", SwitchKind::BooleanSwitch, "Nope");

        match client.invoke(&request).await {
            Err(SwitchError::RemoteFault { message, .. }) => {
                assert_eq!(message, "No such BooleanSwitch.")
            }
            other => panic!("expected a remote fault, got {:?}", other),
        }
    }
}
