// file: src/cli/commands.rs
// version: 2.0.0
// guid: g7h8i9j0-k1l2-3456-7890-123456ghijkl

//! Command implementations for the CLI

use super::args::Cli;
use crate::{
    config::{ClientConfig, ConfigLoader},
    logging::with_async_operation_span,
    rpc::Value,
    switch::{catalog, RemoteSwitchClient, SwitchRequest},
    Result, SwitchError,
};
use tracing::{debug, info};

/// Run whatever the command line asks for and return the text for stdout
pub async fn run(cli: &Cli) -> Result<String> {
    if cli.list_switches {
        return Ok(list_switches_command());
    }

    let config = load_config(cli, &ConfigLoader::new())?;
    let value = with_async_operation_span("toggle", || toggle_command(cli, &config)).await?;
    render(&value, cli.json)
}

/// Resolve configuration: file and environment first, then flags
pub fn load_config(cli: &Cli, loader: &ConfigLoader) -> Result<ClientConfig> {
    let mut config = loader.load(cli.config.as_deref())?;

    if let Some(host) = &cli.host {
        config.endpoint.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.endpoint.port = port;
    }
    if let Some(timeout) = cli.timeout {
        config.endpoint.timeout_seconds = timeout;
    }
    if let Some(path) = &cli.path {
        config.endpoint.path = path.clone();
    }
    if let Some(proxy) = &cli.proxy_method {
        config.endpoint.proxy_method = Some(proxy.clone());
    }
    if cli.direct {
        config.endpoint.proxy_method = None;
    }
    if let Some(namespace) = &cli.namespace {
        config.switch.namespace = namespace.clone();
    }
    config
        .switch
        .capabilities
        .extend(cli.capabilities.iter().cloned());
    if cli.strict {
        config.switch.strict = true;
    }

    config.validate()?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Toggle one switch on the configured node
pub async fn toggle_command(cli: &Cli, config: &ClientConfig) -> Result<Value> {
    let (Some(enable), Some(option)) = (&cli.enable, &cli.option) else {
        return Err(SwitchError::config("Both <ENABLE> and <OPTION> are required"));
    };

    info!(
        "Connecting to {}:{} (timeout {}s)",
        config.endpoint.host, config.endpoint.port, config.endpoint.timeout_seconds
    );

    let client = RemoteSwitchClient::new(config)?;
    let request = SwitchRequest::new(enable.as_str(), cli.type_tag.into(), option.as_str());
    client.invoke(&request).await
}

/// Known switches, one per line
pub fn list_switches_command() -> String {
    let width = catalog::KNOWN_SWITCHES
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    catalog::KNOWN_SWITCHES
        .iter()
        .map(|(name, description)| format!("{:<width$}  {}", name, description, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text printed for a successful call
pub fn render(value: &Value, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::{ENV_HOST, ENV_PORT};
    use clap::Parser;
    use std::collections::HashMap;

    fn loader_with(vars: &[(&str, &str)]) -> ConfigLoader {
        ConfigLoader::with_env(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn config_path() -> tempfile::NamedTempFile {
        // An explicit empty file keeps any per-user config out of the picture.
        tempfile::NamedTempFile::new().unwrap()
    }

    #[test]
    fn test_flags_override_environment() {
        let file = config_path();
        let cli = Cli::try_parse_from([
            "remote-switch",
            "--config",
            file.path().to_str().unwrap(),
            "--port",
            "12000",
            "--direct",
            "--capability",
            "EnableDebug",
            "EnableDebug",
            "1",
        ])
        .unwrap();
        let loader = loader_with(&[(ENV_HOST, "10.1.1.1"), (ENV_PORT, "11000")]);

        let config = load_config(&cli, &loader).unwrap();

        assert_eq!(config.endpoint.host, "10.1.1.1");
        assert_eq!(config.endpoint.port, 12000);
        assert_eq!(config.endpoint.proxy_method, None);
        assert_eq!(config.switch.capabilities, vec!["EnableDebug".to_string()]);
    }

    #[test]
    fn test_invalid_flag_values_fail_validation() {
        let file = config_path();
        let cli = Cli::try_parse_from([
            "remote-switch",
            "--config",
            file.path().to_str().unwrap(),
            "--timeout",
            "0",
            "Enable",
            "UdpEdge",
        ])
        .unwrap();

        let err = load_config(&cli, &loader_with(&[])).unwrap_err();
        assert!(matches!(err, SwitchError::Config(_)));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&Value::Boolean(true), false).unwrap(), "True");
        assert_eq!(render(&Value::Boolean(true), true).unwrap(), "true");
        assert_eq!(render(&Value::from("ok"), true).unwrap(), "\"ok\"");
    }

    #[test]
    fn test_list_switches_is_aligned() {
        let listing = list_switches_command();
        let lines: Vec<_> = listing.lines().collect();

        assert_eq!(lines.len(), catalog::KNOWN_SWITCHES.len());
        assert!(lines.iter().any(|l| l.starts_with("UdpEdge ")));
        // Longest name is ConnectionTableLocks (20 chars) plus two spaces.
        for ((_, description), line) in catalog::KNOWN_SWITCHES.iter().zip(&lines) {
            assert_eq!(&line[22..], *description);
        }
    }

    #[tokio::test]
    async fn test_enable_debug_reaches_peer_without_registration() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/xm.rem")
            .match_body(mockito::Matcher::Regex(
                "<string>LogManager.EnableDebug</string>".to_string(),
            ))
            .with_status(200)
            .with_body(
                "<methodResponse><params><param><value><boolean>1</boolean></value></param></params></methodResponse>",
            )
            .create_async()
            .await;
        let address = server.host_with_port();
        let (host, port) = address.rsplit_once(':').unwrap();
        let file = config_path();
        let cli = Cli::try_parse_from([
            "remote-switch",
            "--config",
            file.path().to_str().unwrap(),
            "--host",
            host,
            "--port",
            port,
            "EnableDebug",
            "1",
        ])
        .unwrap();
        let config = load_config(&cli, &loader_with(&[])).unwrap();

        let value = toggle_command(&cli, &config).await.unwrap();

        assert_eq!(render(&value, false).unwrap(), "True");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_strict_rejects_unregistered_capability_before_connecting() {
        let file = config_path();
        let cli = Cli::try_parse_from([
            "remote-switch",
            "--config",
            file.path().to_str().unwrap(),
            "--strict",
            "EnableDebug",
            "1",
        ])
        .unwrap();
        let config = load_config(&cli, &loader_with(&[])).unwrap();

        let err = toggle_command(&cli, &config).await.unwrap_err();
        assert!(matches!(err, SwitchError::UnknownCapability { .. }));
    }
}
