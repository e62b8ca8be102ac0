// file: src/cli/args.rs
// version: 2.0.0
// guid: f6g7h8i9-j0k1-2345-6789-012345fghijk

//! Command line argument definitions

use crate::switch::SwitchKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "remote-switch")]
#[command(about = "Toggle a logging switch on a remote node over XML-RPC")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Capability to call, e.g. Enable or Disable
    #[arg(required_unless_present = "list_switches")]
    pub enable: Option<String>,

    /// Value forwarded to the remote switch, e.g. a switch name or 1/0
    #[arg(required_unless_present = "list_switches")]
    pub option: Option<String>,

    #[arg(long, help = "Management service host [default: 127.0.0.1]")]
    pub host: Option<String>,

    #[arg(short, long, help = "Management service port [default: 10000]")]
    pub port: Option<u16>,

    #[arg(short, long, value_name = "SECONDS", help = "Response timeout [default: 10]")]
    pub timeout: Option<u64>,

    #[arg(long, help = "XML-RPC endpoint path [default: /xm.rem]")]
    pub path: Option<String>,

    #[arg(long, help = "Bridge method wrapping the call [default: localproxy]")]
    pub proxy_method: Option<String>,

    #[arg(long, conflicts_with = "proxy_method", help = "Call the method directly, without the bridge")]
    pub direct: bool,

    #[arg(long, help = "Method namespace [default: LogManager]")]
    pub namespace: Option<String>,

    #[arg(long, value_enum, default_value = "boolean-switch")]
    pub type_tag: TypeTagArg,

    #[arg(long = "capability", value_name = "NAME", help = "Register an extra capability name (repeatable)")]
    pub capabilities: Vec<String>,

    #[arg(long, help = "Only accept the default and --capability names")]
    pub strict: bool,

    #[arg(short, long, help = "Configuration file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Print the response as JSON")]
    pub json: bool,

    #[arg(long, help = "List the switches known to the remote protocol log and exit")]
    pub list_switches: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

/// Type tag argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum TypeTagArg {
    BooleanSwitch,
    Trace,
}

impl From<TypeTagArg> for SwitchKind {
    fn from(tag: TypeTagArg) -> Self {
        match tag {
            TypeTagArg::BooleanSwitch => SwitchKind::BooleanSwitch,
            TypeTagArg::Trace => SwitchKind::Trace,
        }
    }
}
