//! Command-line argument parsing

use crate::config::AppConfig;
use crate::error::ConfigError;
use clap::Parser;

/// Command-line arguments structure
#[derive(Parser, Debug)]
#[command(name = "ipv4-router")]
#[command(about = "Resolve IPv4 destinations against a static route table")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, help = "Set the logging level")]
    pub log_level: Option<String>,

    /// Routes in format "dest:gateway:interface:metric"
    #[arg(
        long,
        help = "Routes in format 'dest1:gw1:iface1:metric1,dest2::iface2:metric2'"
    )]
    pub routes: Option<String>,

    /// Validate configuration and exit
    #[arg(long, help = "Validate configuration and exit without resolving anything")]
    pub validate_config: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in TOML format and exit")]
    pub print_default_config: bool,

    /// Destination addresses to resolve
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,
}

impl CliArgs {
    /// Apply CLI arguments over base configuration
    pub fn apply_to_config(&self, mut base_config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(ref level) = self.log_level {
            base_config.log_level = level.clone();
        }

        if let Some(ref routes_str) = self.routes {
            base_config.routes = crate::config::env::parse_routes(routes_str)?;
        }

        Ok(base_config)
    }
}

/// Default configuration in TOML format
pub fn default_config_toml() -> String {
    let default_config = AppConfig::default();
    let mut out = String::new();

    out.push_str("# IPv4 Router Configuration\n");
    out.push_str("# This is the default configuration with all available options\n\n");
    out.push_str("[logging]\n");
    out.push_str("# Log level: trace, debug, info, warn, error\n");
    out.push_str(&format!("level = \"{}\"\n\n", default_config.log_level));
    out.push_str("# Static routes. Omit `gateway` for directly connected networks.\n");
    out.push_str("# [[routes]]\n");
    out.push_str("# destination = \"0.0.0.0/0\"\n");
    out.push_str("# gateway = \"192.168.0.1\"\n");
    out.push_str("# interface = \"en0\"\n");
    out.push_str("# metric = 10\n");
    out
}

/// Print default configuration in TOML format
pub fn print_default_config() {
    print!("{}", default_config_toml());
}
