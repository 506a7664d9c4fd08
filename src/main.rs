use clap::Parser;
use tracing::{info, warn};

use ipv4_router::config::cli::{print_default_config, CliArgs};
use ipv4_router::config::load_configuration;
use ipv4_router::{Address, AppError, RouteManager};

fn main() -> Result<(), AppError> {
    let cli = CliArgs::parse();

    if cli.print_default_config {
        print_default_config();
        return Ok(());
    }

    let config = load_configuration(&cli)?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .init();

    let router = config.build_router()?;
    info!(routes = router.len(), "route table loaded");

    if cli.validate_config {
        info!("Configuration is valid");
        return Ok(());
    }

    for text in &cli.addresses {
        let address = match Address::parse(text) {
            Ok(address) => address,
            Err(e) => {
                warn!("skipping destination: {}", e);
                continue;
            }
        };

        match router.route_for_address(address) {
            Some(route) => println!("{} -> {}", address, route),
            None => println!("{} -> no route", address),
        }
    }

    Ok(())
}
