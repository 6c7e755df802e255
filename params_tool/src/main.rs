mod report;

use chain_params::{
    chain_params::Network, chain_params_error::ChainParamsError, config::Config, log_file::Logger,
    registry::NetworkRegistry,
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "params_tool")]
#[command(about = "Selects a network and prints its consensus parameters", long_about = None)]
struct Args {
    /// Use the test network
    #[arg(long)]
    testnet: bool,

    /// Network name (main, testnet); overrides --testnet
    #[arg(short, long)]
    network: Option<String>,

    /// Path to a key=value configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write log records to this file
    #[arg(long)]
    log_file: Option<String>,

    /// Also list the fixed seed addresses
    #[arg(long)]
    seeds: bool,
}

fn load_config(args: &Args) -> Result<Config, ChainParamsError> {
    let mut config = match &args.config {
        Some(path) => Config::new(path)?,
        None => Config::default(),
    };

    // Command-line flags win over the file, including its `network` key.
    if args.testnet {
        config.testnet = true;
        config.network = Some(Network::Testnet.name().to_string());
    }
    if let Some(network) = &args.network {
        config.network = Some(network.clone());
    }
    if let Some(log_file) = &args.log_file {
        config.log_file = Some(log_file.clone());
    }
    Ok(config)
}

fn main() -> Result<(), ChainParamsError> {
    let args = Args::parse();
    let config = load_config(&args)?;

    if let Some(log_file) = &config.log_file {
        Logger::init(log_file.clone(), LevelFilter::Debug)?;
    }

    let registry = NetworkRegistry::new();
    registry.select_from_config(&config)?;

    let params = registry.active_parameters()?;
    print!("{}", report::Report::new(params, args.seeds));

    Ok(())
}
