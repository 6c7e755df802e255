use log::info;
use once_cell::sync::OnceCell;

use crate::{
    chain_params::{ChainParams, Network},
    chain_params_error::{fatal, ChainParamsError},
    config::Config,
    utils::hash_to_hex_string,
};

/// Holds the single live parameter set of the process.
///
/// Created once at startup and handed by reference to every consumer.
/// Selection happens exactly once; reads before it fail, and no read can
/// observe a half-built table.
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    active: OnceCell<ChainParams>,
}

impl NetworkRegistry {
    pub fn new() -> NetworkRegistry {
        NetworkRegistry::default()
    }

    /// Builds and binds `network`'s parameters. Selecting the already active
    /// network again is a no-op; switching to another one is refused.
    pub fn select_network(&self, network: Network) -> Result<&ChainParams, ChainParamsError> {
        let params = self.active.get_or_init(|| {
            let params = ChainParams::for_network(network);
            info!(
                "selected {} network, genesis {}",
                network,
                hash_to_hex_string(&params.genesis_hash())
            );
            params
        });

        if params.network() != network {
            return Err(ChainParamsError::AlreadySelected {
                active: params.network(),
                requested: network,
            });
        }
        Ok(params)
    }

    /// Aborts when `name` is not a known network; never falls back to main.
    pub fn select_network_by_name(&self, name: &str) -> Result<&ChainParams, ChainParamsError> {
        let network = name.parse::<Network>().unwrap_or_else(|e| fatal(e));
        self.select_network(network)
    }

    /// An explicit network name wins over the `testnet` switch.
    pub fn select_from_config(&self, config: &Config) -> Result<&ChainParams, ChainParamsError> {
        match &config.network {
            Some(name) => self.select_network_by_name(name),
            None if config.testnet => self.select_network(Network::Testnet),
            None => self.select_network(Network::Main),
        }
    }

    pub fn active_parameters(&self) -> Result<&ChainParams, ChainParamsError> {
        self.active.get().ok_or(ChainParamsError::NotSelected)
    }

    pub fn is_selected(&self) -> bool {
        self.active.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_read_before_selection_fails() {
        let registry = NetworkRegistry::new();

        assert!(!registry.is_selected());
        assert!(matches!(
            registry.active_parameters(),
            Err(ChainParamsError::NotSelected)
        ));
    }

    #[test]
    fn test_select_then_read() {
        let registry = NetworkRegistry::new();
        registry.select_network(Network::Testnet).unwrap();

        let params = registry.active_parameters().unwrap();
        assert_eq!(params.network(), Network::Testnet);
        assert_eq!(params.default_port(), 54321);
    }

    #[test]
    fn test_reselecting_same_network_is_idempotent() {
        let registry = NetworkRegistry::new();
        let first = registry.select_network(Network::Main).unwrap().genesis_hash();
        let second = registry.select_network(Network::Main).unwrap().genesis_hash();

        assert_eq!(first, second);
    }

    #[test]
    fn test_switching_network_is_refused() {
        let registry = NetworkRegistry::new();
        registry.select_network(Network::Main).unwrap();

        assert!(matches!(
            registry.select_network(Network::Testnet),
            Err(ChainParamsError::AlreadySelected {
                active: Network::Main,
                requested: Network::Testnet
            })
        ));
        assert_eq!(
            registry.active_parameters().unwrap().network(),
            Network::Main
        );
    }

    #[test]
    #[should_panic(expected = "unknown network 'regtest'")]
    fn test_unknown_name_aborts() {
        let registry = NetworkRegistry::new();
        let _ = registry.select_network_by_name("regtest");
    }

    #[test]
    fn test_unknown_name_never_falls_back_to_main() {
        let registry = NetworkRegistry::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = registry.select_network_by_name("mainnet2");
        }));

        assert!(result.is_err());
        assert!(!registry.is_selected());
    }

    #[test]
    fn test_select_from_config() {
        let registry = NetworkRegistry::new();
        let config = ConfigBuilder::new().testnet(true).build();
        assert_eq!(
            registry.select_from_config(&config).unwrap().network(),
            Network::Testnet
        );

        let registry = NetworkRegistry::new();
        assert_eq!(
            registry.select_from_config(&Config::default()).unwrap().network(),
            Network::Main
        );

        let registry = NetworkRegistry::new();
        let config = ConfigBuilder::new()
            .testnet(true)
            .network("main".to_string())
            .build();
        assert_eq!(
            registry.select_from_config(&config).unwrap().network(),
            Network::Main
        );
    }
}
