use std::{fmt, str::FromStr};

use primitive_types::U256;

use crate::{
    chain_params_error::{fatal, FatalConfigError},
    constants::*,
    difficulty::Target,
    genesis::{build_genesis, GenesisBlock, GenesisSpec},
    network_addr::NetworkAddr,
    seeds::{convert_seeds, SeedTable},
    utils::{base58_check_encode, decode_public_key},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Testnet,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = FatalConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            _ => Err(FatalConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// One prefix per [`Base58Type`]; all five are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58Prefixes([&'static [u8]; 5]);

impl Base58Prefixes {
    pub const fn new(
        pubkey_address: &'static [u8],
        script_address: &'static [u8],
        secret_key: &'static [u8],
        ext_public_key: &'static [u8],
        ext_secret_key: &'static [u8],
    ) -> Base58Prefixes {
        Base58Prefixes([
            pubkey_address,
            script_address,
            secret_key,
            ext_public_key,
            ext_secret_key,
        ])
    }

    pub fn get(&self, kind: Base58Type) -> &'static [u8] {
        self.0[kind as usize]
    }
}

pub const MAIN_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes::new(
    MAIN_PUBKEY_ADDRESS,
    MAIN_SCRIPT_ADDRESS,
    MAIN_SECRET_KEY,
    MAIN_EXT_PUBLIC_KEY,
    MAIN_EXT_SECRET_KEY,
);

pub const TESTNET_BASE58_PREFIXES: Base58Prefixes = Base58Prefixes::new(
    TESTNET_PUBKEY_ADDRESS,
    TESTNET_SCRIPT_ADDRESS,
    TESTNET_SECRET_KEY,
    TESTNET_EXT_PUBLIC_KEY,
    TESTNET_EXT_SECRET_KEY,
);

/// Fields a derived network replaces wholesale on top of its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkOverrides {
    pub network: Network,
    pub message_start: [u8; 4],
    pub pow_limit_shift: usize,
    pub alert_pub_key: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    pub data_dir: &'static str,
    pub genesis_nonce: u32,
    pub genesis_hash: &'static str,
    pub base58_prefixes: Base58Prefixes,
    pub seeds: SeedTable,
    pub last_pow_block: u32,
}

pub fn testnet_overrides() -> NetworkOverrides {
    NetworkOverrides {
        network: Network::Testnet,
        message_start: TESTNET_MESSAGE_START,
        pow_limit_shift: TESTNET_POW_LIMIT_SHIFT,
        alert_pub_key: TESTNET_ALERT_PUB_KEY,
        default_port: TESTNET_DEFAULT_PORT,
        rpc_port: TESTNET_RPC_PORT,
        data_dir: TESTNET_DATA_DIR,
        genesis_nonce: TESTNET_GENESIS_NONCE,
        genesis_hash: TESTNET_GENESIS_HASH_VALUE,
        base58_prefixes: TESTNET_BASE58_PREFIXES,
        seeds: TESTNET_SEEDS,
        last_pow_block: TESTNET_LAST_POW_BLOCK,
    }
}

pub fn main_genesis_spec() -> GenesisSpec {
    GenesisSpec {
        timestamp_message: GENESIS_TIMESTAMP_MESSAGE,
        script_constant: GENESIS_SCRIPT_CONSTANT,
        output_pub_key: GENESIS_OUTPUT_PUB_KEY,
        output_value: GENESIS_OUTPUT_VALUE,
        tx_version: GENESIS_TX_VERSION,
        version: GENESIS_BLOCK_VERSION,
        time: GENESIS_TIME,
        nonce: MAIN_GENESIS_NONCE,
        expected_hash: MAIN_GENESIS_HASH_VALUE,
        expected_merkle_root: GENESIS_MERKLE_ROOT_HASH_VALUE,
    }
}

/// Consensus constants of one network. Immutable once built.
#[derive(Debug, Clone)]
pub struct ChainParams {
    network: Network,
    message_start: [u8; 4],
    alert_pub_key: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: Target,
    data_dir: &'static str,
    base58_prefixes: Base58Prefixes,
    genesis_spec: GenesisSpec,
    genesis: GenesisBlock,
    genesis_hash: [u8; 32],
    fixed_seeds: Vec<NetworkAddr>,
    last_pow_block: u32,
}

impl ChainParams {
    pub fn try_main() -> Result<ChainParams, FatalConfigError> {
        let pow_limit = Target::from_leading_zero_bits(MAIN_POW_LIMIT_SHIFT);
        let genesis_spec = main_genesis_spec();
        let genesis = build_genesis(Network::Main, &genesis_spec, &pow_limit)?;

        Ok(ChainParams {
            network: Network::Main,
            message_start: MAIN_MESSAGE_START,
            alert_pub_key: decode_public_key("main alert key", MAIN_ALERT_PUB_KEY)?,
            default_port: MAIN_DEFAULT_PORT,
            rpc_port: MAIN_RPC_PORT,
            pow_limit,
            data_dir: "",
            base58_prefixes: MAIN_BASE58_PREFIXES,
            genesis_spec,
            genesis_hash: genesis.hash(),
            genesis,
            fixed_seeds: convert_seeds(&MAIN_SEEDS),
            last_pow_block: MAIN_LAST_POW_BLOCK,
        })
    }

    pub fn try_testnet() -> Result<ChainParams, FatalConfigError> {
        ChainParams::try_main()?.with_overrides(testnet_overrides())
    }

    pub fn try_for_network(network: Network) -> Result<ChainParams, FatalConfigError> {
        match network {
            Network::Main => ChainParams::try_main(),
            Network::Testnet => ChainParams::try_testnet(),
        }
    }

    /// Builds the table for `network`, aborting on any defect.
    pub fn for_network(network: Network) -> ChainParams {
        ChainParams::try_for_network(network).unwrap_or_else(|e| fatal(e))
    }

    /// New parameter set with every overridden field replaced, never merged.
    /// The genesis block is rebuilt and verified against the new identity.
    pub fn with_overrides(
        self,
        overrides: NetworkOverrides,
    ) -> Result<ChainParams, FatalConfigError> {
        let pow_limit = Target::from_leading_zero_bits(overrides.pow_limit_shift);
        let genesis_spec = GenesisSpec {
            nonce: overrides.genesis_nonce,
            expected_hash: overrides.genesis_hash,
            ..self.genesis_spec
        };
        let genesis = build_genesis(overrides.network, &genesis_spec, &pow_limit)?;

        Ok(ChainParams {
            network: overrides.network,
            message_start: overrides.message_start,
            alert_pub_key: decode_public_key("alert key", overrides.alert_pub_key)?,
            default_port: overrides.default_port,
            rpc_port: overrides.rpc_port,
            pow_limit,
            data_dir: overrides.data_dir,
            base58_prefixes: overrides.base58_prefixes,
            genesis_spec,
            genesis_hash: genesis.hash(),
            genesis,
            fixed_seeds: convert_seeds(&overrides.seeds),
            last_pow_block: overrides.last_pow_block,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_pub_key(&self) -> &[u8] {
        &self.alert_pub_key
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn proof_of_work_limit(&self) -> U256 {
        self.pow_limit.as_u256()
    }

    pub fn pow_limit_target(&self) -> Target {
        self.pow_limit
    }

    /// Subdirectory of the data directory, empty for the main network.
    pub fn data_dir(&self) -> &'static str {
        self.data_dir
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &'static [u8] {
        self.base58_prefixes.get(kind)
    }

    pub fn base58_prefixes(&self) -> &Base58Prefixes {
        &self.base58_prefixes
    }

    pub fn encode_base58_check(&self, kind: Base58Type, payload: &[u8]) -> String {
        base58_check_encode(self.base58_prefix(kind), payload)
    }

    pub fn genesis_spec(&self) -> &GenesisSpec {
        &self.genesis_spec
    }

    pub fn genesis_block(&self) -> &GenesisBlock {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> [u8; 32] {
        self.genesis_hash
    }

    pub fn fixed_seeds(&self) -> &[NetworkAddr] {
        &self.fixed_seeds
    }

    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn is_proof_of_work_height(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }
}
