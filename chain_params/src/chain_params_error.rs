use crate::{chain_params::Network, config::ConfigError};

use log::error;
use thiserror::Error;

/// Prefix of every panic raised by [`fatal`].
pub const FATAL_PREFIX: &str = "fatal configuration defect";

/// Defects in the compiled-in parameter tables. None of these can be
/// recovered from at runtime: they are reported through [`fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalConfigError {
    #[error("unknown network '{0}'")]
    UnknownNetwork(String),
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: Network,
        expected: String,
        computed: String,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch {
        network: Network,
        expected: String,
        computed: String,
    },
    #[error("{network} genesis hash {hash} does not satisfy its target {bits:#010x}")]
    InsufficientWork {
        network: Network,
        hash: String,
        bits: u32,
    },
    #[error("invalid compact difficulty encoding {0:#010x}")]
    InvalidCompactBits(u32),
    #[error("invalid public key for {what}: {reason}")]
    InvalidPublicKey { what: &'static str, reason: String },
    #[error("malformed hex for {what}: {reason}")]
    MalformedHex { what: &'static str, reason: String },
    #[error("block header is missing {0}")]
    IncompleteHeader(&'static str),
    #[error("block hashing failed: {0}")]
    Hashing(String),
}

/// Ordinary, recoverable failures around the parameter tables.
#[derive(Debug, Error)]
pub enum ChainParamsError {
    #[error("no network has been selected yet")]
    NotSelected,
    #[error("network {active} is already selected, refusing to switch to {requested}")]
    AlreadySelected { active: Network, requested: Network },
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config file error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Logger error: {0}")]
    LoggerError(String),
}

/// Aborts on a configuration defect. Continuing would mean running with an
/// unverifiable chain identity.
pub fn fatal(error: FatalConfigError) -> ! {
    error!("{}: {}", FATAL_PREFIX, error);
    panic!("{}: {}", FATAL_PREFIX, error);
}
