//! Deterministic construction of a network's genesis block.
//!
//! The nonce of each genesis block was found offline by brute force; this
//! module only reproduces the block from its declared fields and checks it
//! against the hash and merkle root the network agreed on.

use log::info;

use crate::{
    block_header::{block_header_builder::BlockHeaderBuilder, BlockHeader},
    chain_params::Network,
    chain_params_error::FatalConfigError,
    difficulty::Target,
    merkle_tree::merkle_tree_root,
    raw_transaction::{Outpoint, RawTransaction, TxIn, TxOut},
    script::{pay_to_pubkey, Script},
    utils::{decode_hash, decode_public_key, hash_to_hex_string},
};

/// Declared inputs of a genesis block plus the identity it must reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisSpec {
    pub timestamp_message: &'static str,
    pub script_constant: i64,
    pub output_pub_key: &'static str,
    pub output_value: i64,
    pub tx_version: i32,
    pub version: i32,
    pub time: u32,
    pub nonce: u32,
    pub expected_hash: &'static str,
    pub expected_merkle_root: &'static str,
}

impl GenesisSpec {
    /// The coinbase: `OP_0 <constant> <message>` spending the null outpoint,
    /// one output paying `<key> OP_CHECKSIG`.
    pub fn coinbase_transaction(&self) -> Result<RawTransaction, FatalConfigError> {
        let script_sig = Script::new()
            .push_int(0)
            .push_number(self.script_constant)
            .push_slice(self.timestamp_message.as_bytes())
            .into_bytes();

        let pub_key = decode_public_key("genesis output key", self.output_pub_key)?;
        let pk_script = pay_to_pubkey(&pub_key);

        Ok(RawTransaction::new(
            self.tx_version,
            self.time,
            vec![TxIn::new(Outpoint::null(), script_sig)],
            vec![TxOut::new(self.output_value, pk_script)],
        ))
    }

    /// Header and coinbase without any verification.
    pub fn assemble(&self, bits: u32) -> Result<(BlockHeader, RawTransaction), FatalConfigError> {
        let coinbase = self.coinbase_transaction()?;
        let merkle_root = merkle_tree_root(&[coinbase.get_tx_id()]);

        let header = BlockHeaderBuilder::new()
            .version(self.version)
            .prev_block_hash([0u8; 32])
            .merkle_root_hash(merkle_root)
            .timestamp(self.time)
            .bits(bits)
            .nonce(self.nonce)
            .build()?;

        Ok((header, coinbase))
    }
}

/// First block of a chain. Write-once: only [`build_genesis`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    header: BlockHeader,
    transactions: Vec<RawTransaction>,
    hash: [u8; 32],
}

impl GenesisBlock {
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    pub fn transactions(&self) -> &[RawTransaction] {
        &self.transactions
    }

    pub fn hash(&self) -> [u8; 32] {
        self.hash
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.header.merkle_root_hash
    }
}

/// Builds the genesis block with bits taken from `pow_limit` and checks its
/// merkle root, hash and proof of work.
pub fn build_genesis(
    network: Network,
    spec: &GenesisSpec,
    pow_limit: &Target,
) -> Result<GenesisBlock, FatalConfigError> {
    let (header, coinbase) = spec.assemble(pow_limit.to_compact())?;
    let hash = header.hash()?;

    let expected_merkle_root = decode_hash("genesis merkle root", spec.expected_merkle_root)?;
    if header.merkle_root_hash != expected_merkle_root {
        return Err(FatalConfigError::MerkleRootMismatch {
            network,
            expected: spec.expected_merkle_root.to_string(),
            computed: hash_to_hex_string(&header.merkle_root_hash),
        });
    }

    let expected_hash = decode_hash("genesis hash", spec.expected_hash)?;
    if hash != expected_hash {
        return Err(FatalConfigError::GenesisHashMismatch {
            network,
            expected: spec.expected_hash.to_string(),
            computed: hash_to_hex_string(&hash),
        });
    }

    if !header.validate_proof_of_work()? {
        return Err(FatalConfigError::InsufficientWork {
            network,
            hash: hash_to_hex_string(&hash),
            bits: header.bits,
        });
    }

    info!("{} genesis block {} verified", network, hash_to_hex_string(&hash));

    Ok(GenesisBlock {
        header,
        transactions: vec![coinbase],
        hash,
    })
}
