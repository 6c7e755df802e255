use chain_params::{
    chain_params::{Base58Type, ChainParams},
    utils::{bytes_to_hex_string, hash_to_hex_string},
};
use chrono::SecondsFormat;
use std::fmt;

const PREFIX_NAMES: [(Base58Type, &str); 5] = [
    (Base58Type::PubkeyAddress, "pubkey address"),
    (Base58Type::ScriptAddress, "script address"),
    (Base58Type::SecretKey, "secret key"),
    (Base58Type::ExtPublicKey, "ext public key"),
    (Base58Type::ExtSecretKey, "ext secret key"),
];

/// Text listing of one parameter table.
pub struct Report<'a> {
    params: &'a ChainParams,
    with_seeds: bool,
}

impl<'a> Report<'a> {
    pub fn new(params: &'a ChainParams, with_seeds: bool) -> Report<'a> {
        Report { params, with_seeds }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let params = self.params;
        let genesis = params.genesis_block();

        writeln!(f, "network:          {}", params.network())?;
        writeln!(
            f,
            "magic:            {}",
            bytes_to_hex_string(&params.message_start())
        )?;
        writeln!(f, "default port:     {}", params.default_port())?;
        writeln!(f, "rpc port:         {}", params.rpc_port())?;
        writeln!(
            f,
            "pow limit:        {:#x} (bits {:#010x})",
            params.proof_of_work_limit(),
            params.pow_limit_target().to_compact()
        )?;
        writeln!(f, "last pow block:   {}", params.last_pow_block())?;
        writeln!(
            f,
            "alert key:        {}",
            bytes_to_hex_string(params.alert_pub_key())
        )?;
        writeln!(
            f,
            "genesis hash:     {}",
            hash_to_hex_string(&params.genesis_hash())
        )?;
        writeln!(
            f,
            "merkle root:      {}",
            hash_to_hex_string(&genesis.merkle_root())
        )?;
        writeln!(
            f,
            "genesis header:   time {} bits {:#010x} nonce {}",
            genesis.header().timestamp,
            genesis.header().bits,
            genesis.header().nonce
        )?;

        for (kind, name) in PREFIX_NAMES {
            writeln!(
                f,
                "prefix {:<16}{}",
                format!("{}:", name),
                bytes_to_hex_string(params.base58_prefix(kind))
            )?;
        }

        writeln!(f, "fixed seeds:      {}", params.fixed_seeds().len())?;
        if self.with_seeds {
            for seed in params.fixed_seeds() {
                let last_seen = seed
                    .last_seen()
                    .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                    .unwrap_or_else(|| "unknown".to_string());
                writeln!(f, "  {} last seen {}", seed.socket_addr(), last_seen)?;
            }
        }
        Ok(())
    }
}
