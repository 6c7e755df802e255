use crate::{chain_params_error::FatalConfigError, difficulty::Target};
use scrypt::{scrypt, Params};

pub const BLOCK_HEADER_SIZE: usize = 80;

// scrypt(N = 1024, r = 1, p = 1), header used as both password and salt.
const SCRYPT_LOG_N: u8 = 10;
const SCRYPT_R: u32 = 1;
const SCRYPT_P: u32 = 1;

pub mod block_header_builder {
    use super::*;
    pub struct BlockHeaderBuilder {
        version: Option<i32>,
        prev_block_hash: Option<[u8; 32]>,
        merkle_root_hash: Option<[u8; 32]>,
        timestamp: Option<u32>,
        bits: Option<u32>,
        nonce: Option<u32>,
    }

    impl Default for BlockHeaderBuilder {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BlockHeaderBuilder {
        pub fn new() -> Self {
            Self {
                version: None,
                prev_block_hash: None,
                merkle_root_hash: None,
                timestamp: None,
                bits: None,
                nonce: None,
            }
        }

        pub fn version(mut self, version: i32) -> Self {
            self.version = Some(version);
            self
        }

        pub fn prev_block_hash(mut self, prev_block_hash: [u8; 32]) -> Self {
            self.prev_block_hash = Some(prev_block_hash);
            self
        }

        pub fn merkle_root_hash(mut self, merkle_root_hash: [u8; 32]) -> Self {
            self.merkle_root_hash = Some(merkle_root_hash);
            self
        }

        pub fn timestamp(mut self, timestamp: u32) -> Self {
            self.timestamp = Some(timestamp);
            self
        }

        pub fn bits(mut self, bits: u32) -> Self {
            self.bits = Some(bits);
            self
        }

        pub fn nonce(mut self, nonce: u32) -> Self {
            self.nonce = Some(nonce);
            self
        }

        pub fn build(self) -> Result<BlockHeader, FatalConfigError> {
            Ok(BlockHeader {
                version: self
                    .version
                    .ok_or(FatalConfigError::IncompleteHeader("version"))?,
                prev_block_hash: self
                    .prev_block_hash
                    .ok_or(FatalConfigError::IncompleteHeader("prev_block_hash"))?,
                merkle_root_hash: self
                    .merkle_root_hash
                    .ok_or(FatalConfigError::IncompleteHeader("merkle_root_hash"))?,
                timestamp: self
                    .timestamp
                    .ok_or(FatalConfigError::IncompleteHeader("timestamp"))?,
                bits: self.bits.ok_or(FatalConfigError::IncompleteHeader("bits"))?,
                nonce: self.nonce.ok_or(FatalConfigError::IncompleteHeader("nonce"))?,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: [u8; 32],
    pub merkle_root_hash: [u8; 32],
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(BLOCK_HEADER_SIZE);

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.prev_block_hash);
        bytes.extend_from_slice(&self.merkle_root_hash);
        bytes.extend_from_slice(&self.timestamp.to_le_bytes());
        bytes.extend_from_slice(&self.bits.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());

        bytes
    }

    /// Block identity: the scrypt digest of the serialized header.
    pub fn hash(&self) -> Result<[u8; 32], FatalConfigError> {
        let bytes = self.to_bytes();
        let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, 32)
            .map_err(|e| FatalConfigError::Hashing(e.to_string()))?;

        let mut output = [0u8; 32];
        scrypt(&bytes, &bytes, &params, &mut output)
            .map_err(|e| FatalConfigError::Hashing(e.to_string()))?;
        Ok(output)
    }

    pub fn validate_proof_of_work(&self) -> Result<bool, FatalConfigError> {
        let target = Target::from_compact(self.bits)?;
        Ok(target.is_met_by(&self.hash()?))
    }
}
