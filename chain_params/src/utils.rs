use crate::chain_params_error::FatalConfigError;
use bitcoin_hashes::{sha256d, Hash};
use secp256k1::PublicKey;

pub fn double_sha256(bytes: &[u8]) -> [u8; 32] {
    sha256d::Hash::hash(bytes).to_byte_array()
}

pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Hashes are kept in internal byte order and displayed reversed.
pub fn hash_to_hex_string(hash: &[u8; 32]) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

pub fn decode_hex(what: &'static str, s: &str) -> Result<Vec<u8>, FatalConfigError> {
    hex::decode(s).map_err(|e| FatalConfigError::MalformedHex {
        what,
        reason: e.to_string(),
    })
}

/// Parses a displayed hash into internal byte order.
pub fn decode_hash(what: &'static str, s: &str) -> Result<[u8; 32], FatalConfigError> {
    let bytes = decode_hex(what, s)?;
    let mut hash: [u8; 32] = bytes
        .try_into()
        .map_err(|v: Vec<u8>| FatalConfigError::MalformedHex {
            what,
            reason: format!("expected 32 bytes, got {}", v.len()),
        })?;
    hash.reverse();
    Ok(hash)
}

pub fn decode_public_key(what: &'static str, s: &str) -> Result<Vec<u8>, FatalConfigError> {
    let bytes = decode_hex(what, s)?;
    PublicKey::from_slice(&bytes).map_err(|e| FatalConfigError::InvalidPublicKey {
        what,
        reason: e.to_string(),
    })?;
    Ok(bytes)
}

pub fn base58_check_encode(prefix: &[u8], payload: &[u8]) -> String {
    let mut bytes = [prefix, payload].concat();
    let checksum = double_sha256(&bytes);
    bytes.extend_from_slice(&checksum[0..4]);

    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hash_reverses_display_order() {
        let hash = decode_hash(
            "test",
            "0000013a7c8f2442bb9f43b11c84f3d8a6a9785465d8740138b08c037807478e",
        )
        .unwrap();

        assert_eq!(hash[0], 0x8e);
        assert_eq!(hash[31], 0x00);
        assert_eq!(
            hash_to_hex_string(&hash),
            "0000013a7c8f2442bb9f43b11c84f3d8a6a9785465d8740138b08c037807478e"
        );
    }

    #[test]
    fn test_decode_hash_rejects_short_input() {
        let err = decode_hash("short", "00ff").unwrap_err();
        assert!(matches!(
            err,
            FatalConfigError::MalformedHex { what: "short", .. }
        ));
    }

    #[test]
    fn test_decode_public_key_rejects_point_off_curve() {
        let mut key = "04".to_string();
        key.push_str(&"11".repeat(64));

        assert!(matches!(
            decode_public_key("bogus", &key),
            Err(FatalConfigError::InvalidPublicKey { what: "bogus", .. })
        ));
    }

    #[test]
    fn test_base58_check_encode_known_vector() {
        // Bitcoin address of the all-zero hash160.
        assert_eq!(
            base58_check_encode(&[0], &[0u8; 20]),
            "1111111111111111111114oLvT2"
        );
    }
}
