use crate::{compact_size::CompactSize, utils::double_sha256};

/// Proof-of-stake transaction layout: a timestamp follows the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub version: i32,
    pub time: u32,
    pub tx_in: Vec<TxIn>,
    pub tx_out: Vec<TxOut>,
    pub lock_time: u32,
}

impl RawTransaction {
    pub fn new(version: i32, time: u32, tx_in: Vec<TxIn>, tx_out: Vec<TxOut>) -> RawTransaction {
        RawTransaction {
            version,
            time,
            tx_in,
            tx_out,
            lock_time: 0,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.time.to_le_bytes());

        bytes.extend_from_slice(&CompactSize::new_from_usize(self.tx_in.len()).to_le_bytes());
        for txin in &self.tx_in {
            bytes.extend_from_slice(&txin.to_bytes());
        }

        bytes.extend_from_slice(&CompactSize::new_from_usize(self.tx_out.len()).to_le_bytes());
        for txout in &self.tx_out {
            bytes.extend_from_slice(&txout.to_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    pub fn get_tx_id(&self) -> [u8; 32] {
        double_sha256(&self.to_bytes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outpoint {
    pub hash: [u8; 32],
    pub index: u32,
}

impl Outpoint {
    /// The outpoint a coinbase input refers to.
    pub fn null() -> Outpoint {
        Outpoint {
            hash: [0; 32],
            index: u32::MAX,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.hash[..]);
        bytes.extend_from_slice(&self.index.to_le_bytes());

        bytes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    pub previous_output: Outpoint,
    pub signature_script: Vec<u8>,
    pub sequence: u32,
}

impl TxIn {
    pub fn new(previous_output: Outpoint, signature_script: Vec<u8>) -> TxIn {
        TxIn {
            previous_output,
            signature_script,
            sequence: 0xffffffff,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.previous_output.to_bytes());
        bytes.extend_from_slice(
            &CompactSize::new_from_usize(self.signature_script.len()).to_le_bytes(),
        );
        bytes.extend_from_slice(&self.signature_script[..]);
        bytes.extend_from_slice(&self.sequence.to_le_bytes());

        bytes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64,
    pub pk_script: Vec<u8>,
}

impl TxOut {
    pub fn new(value: i64, pk_script: Vec<u8>) -> TxOut {
        TxOut { value, pk_script }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.value.to_le_bytes());
        bytes.extend_from_slice(&CompactSize::new_from_usize(self.pk_script.len()).to_le_bytes());
        bytes.extend_from_slice(&self.pk_script[..]);

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coinbase() -> RawTransaction {
        RawTransaction::new(
            1,
            1542957092,
            vec![TxIn::new(Outpoint::null(), vec![0x00, 0x01, 0x2a])],
            vec![TxOut::new(0, vec![0xac])],
        )
    }

    #[test]
    fn test_serialization_layout() {
        let bytes = sample_coinbase().to_bytes();

        assert_eq!(&bytes[0..4], &1i32.to_le_bytes());
        assert_eq!(&bytes[4..8], &1542957092u32.to_le_bytes());
        assert_eq!(bytes[8], 1);
        assert_eq!(&bytes[9..41], &[0u8; 32]);
        assert_eq!(&bytes[41..45], &[0xff; 4]);
        assert_eq!(&bytes[45..49], &[3, 0x00, 0x01, 0x2a]);
        assert_eq!(&bytes[49..53], &[0xff; 4]);
        // version + time + vin + vout(1 + 8 + 1 + 1) + lock_time
        assert_eq!(bytes.len(), 4 + 4 + 1 + 44 + 11 + 4);
    }

    #[test]
    fn test_tx_id_depends_on_time() {
        let tx = sample_coinbase();
        let mut later = tx.clone();
        later.time += 1;

        assert_ne!(tx.get_tx_id(), later.get_tx_id());
    }
}
