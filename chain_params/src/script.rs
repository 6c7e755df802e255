pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// Script assembled push by push, the way coinbase scripts are written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Script {
        Script(Vec::new())
    }

    pub fn push_opcode(mut self, opcode: u8) -> Script {
        self.0.push(opcode);
        self
    }

    /// Small integers become opcodes, anything else a number push.
    pub fn push_int(self, n: i64) -> Script {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8 - 1)),
            _ => self.push_number(n),
        }
    }

    /// Always pushes the minimal sign-magnitude encoding as data.
    pub fn push_number(self, n: i64) -> Script {
        let bytes = script_num_bytes(n);
        self.push_slice(&bytes)
    }

    pub fn push_slice(mut self, data: &[u8]) -> Script {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

fn script_num_bytes(n: i64) -> Vec<u8> {
    let mut bytes = Vec::new();
    if n == 0 {
        return bytes;
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    while abs > 0 {
        bytes.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit carries the sign.
    if let Some(last) = bytes.last_mut() {
        if *last & 0x80 != 0 {
            bytes.push(if negative { 0x80 } else { 0x00 });
        } else if negative {
            *last |= 0x80;
        }
    }
    bytes
}

/// `<key> OP_CHECKSIG`
pub fn pay_to_pubkey(pub_key: &[u8]) -> Vec<u8> {
    Script::new()
        .push_slice(pub_key)
        .push_opcode(OP_CHECKSIG)
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coinbase_style_script() {
        let script = Script::new()
            .push_int(0)
            .push_number(42)
            .push_slice(b"hello");

        assert_eq!(
            script.as_bytes(),
            &[0x00, 0x01, 0x2a, 0x05, b'h', b'e', b'l', b'l', b'o']
        );
    }

    #[test]
    fn test_push_int_small_values_are_opcodes() {
        assert_eq!(Script::new().push_int(1).into_bytes(), vec![OP_1]);
        assert_eq!(Script::new().push_int(16).into_bytes(), vec![0x60]);
        assert_eq!(Script::new().push_int(-1).into_bytes(), vec![OP_1NEGATE]);
        assert_eq!(Script::new().push_int(17).into_bytes(), vec![0x01, 0x11]);
    }

    #[test]
    fn test_number_encoding_keeps_sign_bit_free() {
        assert_eq!(Script::new().push_number(128).into_bytes(), vec![2, 0x80, 0x00]);
        assert_eq!(Script::new().push_number(-128).into_bytes(), vec![2, 0x80, 0x80]);
        assert_eq!(Script::new().push_number(-5).into_bytes(), vec![1, 0x85]);
    }

    #[test]
    fn test_long_push_uses_pushdata1() {
        let data = [7u8; 80];
        let bytes = Script::new().push_slice(&data).into_bytes();

        assert_eq!(&bytes[..2], &[OP_PUSHDATA1, 80]);
        assert_eq!(bytes.len(), 82);
    }

    #[test]
    fn test_pay_to_pubkey_layout() {
        let key = vec![4u8; 65];
        let script = pay_to_pubkey(&key);

        assert_eq!(script.len(), 67);
        assert_eq!(script[0], 65);
        assert_eq!(&script[1..66], &key[..]);
        assert_eq!(script[66], OP_CHECKSIG);
    }
}
