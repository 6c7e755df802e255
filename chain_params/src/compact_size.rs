#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactSize {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl CompactSize {
    pub fn new_from_usize(n: usize) -> CompactSize {
        match n as u64 {
            0..=0xfc => CompactSize::U8(n as u8),
            0xfd..=0xffff => CompactSize::U16(n as u16),
            0x1_0000..=0xffff_ffff => CompactSize::U32(n as u32),
            _ => CompactSize::U64(n as u64),
        }
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::new();
        match self {
            CompactSize::U8(i) => bytes.push(*i),
            CompactSize::U16(i) => {
                bytes.push(0xfd);
                bytes.extend_from_slice(&i.to_le_bytes());
            }
            CompactSize::U32(i) => {
                bytes.push(0xfe);
                bytes.extend_from_slice(&i.to_le_bytes());
            }
            CompactSize::U64(i) => {
                bytes.push(0xff);
                bytes.extend_from_slice(&i.to_le_bytes());
            }
        };
        bytes
    }
}
