use crate::seeds::{SeedSpec, SeedTable};

// MAIN network header start string (magic string).
// Rarely used upper ASCII, not valid as UTF-8, large 4-byte int at any alignment.
pub const MAIN_MESSAGE_START: [u8; 4] = [0x47, 0xa2, 0x3c, 0x7b];
pub const MAIN_DEFAULT_PORT: u16 = 44321;
pub const MAIN_RPC_PORT: u16 = 44320;
pub const MAIN_POW_LIMIT_SHIFT: usize = 20;
pub const MAIN_ALERT_PUB_KEY: &str = "044d8ed9f13b7c14d85758fbc5a2ba124ab7017bc7f349311a30d977881332dd6b0c2f11e5d87a4c3eb6fe261b2f3c0a4dd3d5a84e4cf8fcee7a3a5af5b548dada";
pub const MAIN_LAST_POW_BLOCK: u32 = 100;

pub const MAIN_PUBKEY_ADDRESS: &[u8] = &[80]; // Z
pub const MAIN_SCRIPT_ADDRESS: &[u8] = &[142]; // z
pub const MAIN_SECRET_KEY: &[u8] = &[45];
pub const MAIN_EXT_PUBLIC_KEY: &[u8] = &[0x04, 0x88, 0x51, 0x17];
pub const MAIN_EXT_SECRET_KEY: &[u8] = &[0x04, 0x88, 0xf5, 0xb8];

// Genesis block, shared by both networks except for bits and nonce.
pub const GENESIS_TIMESTAMP_MESSAGE: &str =
    "ATMs May Pave Way as Cryptocurrency Seeks Route to Mainstream Adoption";
pub const GENESIS_SCRIPT_CONSTANT: i64 = 42;
pub const GENESIS_OUTPUT_PUB_KEY: &str = "04c629dd47950d15c4f63db4e67247335e09dec8b4ca4c157a23858e2503709e5fe3ba75d5b5263b046ae4b20af135a4dc79e66123ad9a15e65a98798bfee60724";
pub const GENESIS_OUTPUT_VALUE: i64 = 0;
pub const GENESIS_TX_VERSION: i32 = 1;
pub const GENESIS_BLOCK_VERSION: i32 = 1;
pub const GENESIS_TIME: u32 = 1542957092;

pub const MAIN_GENESIS_NONCE: u32 = 12974417;
pub const MAIN_GENESIS_HASH_VALUE: &str =
    "0000013a7c8f2442bb9f43b11c84f3d8a6a9785465d8740138b08c037807478e";
pub const GENESIS_MERKLE_ROOT_HASH_VALUE: &str =
    "17535e50176c1dc1d0d8c801021182f395897ffe3c2e5fe016b4f1b81da8b9a6";

// TESTNET header start string (magic string)
pub const TESTNET_MESSAGE_START: [u8; 4] = [0x37, 0x19, 0xa7, 0x4c];
pub const TESTNET_DEFAULT_PORT: u16 = 54321;
pub const TESTNET_RPC_PORT: u16 = 54320;
pub const TESTNET_POW_LIMIT_SHIFT: usize = 16;
pub const TESTNET_ALERT_PUB_KEY: &str = "04cadfb15896c3e0d59e6ef44b87e464a74c6978afe5199dfd9a6916d9cad33ea9307ca7228288416d7737519c36ab052c63e8dedbd047d6c37af6fc66bc943c9d";
pub const TESTNET_DATA_DIR: &str = "testnet";
// Proof of work never ends on the test network.
pub const TESTNET_LAST_POW_BLOCK: u32 = 0x7fffffff;

pub const TESTNET_PUBKEY_ADDRESS: &[u8] = &[65]; // T
pub const TESTNET_SCRIPT_ADDRESS: &[u8] = &[127]; // t
pub const TESTNET_SECRET_KEY: &[u8] = &[58];
pub const TESTNET_EXT_PUBLIC_KEY: &[u8] = &[0x04, 0x35, 0x19, 0x55];
pub const TESTNET_EXT_SECRET_KEY: &[u8] = &[0x04, 0x35, 0x25, 0x63];

pub const TESTNET_GENESIS_NONCE: u32 = 65510;
pub const TESTNET_GENESIS_HASH_VALUE: &str =
    "0000a35375c55d1e5ce9285dff856f590ce0c912dbc4ab94d583ecd56329d912";

pub const MAIN_SEEDS: SeedTable = SeedTable {
    version: 1,
    entries: &[
        SeedSpec::ipv4([45, 76, 112, 18], MAIN_DEFAULT_PORT),
        SeedSpec::ipv4([104, 238, 186, 72], MAIN_DEFAULT_PORT),
        SeedSpec::ipv4([139, 180, 137, 71], MAIN_DEFAULT_PORT),
        SeedSpec::ipv4([149, 28, 157, 204], MAIN_DEFAULT_PORT),
        SeedSpec::ipv4([207, 148, 5, 92], MAIN_DEFAULT_PORT),
        SeedSpec::ipv6(
            [
                0x20, 0x01, 0x19, 0xf0, 0x50, 0x01, 0x02, 0xfe, 0x54, 0x00, 0x01, 0xff, 0xfe, 0x9b,
                0x3c, 0x61,
            ],
            MAIN_DEFAULT_PORT,
        ),
    ],
};

pub const TESTNET_SEEDS: SeedTable = SeedTable {
    version: 1,
    entries: &[
        SeedSpec::ipv4([45, 77, 63, 164], TESTNET_DEFAULT_PORT),
        SeedSpec::ipv4([140, 82, 54, 22], TESTNET_DEFAULT_PORT),
    ],
};

// Seed nodes are presented as last seen between one and two weeks ago.
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

pub const NODE_NETWORK: u64 = 1;
