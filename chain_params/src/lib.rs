pub mod block_header;
pub mod chain_params;
pub mod chain_params_error;
pub mod compact_size;
pub mod config;
pub mod constants;
pub mod difficulty;
pub mod genesis;
pub mod log_file;
pub mod merkle_tree;
pub mod network_addr;
pub mod raw_transaction;
pub mod registry;
pub mod script;
pub mod seeds;
pub mod utils;
