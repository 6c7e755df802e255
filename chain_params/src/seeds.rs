//! Compiled-in bootstrap endpoints and their conversion into peer records.
//!
//! A node only connects to one or two of these: once connected it learns a
//! pile of addresses with newer timestamps. Seeds are given a random "last
//! seen" time between one and two weeks ago so they look like ordinary
//! gossiped addresses and different nodes present different timestamps.

use std::{io::Read, net::Ipv6Addr};

use chrono::Utc;
use log::{debug, error};
use rand::Rng;

use crate::{
    chain_params_error::ChainParamsError,
    constants::{NODE_NETWORK, ONE_WEEK},
    network_addr::NetworkAddr,
};

pub const SEED_SPEC_SIZE: usize = 18;

/// One fixed-width endpoint record: 16 address bytes and a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    pub const fn ipv4(octets: [u8; 4], port: u16) -> SeedSpec {
        SeedSpec {
            addr: [
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, octets[0], octets[1], octets[2], octets[3],
            ],
            port,
        }
    }

    pub const fn ipv6(addr: [u8; 16], port: u16) -> SeedSpec {
        SeedSpec { addr, port }
    }

    pub fn ip(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.addr)
    }

    pub fn read_from(stream: &mut dyn Read) -> Result<SeedSpec, ChainParamsError> {
        let mut addr = [0u8; 16];
        stream.read_exact(&mut addr)?;

        let mut port = [0u8; 2];
        stream.read_exact(&mut port)?;

        Ok(SeedSpec {
            addr,
            port: u16::from_be_bytes(port),
        })
    }

    pub fn to_bytes(&self) -> [u8; SEED_SPEC_SIZE] {
        let mut bytes = [0u8; SEED_SPEC_SIZE];
        bytes[..16].copy_from_slice(&self.addr);
        bytes[16..].copy_from_slice(&self.port.to_be_bytes());
        bytes
    }
}

/// Versioned endpoint table for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedTable {
    pub version: u32,
    pub entries: &'static [SeedSpec],
}

impl SeedTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn convert_seeds(table: &SeedTable) -> Vec<NetworkAddr> {
    convert_seeds_at(table, Utc::now().timestamp(), &mut rand::thread_rng())
}

/// Every returned `time` lies in `[now - 2 weeks, now - 1 week)` as long as
/// that window fits a 32-bit timestamp.
pub fn convert_seeds_at<R: Rng>(
    table: &SeedTable,
    now: i64,
    rng: &mut R,
) -> Vec<NetworkAddr> {
    let seeds: Vec<NetworkAddr> = table
        .entries
        .iter()
        .map(|spec| {
            let offset = rng.gen_range(1..=ONE_WEEK);
            let last_seen = now - ONE_WEEK - offset;
            NetworkAddr::new(spec.ip(), spec.port, NODE_NETWORK, wire_time(last_seen))
        })
        .collect();

    debug!(
        "converted {} fixed seeds (table v{})",
        seeds.len(),
        table.version
    );
    seeds
}

/// Addr records carry a 32-bit time; anything outside it is pinned to the
/// nearest bound.
fn wire_time(timestamp: i64) -> u32 {
    match u32::try_from(timestamp) {
        Ok(time) => time,
        Err(_) => {
            let clamped = timestamp.clamp(0, u32::MAX as i64) as u32;
            error!(
                "seed timestamp {} does not fit an addr record, using {}",
                timestamp, clamped
            );
            clamped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAIN_SEEDS, TESTNET_SEEDS};
    use rand::{rngs::StdRng, SeedableRng};

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_last_seen_window() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            for addr in convert_seeds_at(&MAIN_SEEDS, NOW, &mut rng) {
                let time = addr.time as i64;
                assert!(time >= NOW - 2 * ONE_WEEK);
                assert!(time < NOW - ONE_WEEK);
            }
        }
    }

    #[test]
    fn test_structure_is_deterministic_timestamps_are_not() {
        let mut rng = rand::thread_rng();
        let first = convert_seeds_at(&MAIN_SEEDS, NOW, &mut rng);
        let second = convert_seeds_at(&MAIN_SEEDS, NOW, &mut rng);

        let endpoints = |seeds: &[NetworkAddr]| -> Vec<(Ipv6Addr, u16)> {
            seeds.iter().map(|a| (a.ip, a.port)).collect()
        };
        assert_eq!(endpoints(&first), endpoints(&second));
        assert_eq!(first.len(), MAIN_SEEDS.len());

        let times = |seeds: &[NetworkAddr]| -> Vec<u32> { seeds.iter().map(|a| a.time).collect() };
        assert_ne!(times(&first), times(&second));
    }

    #[test]
    fn test_seeds_advertise_node_network() {
        let seeds = convert_seeds(&TESTNET_SEEDS);

        assert_eq!(seeds.len(), TESTNET_SEEDS.len());
        assert!(seeds.iter().all(|a| a.services == NODE_NETWORK));
        assert_eq!(seeds[0].socket_addr().to_string(), "45.77.63.164:54321");
    }

    #[test]
    fn test_seed_spec_wire_form() {
        let spec = SeedSpec::ipv4([45, 76, 112, 18], 44321);
        let bytes = spec.to_bytes();

        assert_eq!(&bytes[10..16], &[0xff, 0xff, 45, 76, 112, 18]);
        assert_eq!(&bytes[16..], &44321u16.to_be_bytes());
        assert_eq!(SeedSpec::read_from(&mut &bytes[..]).unwrap(), spec);
    }

    #[test]
    fn test_tables_are_versioned_and_non_empty() {
        assert!(!MAIN_SEEDS.is_empty());
        assert!(!TESTNET_SEEDS.is_empty());
        assert_eq!(MAIN_SEEDS.version, 1);
        assert!(MAIN_SEEDS.entries.iter().all(|s| s.port == 44321));
        assert!(TESTNET_SEEDS.entries.iter().all(|s| s.port == 54321));
    }

    #[test]
    fn test_out_of_range_times_saturate() {
        let mut rng = StdRng::seed_from_u64(3);

        for addr in convert_seeds_at(&TESTNET_SEEDS, 0, &mut rng) {
            assert_eq!(addr.time, 0);
        }
        for addr in convert_seeds_at(&TESTNET_SEEDS, i64::from(u32::MAX) * 4, &mut rng) {
            assert_eq!(addr.time, u32::MAX);
        }
    }

    #[test]
    fn test_wire_time_keeps_values_in_range() {
        assert_eq!(wire_time(1_700_000_000), 1_700_000_000);
        assert_eq!(wire_time(-1), 0);
        assert_eq!(wire_time(i64::from(u32::MAX) + 1), u32::MAX);
    }
}
