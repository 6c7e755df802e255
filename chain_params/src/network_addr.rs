use std::{
    io::Read,
    net::{IpAddr, Ipv6Addr, SocketAddr},
};

use chrono::{DateTime, TimeZone, Utc};

use crate::chain_params_error::ChainParamsError;

pub const NETWORK_ADDR_SIZE: usize = 30;

/// Peer endpoint as carried in `addr` messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAddr {
    pub time: u32,
    pub services: u64,
    pub ip: Ipv6Addr,
    pub port: u16,
}

impl NetworkAddr {
    pub fn new(ip: Ipv6Addr, port: u16, services: u64, time: u32) -> NetworkAddr {
        NetworkAddr {
            time,
            services,
            ip,
            port,
        }
    }

    pub fn read_from(stream: &mut dyn Read) -> Result<NetworkAddr, ChainParamsError> {
        let mut time_bytes = [0u8; 4];
        stream.read_exact(&mut time_bytes)?;

        let mut services_bytes = [0u8; 8];
        stream.read_exact(&mut services_bytes)?;

        let mut ip_bytes = [0u8; 16];
        stream.read_exact(&mut ip_bytes)?;

        let mut port_bytes = [0u8; 2];
        stream.read_exact(&mut port_bytes)?;

        Ok(NetworkAddr {
            time: u32::from_le_bytes(time_bytes),
            services: u64::from_le_bytes(services_bytes),
            ip: Ipv6Addr::from(ip_bytes),
            port: u16::from_be_bytes(port_bytes),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(NETWORK_ADDR_SIZE);

        bytes.extend_from_slice(&self.time.to_le_bytes());
        bytes.extend_from_slice(&self.services.to_le_bytes());
        bytes.extend_from_slice(&self.ip.octets());
        bytes.extend_from_slice(&self.port.to_be_bytes());

        bytes
    }

    /// IPv4-mapped addresses come back as plain IPv4 sockets.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        };
        SocketAddr::new(ip, self.port)
    }

    pub fn last_seen(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.time as i64, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_wire_layout() {
        let addr = NetworkAddr::new(
            Ipv4Addr::new(10, 0, 0, 1).to_ipv6_mapped(),
            44321,
            1,
            0x01020304,
        );
        let bytes = addr.to_bytes();

        assert_eq!(bytes.len(), NETWORK_ADDR_SIZE);
        assert_eq!(&bytes[0..4], &[4, 3, 2, 1]);
        assert_eq!(&bytes[4..12], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[22..28], &[0xff, 0xff, 10, 0, 0, 1]);
        assert_eq!(&bytes[28..30], &44321u16.to_be_bytes());

        let read = NetworkAddr::read_from(&mut &bytes[..]).unwrap();
        assert_eq!(read, addr);
    }

    #[test]
    fn test_truncated_stream_is_an_error() {
        let bytes = [0u8; 10];
        assert!(matches!(
            NetworkAddr::read_from(&mut &bytes[..]),
            Err(ChainParamsError::IOError(_))
        ));
    }

    #[test]
    fn test_socket_addr_unmaps_ipv4() {
        let addr = NetworkAddr::new(Ipv4Addr::new(45, 76, 112, 18).to_ipv6_mapped(), 44321, 1, 0);
        assert_eq!(addr.socket_addr().to_string(), "45.76.112.18:44321");
        assert_eq!(addr.last_seen().map(|t| t.timestamp()), Some(0));
    }
}
