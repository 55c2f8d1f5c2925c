//! Path Failure Report IE.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Represents the Path Failure Report Information Element.
/// Used to report path failures in multi-path scenarios for network resilience.
/// Defined in 3GPP TS 29.244 Section 8.2.105.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFailureReport {
    pub remote_peer_addresses: Vec<RemotePeerAddress>,
}

/// Represents a remote peer address that has failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePeerAddress {
    pub address_type: AddressType,
    pub address: Vec<u8>,
}

/// Address type for remote peer addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum AddressType {
    /// IPv4 address (4 bytes)
    Ipv4 = 0,
    /// IPv6 address (16 bytes)
    Ipv6 = 1,
    /// FQDN (Fully Qualified Domain Name)
    Fqdn = 2,
    /// Unknown/reserved address type
    Unknown(u8),
}

impl From<u8> for AddressType {
    fn from(value: u8) -> Self {
        match value {
            0 => AddressType::Ipv4,
            1 => AddressType::Ipv6,
            2 => AddressType::Fqdn,
            _ => AddressType::Unknown(value),
        }
    }
}

impl From<AddressType> for u8 {
    fn from(addr_type: AddressType) -> u8 {
        match addr_type {
            AddressType::Ipv4 => 0,
            AddressType::Ipv6 => 1,
            AddressType::Fqdn => 2,
            AddressType::Unknown(value) => value,
        }
    }
}

impl RemotePeerAddress {
    /// Creates a new remote peer address.
    pub fn new(address_type: AddressType, address: Vec<u8>) -> Self {
        RemotePeerAddress {
            address_type,
            address,
        }
    }

    /// Creates a remote peer address with IPv4.
    pub fn ipv4(ipv4: std::net::Ipv4Addr) -> Self {
        RemotePeerAddress::new(AddressType::Ipv4, ipv4.octets().to_vec())
    }

    /// Creates a remote peer address with IPv6.
    pub fn ipv6(ipv6: std::net::Ipv6Addr) -> Self {
        RemotePeerAddress::new(AddressType::Ipv6, ipv6.octets().to_vec())
    }

    /// Creates a remote peer address with FQDN.
    pub fn fqdn(fqdn: String) -> Self {
        RemotePeerAddress::new(AddressType::Fqdn, fqdn.into_bytes())
    }

    /// Gets the address as IPv4 if possible.
    pub fn as_ipv4(&self) -> Option<std::net::Ipv4Addr> {
        if self.address_type == AddressType::Ipv4 && self.address.len() == 4 {
            Some(std::net::Ipv4Addr::new(
                self.address[0],
                self.address[1],
                self.address[2],
                self.address[3],
            ))
        } else {
            None
        }
    }

    /// Gets the address as IPv6 if possible.
    pub fn as_ipv6(&self) -> Option<std::net::Ipv6Addr> {
        if self.address_type == AddressType::Ipv6 && self.address.len() == 16 {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&self.address);
            Some(std::net::Ipv6Addr::from(octets))
        } else {
            None
        }
    }

    /// Gets the address as FQDN string if possible.
    pub fn as_fqdn(&self) -> Option<String> {
        if self.address_type == AddressType::Fqdn {
            String::from_utf8(self.address.clone()).ok()
        } else {
            None
        }
    }

    /// Marshals the remote peer address.
    pub fn marshal(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.push(u8::from(self.address_type.clone()));
        data.push(self.address.len() as u8);
        data.extend_from_slice(&self.address);
        data
    }

    /// Unmarshals a remote peer address.
    pub fn unmarshal(payload: &[u8], offset: &mut usize) -> Result<Self, PfcpError> {
        if *offset + 2 > payload.len() {
            return Err(PfcpError::invalid_length(
                "Remote peer address",
                IeType::UserPlanePathFailureReport,
                *offset + 2,
                payload.len(),
            ));
        }

        let address_type = AddressType::from(payload[*offset]);
        *offset += 1;

        let address_len = payload[*offset] as usize;
        *offset += 1;

        if *offset + address_len > payload.len() {
            return Err(PfcpError::invalid_length(
                "Remote peer address data",
                IeType::UserPlanePathFailureReport,
                *offset + address_len,
                payload.len(),
            ));
        }

        let address = payload[*offset..*offset + address_len].to_vec();
        *offset += address_len;

        Ok(RemotePeerAddress {
            address_type,
            address,
        })
    }
}

impl PathFailureReport {
    /// Creates a new Path Failure Report IE.
    pub fn new(remote_peer_addresses: Vec<RemotePeerAddress>) -> Self {
        PathFailureReport {
            remote_peer_addresses,
        }
    }

    /// Creates an empty Path Failure Report.
    pub fn empty() -> Self {
        PathFailureReport::new(Vec::new())
    }

    /// Adds a remote peer address to the failure report.
    pub fn add_peer_address(mut self, peer_address: RemotePeerAddress) -> Self {
        self.remote_peer_addresses.push(peer_address);
        self
    }

    /// Adds an IPv4 peer address to the failure report.
    pub fn add_ipv4_peer(mut self, ipv4: std::net::Ipv4Addr) -> Self {
        self.remote_peer_addresses
            .push(RemotePeerAddress::ipv4(ipv4));
        self
    }

    /// Adds an IPv6 peer address to the failure report.
    pub fn add_ipv6_peer(mut self, ipv6: std::net::Ipv6Addr) -> Self {
        self.remote_peer_addresses
            .push(RemotePeerAddress::ipv6(ipv6));
        self
    }

    /// Adds an FQDN peer address to the failure report.
    pub fn add_fqdn_peer(mut self, fqdn: String) -> Self {
        self.remote_peer_addresses
            .push(RemotePeerAddress::fqdn(fqdn));
        self
    }

    /// Gets the number of failed peer addresses.
    pub fn peer_count(&self) -> usize {
        self.remote_peer_addresses.len()
    }

    /// Checks if the failure report is empty.
    pub fn is_empty(&self) -> bool {
        self.remote_peer_addresses.is_empty()
    }

    /// Gets the length of the marshaled Path Failure Report.
    pub fn len(&self) -> usize {
        1 + self
            .remote_peer_addresses
            .iter()
            .map(|addr| 1 + 1 + addr.address.len()) // type + len + address
            .sum::<usize>()
    }

    /// Marshals the Path Failure Report into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut data = Vec::new();

        // Number of remote peer addresses
        data.push(self.remote_peer_addresses.len() as u8);

        // Each remote peer address
        for peer_addr in &self.remote_peer_addresses {
            data.extend_from_slice(&peer_addr.marshal());
        }

        data
    }

    /// Unmarshals a byte slice into a Path Failure Report IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        if payload.is_empty() {
            return Err(PfcpError::invalid_length(
                "Path Failure Report",
                IeType::UserPlanePathFailureReport,
                1,
                0,
            ));
        }

        let mut offset = 0;
        let peer_count = payload[offset] as usize;
        offset += 1;

        let mut remote_peer_addresses = Vec::new();
        for _ in 0..peer_count {
            let peer_addr = RemotePeerAddress::unmarshal(payload, &mut offset)?;
            remote_peer_addresses.push(peer_addr);
        }

        Ok(PathFailureReport {
            remote_peer_addresses,
        })
    }

    /// Wraps the Path Failure Report in a Path Failure Report IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UserPlanePathFailureReport, self.marshal())
    }
}
