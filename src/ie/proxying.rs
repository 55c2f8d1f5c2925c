//! Proxying IE.
//!
//! Indicates whether proxying functionality is enabled (ARP proxying or ND proxying).
//! Used in ForwardingParameters for IP address resolution proxying.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Proxying IE
///
/// Specifies ARP (Address Resolution Protocol) and/or ND (Neighbor Discovery)
/// proxying configuration for the UPF.
///
/// # 3GPP TS 29.244 Reference
/// - Section 8.2.137: Proxying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proxying {
    pub arp: bool, // ARP proxying
    pub inp: bool, // IPv6 Neighbor Discovery proxying
}

impl Proxying {
    /// Creates a new Proxying IE with no proxying enabled
    pub fn new() -> Self {
        Proxying {
            arp: false,
            inp: false,
        }
    }

    /// Creates Proxying IE with ARP proxying enabled
    pub fn arp() -> Self {
        Proxying {
            arp: true,
            inp: false,
        }
    }

    /// Creates Proxying IE with IPv6 ND proxying enabled
    pub fn ipv6_nd() -> Self {
        Proxying {
            arp: false,
            inp: true,
        }
    }

    /// Creates Proxying IE with both ARP and IPv6 ND proxying enabled
    pub fn both() -> Self {
        Proxying {
            arp: true,
            inp: true,
        }
    }

    /// Enables ARP proxying
    pub fn with_arp(mut self) -> Self {
        self.arp = true;
        self
    }

    /// Enables IPv6 ND proxying
    pub fn with_ipv6_nd(mut self) -> Self {
        self.inp = true;
        self
    }

    /// Marshals the Proxying IE into bytes
    pub fn marshal(&self) -> Vec<u8> {
        let mut flags = 0u8;
        if self.arp {
            flags |= 0x01; // Bit 0
        }
        if self.inp {
            flags |= 0x02; // Bit 1
        }
        vec![flags]
    }

    /// Unmarshals bytes into a Proxying IE
    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        if payload.is_empty() {
            return Err(PfcpError::invalid_length(
                "Proxying",
                IeType::Proxying,
                1,
                0,
            ));
        }

        let flags = payload[0];
        Ok(Proxying {
            arp: (flags & 0x01) != 0,
            inp: (flags & 0x02) != 0,
        })
    }

    /// Wraps the Proxying in an IE
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::Proxying, self.marshal())
    }
}

impl Default for Proxying {
    fn default() -> Self {
        Self::new()
    }
}
