//! FQ-CSID (Fully Qualified Control and Service Instance Identifier) Information Element.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Represents a Fully Qualified Control and Service Instance Identifier.
///
/// The FQ-CSID IE indicates the FQ-CSID(s) of the control plane nodes.
/// It contains a Node ID and one or more CSIDs associated with that node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FqCsid {
    pub node_id_type: NodeIdType,
    pub node_id: NodeId,
    pub csids: Vec<u16>,
}

/// Node ID type within FQ-CSID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeIdType {
    Ipv4 = 0,
    Ipv6 = 1,
    Fqdn = 2,
}

/// Node ID within FQ-CSID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeId {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Fqdn(String),
}

impl FqCsid {
    /// Creates a new FQ-CSID with IPv4 node ID.
    pub fn new_ipv4(addr: Ipv4Addr, csids: Vec<u16>) -> Self {
        FqCsid {
            node_id_type: NodeIdType::Ipv4,
            node_id: NodeId::Ipv4(addr),
            csids,
        }
    }

    /// Creates a new FQ-CSID with IPv6 node ID.
    pub fn new_ipv6(addr: Ipv6Addr, csids: Vec<u16>) -> Self {
        FqCsid {
            node_id_type: NodeIdType::Ipv6,
            node_id: NodeId::Ipv6(addr),
            csids,
        }
    }

    /// Creates a new FQ-CSID with FQDN node ID.
    pub fn new_fqdn(fqdn: String, csids: Vec<u16>) -> Self {
        FqCsid {
            node_id_type: NodeIdType::Fqdn,
            node_id: NodeId::Fqdn(fqdn),
            csids,
        }
    }

    /// Encodes FQDN according to DNS message format (RFC 1035 clause 3.1) without trailing zero.
    fn encode_fqdn(fqdn: &str) -> Vec<u8> {
        let mut encoded = Vec::new();

        if fqdn.is_empty() {
            return encoded;
        }

        for label in fqdn.split('.') {
            if label.len() > 63 {
                // Label too long, truncate
                encoded.push(63);
                encoded.extend_from_slice(&label.as_bytes()[..63]);
            } else if !label.is_empty() {
                encoded.push(label.len() as u8);
                encoded.extend_from_slice(label.as_bytes());
            }
        }

        encoded
    }

    /// Decodes FQDN from DNS message format.
    fn decode_fqdn(data: &[u8]) -> Result<String, PfcpError> {
        let mut result = String::new();
        let mut offset = 0;

        while offset < data.len() {
            let label_len = data[offset] as usize;
            offset += 1;

            if label_len == 0 {
                break; // End of FQDN
            }

            if offset + label_len > data.len() {
                return Err(PfcpError::invalid_value(
                    "FQ-CSID FQDN",
                    label_len.to_string(),
                    "label length exceeds available data",
                ));
            }

            if !result.is_empty() {
                result.push('.');
            }

            let label_bytes = &data[offset..offset + label_len];
            let label = String::from_utf8(label_bytes.to_vec()).map_err(|_| {
                PfcpError::invalid_value("FQ-CSID FQDN", "non-UTF8", "invalid UTF-8 in FQDN label")
            })?;
            result.push_str(&label);
            offset += label_len;
        }

        Ok(result)
    }

    /// Marshals the FQ-CSID into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        let mut data = Vec::new();

        // Number of CSIDs (4 bits) + Node ID Type (4 bits)
        let num_csids = self.csids.len().min(15) as u8; // Max 15 CSIDs in 4 bits
        let first_byte = (num_csids << 4) | (self.node_id_type as u8);
        data.push(first_byte);

        // Node ID based on type
        match &self.node_id {
            NodeId::Ipv4(addr) => {
                data.extend_from_slice(&addr.octets());
            }
            NodeId::Ipv6(addr) => {
                data.extend_from_slice(&addr.octets());
            }
            NodeId::Fqdn(fqdn) => {
                // Encode FQDN according to DNS message format (RFC 1035)
                let encoded_fqdn = Self::encode_fqdn(fqdn);
                data.extend_from_slice(&encoded_fqdn);
            }
        }

        // CSIDs (each CSID is 2 bytes, big endian)
        for csid in &self.csids {
            data.extend_from_slice(&csid.to_be_bytes());
        }

        data
    }

    /// Unmarshals an FQ-CSID from a byte slice.
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length("FQ-CSID", IeType::FqCsid, 1, 0));
        }

        let first_byte = data[0];
        let num_csids = (first_byte >> 4) as usize;
        let node_id_type_val = first_byte & 0x0F;

        let node_id_type = match node_id_type_val {
            0 => NodeIdType::Ipv4,
            1 => NodeIdType::Ipv6,
            2 => NodeIdType::Fqdn,
            _ => {
                return Err(PfcpError::invalid_value(
                    "FQ-CSID Node ID type",
                    node_id_type_val.to_string(),
                    "must be 0 (IPv4), 1 (IPv6), or 2 (FQDN)",
                ))
            }
        };

        let mut offset = 1;
        let (node_id, node_id_len) = match node_id_type {
            NodeIdType::Ipv4 => {
                if data.len() < offset + 4 {
                    return Err(PfcpError::invalid_length(
                        "FQ-CSID IPv4 Node ID",
                        IeType::FqCsid,
                        offset + 4,
                        data.len(),
                    ));
                }
                let mut octets = [0u8; 4];
                octets.copy_from_slice(&data[offset..offset + 4]);
                (NodeId::Ipv4(Ipv4Addr::from(octets)), 4)
            }
            NodeIdType::Ipv6 => {
                if data.len() < offset + 16 {
                    return Err(PfcpError::invalid_length(
                        "FQ-CSID IPv6 Node ID",
                        IeType::FqCsid,
                        offset + 16,
                        data.len(),
                    ));
                }
                let mut octets = [0u8; 16];
                octets.copy_from_slice(&data[offset..offset + 16]);
                (NodeId::Ipv6(Ipv6Addr::from(octets)), 16)
            }
            NodeIdType::Fqdn => {
                // Calculate FQDN length by finding where CSIDs start
                let csids_start_offset = data.len() - (num_csids * 2);
                if csids_start_offset <= offset {
                    return Err(PfcpError::invalid_length(
                        "FQ-CSID FQDN",
                        IeType::FqCsid,
                        offset + 1,
                        csids_start_offset,
                    ));
                }
                let fqdn_len = csids_start_offset - offset;
                let fqdn_bytes = &data[offset..offset + fqdn_len];
                let fqdn = Self::decode_fqdn(fqdn_bytes)?;
                (NodeId::Fqdn(fqdn), fqdn_len)
            }
        };
        offset += node_id_len;

        // Parse CSIDs
        let mut csids = Vec::new();
        for _ in 0..num_csids {
            if data.len() < offset + 2 {
                return Err(PfcpError::invalid_length(
                    "FQ-CSID CSID",
                    IeType::FqCsid,
                    offset + 2,
                    data.len(),
                ));
            }
            let mut csid_bytes = [0u8; 2];
            csid_bytes.copy_from_slice(&data[offset..offset + 2]);
            csids.push(u16::from_be_bytes(csid_bytes));
            offset += 2;
        }

        Ok(FqCsid {
            node_id_type,
            node_id,
            csids,
        })
    }

    /// Converts to an IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::FqCsid, self.marshal())
    }
}

impl From<(Ipv4Addr, Vec<u16>)> for FqCsid {
    fn from((addr, csids): (Ipv4Addr, Vec<u16>)) -> Self {
        FqCsid::new_ipv4(addr, csids)
    }
}

impl From<(Ipv6Addr, Vec<u16>)> for FqCsid {
    fn from((addr, csids): (Ipv6Addr, Vec<u16>)) -> Self {
        FqCsid::new_ipv6(addr, csids)
    }
}

impl From<(String, Vec<u16>)> for FqCsid {
    fn from((fqdn, csids): (String, Vec<u16>)) -> Self {
        FqCsid::new_fqdn(fqdn, csids)
    }
}
