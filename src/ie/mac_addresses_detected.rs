//! MAC Addresses Detected Information Element
//!
//! The MAC Addresses Detected IE contains a list of MAC address values that have been detected
//! on an Ethernet PDU session. Per 3GPP TS 29.244 Section 8.2.103, this IE contains raw
//! 6-byte MAC address values plus optional VLAN tags.

use crate::ie::c_tag::CTag;
use crate::ie::s_tag::STag;
use crate::ie::{Ie, IeType};
use std::io;

/// MAC Addresses Detected
///
/// Contains a list of raw MAC address values detected on an Ethernet PDU session,
/// optionally associated with VLAN tags.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.103
///
/// # Structure (per 3GPP TS 29.244 §8.2.103)
/// - Octet 5: Number of MAC addresses (k)
/// - Octets 6 to 11: MAC address value 1 (6 bytes)
/// - Octets (o) to (o+5): MAC address value k (6 bytes)
/// - Length of C-TAG field (1 byte)
/// - C-TAG field (3 bytes if length > 0)
/// - Length of S-TAG field (1 byte)
/// - S-TAG field (3 bytes if length > 0)
///
/// Per spec: "Several IEs with the same IE type may be present to provision
/// multiple lists of MAC addresses (e.g. with different V-LAN tags)."
///
/// Note: This IE contains raw 6-byte MAC address values, not MAC Address IEs.
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::mac_addresses_detected::MacAddressesDetected;
/// use pfcp_engine::ie::c_tag::CTag;
///
/// // Create with single MAC address (no VLAN tags)
/// let mac1 = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
/// let detected = MacAddressesDetected::new(vec![mac1]).unwrap();
/// assert_eq!(detected.addresses().len(), 1);
///
/// // Create with multiple MAC addresses and VLAN tag
/// let mac2 = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
/// let ctag = CTag::new(3, false, 100).unwrap();
/// let detected_vlan = MacAddressesDetected::new_with_vlan(
///     vec![mac1, mac2],
///     Some(ctag),
///     None
/// ).unwrap();
/// assert_eq!(detected_vlan.addresses().len(), 2);
/// assert!(detected_vlan.c_tag().is_some());
///
/// // Marshal and unmarshal
/// let bytes = detected.marshal();
/// let parsed = MacAddressesDetected::unmarshal(&bytes).unwrap();
/// assert_eq!(detected, parsed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddressesDetected {
    /// List of detected MAC address values (6 bytes each)
    addresses: Vec<[u8; 6]>,
    /// Optional C-TAG (Customer VLAN Tag) - per 3GPP TS 29.244 §8.2.103
    c_tag: Option<CTag>,
    /// Optional S-TAG (Service VLAN Tag) - per 3GPP TS 29.244 §8.2.103
    s_tag: Option<STag>,
}

impl MacAddressesDetected {
    /// Maximum number of MAC addresses (per spec)
    pub const MAX_ADDRESSES: usize = 255;

    /// Create new MAC Addresses Detected IE without VLAN tags
    ///
    /// # Arguments
    /// * `addresses` - List of MAC addresses (max 255)
    ///
    /// # Errors
    /// Returns error if more than 255 addresses provided
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::mac_addresses_detected::MacAddressesDetected;
    ///
    /// let mac = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
    /// let detected = MacAddressesDetected::new(vec![mac]).unwrap();
    /// assert_eq!(detected.addresses().len(), 1);
    /// ```
    pub fn new(addresses: Vec<[u8; 6]>) -> Result<Self, io::Error> {
        Self::new_with_vlan(addresses, None, None)
    }

    /// Create new MAC Addresses Detected IE with optional VLAN tags
    ///
    /// # Arguments
    /// * `addresses` - List of MAC addresses (max 255)
    /// * `c_tag` - Optional Customer VLAN tag
    /// * `s_tag` - Optional Service VLAN tag
    ///
    /// # Errors
    /// Returns error if more than 255 addresses provided
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::mac_addresses_detected::MacAddressesDetected;
    /// use pfcp_engine::ie::c_tag::CTag;
    ///
    /// let mac = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
    /// let ctag = CTag::new(3, false, 100).unwrap();
    /// let detected = MacAddressesDetected::new_with_vlan(
    ///     vec![mac],
    ///     Some(ctag),
    ///     None
    /// ).unwrap();
    /// assert!(detected.c_tag().is_some());
    /// ```
    pub fn new_with_vlan(
        addresses: Vec<[u8; 6]>,
        c_tag: Option<CTag>,
        s_tag: Option<STag>,
    ) -> Result<Self, io::Error> {
        if addresses.len() > Self::MAX_ADDRESSES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "MAC Addresses Detected cannot contain more than {} addresses, got {}",
                    Self::MAX_ADDRESSES,
                    addresses.len()
                ),
            ));
        }
        Ok(MacAddressesDetected {
            addresses,
            c_tag,
            s_tag,
        })
    }

    /// Create empty MAC Addresses Detected IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::mac_addresses_detected::MacAddressesDetected;
    ///
    /// let detected = MacAddressesDetected::empty();
    /// assert_eq!(detected.addresses().len(), 0);
    /// ```
    pub fn empty() -> Self {
        MacAddressesDetected {
            addresses: Vec::new(),
            c_tag: None,
            s_tag: None,
        }
    }

    /// Get the list of detected MAC address values
    pub fn addresses(&self) -> &[[u8; 6]] {
        &self.addresses
    }

    /// Get the optional C-TAG (Customer VLAN tag)
    pub fn c_tag(&self) -> Option<&CTag> {
        self.c_tag.as_ref()
    }

    /// Get the optional S-TAG (Service VLAN tag)
    pub fn s_tag(&self) -> Option<&STag> {
        self.s_tag.as_ref()
    }

    /// Get the number of detected MAC addresses
    pub fn count(&self) -> usize {
        self.addresses.len()
    }

    /// Marshal MAC Addresses Detected to bytes per 3GPP TS 29.244 §8.2.103
    ///
    /// # Returns
    /// Vector with:
    /// - Count byte
    /// - MAC address values (6 bytes each)
    /// - C-TAG length (1 byte) + C-TAG data (3 bytes if present)
    /// - S-TAG length (1 byte) + S-TAG data (3 bytes if present)
    pub fn marshal(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.addresses.len() * 6 + 2 + 6);

        // Octet 5: Number of MAC addresses
        bytes.push(self.addresses.len() as u8);

        // Octets 6+: MAC address values (6 bytes each)
        for mac in &self.addresses {
            bytes.extend_from_slice(mac);
        }

        // Length of C-TAG field (1 byte)
        if let Some(ref ctag) = self.c_tag {
            bytes.push(3); // C-TAG is 3 bytes
            bytes.extend_from_slice(&ctag.marshal());
        } else {
            bytes.push(0); // No C-TAG
        }

        // Length of S-TAG field (1 byte)
        if let Some(ref stag) = self.s_tag {
            bytes.push(3); // S-TAG is 3 bytes
            bytes.extend_from_slice(&stag.marshal());
        } else {
            bytes.push(0); // No S-TAG
        }

        bytes
    }

    /// Unmarshal MAC Addresses Detected from bytes per 3GPP TS 29.244 §8.2.103
    ///
    /// # Arguments
    /// * `data` - Byte slice containing MAC addresses data and optional VLAN tags
    ///
    /// # Errors
    /// Returns error if data is too short or malformed
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::mac_addresses_detected::MacAddressesDetected;
    ///
    /// let mac = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    /// let detected = MacAddressesDetected::new(vec![mac]).unwrap();
    /// let bytes = detected.marshal();
    /// let parsed = MacAddressesDetected::unmarshal(&bytes).unwrap();
    /// assert_eq!(detected, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "MAC Addresses Detected requires at least 1 byte for count",
            ));
        }

        let count = data[0] as usize;
        let mut offset = 1;

        // Parse MAC addresses
        let mut addresses = Vec::with_capacity(count);
        for i in 0..count {
            if offset + 6 > data.len() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "MAC Addresses Detected: incomplete MAC address {} at offset {}",
                        i, offset
                    ),
                ));
            }

            let mut mac = [0u8; 6];
            mac.copy_from_slice(&data[offset..offset + 6]);
            addresses.push(mac);
            offset += 6;
        }

        // Parse C-TAG length and value
        let c_tag = if offset < data.len() {
            let ctag_len = data[offset] as usize;
            offset += 1;

            if ctag_len > 0 {
                if ctag_len != 3 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("C-TAG length must be 0 or 3, got {}", ctag_len),
                    ));
                }
                if offset + 3 > data.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "MAC Addresses Detected: incomplete C-TAG data",
                    ));
                }
                let ctag = CTag::unmarshal(&data[offset..offset + 3])?;
                offset += 3;
                Some(ctag)
            } else {
                None
            }
        } else {
            None
        };

        // Parse S-TAG length and value
        let s_tag = if offset < data.len() {
            let stag_len = data[offset] as usize;
            offset += 1;

            if stag_len > 0 {
                if stag_len != 3 {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("S-TAG length must be 0 or 3, got {}", stag_len),
                    ));
                }
                if offset + 3 > data.len() {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "MAC Addresses Detected: incomplete S-TAG data",
                    ));
                }
                let stag = STag::unmarshal(&data[offset..offset + 3])?;
                Some(stag)
            } else {
                None
            }
        } else {
            None
        };

        Ok(MacAddressesDetected {
            addresses,
            c_tag,
            s_tag,
        })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::mac_addresses_detected::MacAddressesDetected;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let mac = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
    /// let detected = MacAddressesDetected::new(vec![mac]).unwrap();
    /// let ie = detected.to_ie();
    /// assert_eq!(ie.ie_type, IeType::MacAddressesDetected);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::MacAddressesDetected, self.marshal())
    }
}
