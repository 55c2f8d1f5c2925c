//! Ethernet Filter Properties Information Element
//!
//! The Ethernet Filter Properties IE contains properties for Ethernet packet filtering.
//! Per 3GPP TS 29.244 Section 8.2.99, this IE specifies bidirectional filtering behavior.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Ethernet Filter Properties
///
/// Specifies properties for Ethernet packet filtering.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.99
///
/// # Structure
/// - Octet 5: Flags (currently only BIDE flag defined)
///
/// ```text
/// Bit 1: BIDE (Bidirectional) - Indicates bidirectional filtering
/// Bits 2-8: Spare (set to 0)
/// ```
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
///
/// // Create bidirectional filter
/// let props = EthernetFilterProperties::new(true);
/// assert!(props.is_bidirectional());
///
/// // Create unidirectional filter
/// let props2 = EthernetFilterProperties::new(false);
/// assert!(!props2.is_bidirectional());
///
/// // Marshal and unmarshal
/// let bytes = props.marshal();
/// let parsed = EthernetFilterProperties::unmarshal(&bytes).unwrap();
/// assert_eq!(props, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthernetFilterProperties {
    /// BIDE flag - Bidirectional filtering
    bide: bool,
}

impl EthernetFilterProperties {
    /// BIDE flag bit mask
    const BIDE_FLAG: u8 = 0x01;

    /// Create new Ethernet Filter Properties
    ///
    /// # Arguments
    /// * `bidirectional` - True for bidirectional filtering, false for unidirectional
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
    ///
    /// let props = EthernetFilterProperties::new(true);
    /// assert!(props.is_bidirectional());
    /// ```
    pub fn new(bidirectional: bool) -> Self {
        EthernetFilterProperties {
            bide: bidirectional,
        }
    }

    /// Create bidirectional filter properties
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
    ///
    /// let props = EthernetFilterProperties::bidirectional();
    /// assert!(props.is_bidirectional());
    /// ```
    pub fn bidirectional() -> Self {
        EthernetFilterProperties::new(true)
    }

    /// Create unidirectional filter properties
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
    ///
    /// let props = EthernetFilterProperties::unidirectional();
    /// assert!(!props.is_bidirectional());
    /// ```
    pub fn unidirectional() -> Self {
        EthernetFilterProperties::new(false)
    }

    /// Check if bidirectional filtering is enabled
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
    ///
    /// let props = EthernetFilterProperties::new(true);
    /// assert!(props.is_bidirectional());
    /// ```
    pub fn is_bidirectional(&self) -> bool {
        self.bide
    }

    /// Marshal Ethernet Filter Properties to bytes
    ///
    /// # Returns
    /// 1-byte array with flags
    pub fn marshal(&self) -> [u8; 1] {
        let mut flags = 0u8;
        if self.bide {
            flags |= Self::BIDE_FLAG;
        }
        [flags]
    }

    /// Unmarshal Ethernet Filter Properties from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing properties data (must be at least 1 byte)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
    ///
    /// let props = EthernetFilterProperties::bidirectional();
    /// let bytes = props.marshal();
    /// let parsed = EthernetFilterProperties::unmarshal(&bytes).unwrap();
    /// assert_eq!(props, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "Ethernet Filter Properties",
                IeType::EthernetFilterProperties,
                1,
                0,
            ));
        }

        let bide = (data[0] & Self::BIDE_FLAG) != 0;

        Ok(EthernetFilterProperties { bide })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ethernet_filter_properties::EthernetFilterProperties;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let props = EthernetFilterProperties::bidirectional();
    /// let ie = props.to_ie();
    /// assert_eq!(ie.ie_type, IeType::EthernetFilterProperties);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::EthernetFilterProperties, self.marshal().to_vec())
    }
}
