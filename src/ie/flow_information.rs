//! Flow Information Information Element
//!
//! The Flow Information IE contains an IPFilterRule string describing a packet filter.
//! Per 3GPP TS 29.244 Section 8.2.61 and 3GPP TS 29.212 Section 5.4.2.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Flow Information
///
/// Specifies a packet filter rule in IPFilterRule format per RFC 6733 and 3GPP TS 29.212.
/// The rule follows the format: `permit out \<protocol\> from \<src-addr\> [port] to \<dst-addr\> [port]`
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.61
/// 3GPP TS 29.212 Section 5.4.2 (Flow-Description AVP)
/// RFC 6733 (DIAMETER)
///
/// # Structure
/// - Variable length: UTF-8 encoded IPFilterRule string (max 255 bytes)
/// - Format: "permit out \<protocol\> from \<source\> to \<destination\>"
///   - Action: always "permit"
///   - Direction: always "out"
///   - Protocol: decimal number or "ip" (not used)
///   - Source IP: IPv4/IPv6 (possibly masked) or "any"
///   - Source port: optional (decimal or range like 8000-9000)
///   - Destination IP: IPv4/IPv6 (possibly masked) or "assigned"
///   - Destination port: optional (decimal or range)
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::flow_information::FlowInformation;
///
/// // Create flow information with a packet filter rule
/// let flow = FlowInformation::new(
///     "permit out ip from any to assigned".to_string()
/// )?;
/// assert_eq!(flow.value(), "permit out ip from any to assigned");
///
/// // Marshal and unmarshal
/// let bytes = flow.marshal();
/// let parsed = FlowInformation::unmarshal(&bytes)?;
/// assert_eq!(flow, parsed);
/// # Ok::<(), pfcp_engine::error::PfcpError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowInformation {
    /// IPFilterRule string describing the packet filter
    value: String,
}

impl FlowInformation {
    /// Maximum flow information length (255 bytes per 3GPP spec)
    pub const MAX_LEN: usize = 255;

    /// Create a new Flow Information
    ///
    /// # Arguments
    /// * `value` - IPFilterRule string (RFC 6733 format)
    ///
    /// # Errors
    /// Returns error if string exceeds maximum length
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    ///
    /// let flow = FlowInformation::new(
    ///     "permit out 6 from 192.168.1.0/24 80 to assigned 443".to_string()
    /// )?;
    /// assert_eq!(flow.value(), "permit out 6 from 192.168.1.0/24 80 to assigned 443");
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn new(value: String) -> Result<Self, PfcpError> {
        if value.len() > Self::MAX_LEN {
            return Err(PfcpError::invalid_value(
                "Flow Information",
                "value",
                format!("exceeds maximum length {} bytes", Self::MAX_LEN),
            ));
        }
        Ok(FlowInformation { value })
    }

    /// Create a flow information for all IP traffic
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    ///
    /// let flow = FlowInformation::all_traffic()?;
    /// assert_eq!(flow.value(), "permit out ip from any to assigned");
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn all_traffic() -> Result<Self, PfcpError> {
        FlowInformation::new("permit out ip from any to assigned".to_string())
    }

    /// Create a flow information for TCP traffic
    ///
    /// # Arguments
    /// * `src_port` - Source port or port range (e.g., "80" or "8000-9000")
    /// * `dst_port` - Destination port or port range
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    ///
    /// let flow = FlowInformation::tcp_traffic("any", "80")?;
    /// assert_eq!(flow.value(), "permit out 6 from any to assigned 80");
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn tcp_traffic(src_port: &str, dst_port: &str) -> Result<Self, PfcpError> {
        let rule = if src_port == "any" {
            format!("permit out 6 from any to assigned {}", dst_port)
        } else {
            format!(
                "permit out 6 from any {} to assigned {}",
                src_port, dst_port
            )
        };
        FlowInformation::new(rule)
    }

    /// Create a flow information for UDP traffic
    ///
    /// # Arguments
    /// * `src_port` - Source port or port range
    /// * `dst_port` - Destination port or port range
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    ///
    /// let flow = FlowInformation::udp_traffic("any", "53")?;
    /// assert_eq!(flow.value(), "permit out 17 from any to assigned 53");
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn udp_traffic(src_port: &str, dst_port: &str) -> Result<Self, PfcpError> {
        let rule = if src_port == "any" {
            format!("permit out 17 from any to assigned {}", dst_port)
        } else {
            format!(
                "permit out 17 from any {} to assigned {}",
                src_port, dst_port
            )
        };
        FlowInformation::new(rule)
    }

    /// Get the flow information value
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    ///
    /// let flow = FlowInformation::new(
    ///     "permit out 6 from 10.0.0.0/8 to assigned".to_string()
    /// )?;
    /// assert_eq!(flow.value(), "permit out 6 from 10.0.0.0/8 to assigned");
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Marshal Flow Information to bytes
    ///
    /// # Returns
    /// Vector containing UTF-8 encoded IPFilterRule string
    pub fn marshal(&self) -> Vec<u8> {
        self.value.as_bytes().to_vec()
    }

    /// Unmarshal Flow Information from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing IPFilterRule (must be valid UTF-8)
    ///
    /// # Errors
    /// Returns error if data is not valid UTF-8 or exceeds maximum length
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    ///
    /// let flow = FlowInformation::new(
    ///     "permit out 6 from any to assigned 443".to_string()
    /// )?;
    /// let bytes = flow.marshal();
    /// let parsed = FlowInformation::unmarshal(&bytes)?;
    /// assert_eq!(flow, parsed);
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() > Self::MAX_LEN {
            return Err(PfcpError::invalid_length(
                "Flow Information",
                IeType::FlowInformation,
                Self::MAX_LEN,
                data.len(),
            ));
        }

        let value = String::from_utf8(data.to_vec()).map_err(|_| {
            PfcpError::invalid_value("Flow Information", "value", "not valid UTF-8")
        })?;

        Ok(FlowInformation { value })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::flow_information::FlowInformation;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let flow = FlowInformation::new(
    ///     "permit out ip from any to assigned".to_string()
    /// )?;
    /// let ie = flow.to_ie();
    /// assert_eq!(ie.ie_type, IeType::FlowInformation);
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn to_ie(&self) -> Ie {
        let data = self.marshal();
        Ie::new(IeType::FlowInformation, data)
    }
}
