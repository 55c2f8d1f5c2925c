//! Measurement Information Information Element
//!
//! The Measurement Information IE contains flags for measurement control in usage reporting.
//! Per 3GPP TS 29.244 Section 8.2.68.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Measurement Information
///
/// Contains one-byte bitflags for measurement control in usage reports.
/// Used to indicate which measurements should be included in usage reports and control measurement behavior.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.68
///
/// # Structure
/// - 1 byte: Measurement flags
///   - Bit 1 (MBQE): Measurement Before QoS Enforcement
///   - Bit 2 (INAM): Inactive Measurement (pause measurement)
///   - Bit 3 (RADI): Reduced Application Detection Information
///   - Bit 4 (ISTM): Immediate Start Time Metering
///   - Bit 5 (MNOP): Measurement of Number of Packets
///   - Bit 6 (SSPOC): Send Start Pause of Charging
///   - Bit 7 (ASPOC): Applicable for Start of Pause of Charging
///   - Bit 8 (CIAM): Control of Inactive Measurement
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::measurement_information::MeasurementInformation;
///
/// // Create Measurement Information with MBQE flag set
/// let mi = MeasurementInformation::new(0x01);
/// assert_eq!(mi.flags(), 0x01);
/// assert!(mi.mbqe());
///
/// // Marshal and unmarshal
/// let bytes = mi.marshal();
/// let parsed = MeasurementInformation::unmarshal(&bytes)?;
/// assert_eq!(mi, parsed);
/// # Ok::<(), pfcp_engine::error::PfcpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasurementInformation {
    /// Measurement flags (1 byte)
    flags: u8,
}

impl MeasurementInformation {
    /// MBQE flag - Measurement Before QoS Enforcement (bit 1)
    pub const MBQE: u8 = 0x01;
    /// INAM flag - Inactive Measurement (bit 2)
    pub const INAM: u8 = 0x02;
    /// RADI flag - Reduced Application Detection Information (bit 3)
    pub const RADI: u8 = 0x04;
    /// ISTM flag - Immediate Start Time Metering (bit 4)
    pub const ISTM: u8 = 0x08;
    /// MNOP flag - Measurement of Number of Packets (bit 5)
    pub const MNOP: u8 = 0x10;
    /// SSPOC flag - Send Start Pause of Charging (bit 6)
    pub const SSPOC: u8 = 0x20;
    /// ASPOC flag - Applicable for Start of Pause of Charging (bit 7)
    pub const ASPOC: u8 = 0x40;
    /// CIAM flag - Control of Inactive Measurement (bit 8)
    pub const CIAM: u8 = 0x80;

    /// Create a new Measurement Information
    ///
    /// # Arguments
    /// * `flags` - Measurement flags (1 byte, at least one bit must be set per spec)
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::measurement_information::MeasurementInformation;
    ///
    /// let mi = MeasurementInformation::new(0x01);
    /// assert_eq!(mi.flags(), 0x01);
    /// ```
    pub fn new(flags: u8) -> Self {
        MeasurementInformation { flags }
    }

    /// Get the measurement flags
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// Check if MBQE flag is set (Measurement Before QoS Enforcement)
    pub fn mbqe(&self) -> bool {
        self.flags & Self::MBQE != 0
    }

    /// Check if INAM flag is set (Inactive Measurement)
    pub fn inam(&self) -> bool {
        self.flags & Self::INAM != 0
    }

    /// Check if RADI flag is set (Reduced Application Detection Information)
    pub fn radi(&self) -> bool {
        self.flags & Self::RADI != 0
    }

    /// Check if ISTM flag is set (Immediate Start Time Metering)
    pub fn istm(&self) -> bool {
        self.flags & Self::ISTM != 0
    }

    /// Check if MNOP flag is set (Measurement of Number of Packets)
    pub fn mnop(&self) -> bool {
        self.flags & Self::MNOP != 0
    }

    /// Check if SSPOC flag is set (Send Start Pause of Charging)
    pub fn sspoc(&self) -> bool {
        self.flags & Self::SSPOC != 0
    }

    /// Check if ASPOC flag is set (Applicable for Start of Pause of Charging)
    pub fn aspoc(&self) -> bool {
        self.flags & Self::ASPOC != 0
    }

    /// Check if CIAM flag is set (Control of Inactive Measurement)
    pub fn ciam(&self) -> bool {
        self.flags & Self::CIAM != 0
    }

    /// Set MBQE flag
    pub fn set_mbqe(&mut self) {
        self.flags |= Self::MBQE;
    }

    /// Clear MBQE flag
    pub fn clear_mbqe(&mut self) {
        self.flags &= !Self::MBQE;
    }

    /// Set INAM flag
    pub fn set_inam(&mut self) {
        self.flags |= Self::INAM;
    }

    /// Clear INAM flag
    pub fn clear_inam(&mut self) {
        self.flags &= !Self::INAM;
    }

    /// Set RADI flag
    pub fn set_radi(&mut self) {
        self.flags |= Self::RADI;
    }

    /// Clear RADI flag
    pub fn clear_radi(&mut self) {
        self.flags &= !Self::RADI;
    }

    /// Set ISTM flag
    pub fn set_istm(&mut self) {
        self.flags |= Self::ISTM;
    }

    /// Clear ISTM flag
    pub fn clear_istm(&mut self) {
        self.flags &= !Self::ISTM;
    }

    /// Set MNOP flag
    pub fn set_mnop(&mut self) {
        self.flags |= Self::MNOP;
    }

    /// Clear MNOP flag
    pub fn clear_mnop(&mut self) {
        self.flags &= !Self::MNOP;
    }

    /// Set SSPOC flag
    pub fn set_sspoc(&mut self) {
        self.flags |= Self::SSPOC;
    }

    /// Clear SSPOC flag
    pub fn clear_sspoc(&mut self) {
        self.flags &= !Self::SSPOC;
    }

    /// Set ASPOC flag
    pub fn set_aspoc(&mut self) {
        self.flags |= Self::ASPOC;
    }

    /// Clear ASPOC flag
    pub fn clear_aspoc(&mut self) {
        self.flags &= !Self::ASPOC;
    }

    /// Set CIAM flag
    pub fn set_ciam(&mut self) {
        self.flags |= Self::CIAM;
    }

    /// Clear CIAM flag
    pub fn clear_ciam(&mut self) {
        self.flags &= !Self::CIAM;
    }

    /// Marshal Measurement Information to bytes
    pub fn marshal(&self) -> Vec<u8> {
        vec![self.flags]
    }

    /// Unmarshal Measurement Information from bytes
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length(
                "Measurement Information",
                IeType::MeasurementInformation,
                1,
                0,
            ));
        }

        Ok(MeasurementInformation { flags: data[0] })
    }

    /// Convert to generic IE
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::MeasurementInformation, self.marshal())
    }
}
