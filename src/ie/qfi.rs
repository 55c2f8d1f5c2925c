//! QFI (QoS Flow Identifier) Information Element
//!
//! The QFI IE identifies a QoS flow in 5G networks.
//! Per 3GPP TS 29.244 Section 8.2.89, this is a 6-bit identifier (values 0-63).
//!
//! QFI is used to differentiate QoS flows within a PDU session, allowing
//! fine-grained QoS control in 5G networks.

use crate::ie::{Ie, IeType};
use std::io;

/// Maximum valid QFI value (6 bits = 0-63)
const QFI_MAX: u8 = 63;

/// QFI (QoS Flow Identifier)
///
/// Identifies a QoS flow in 5G networks. The QFI is a 6-bit value (0-63).
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.89
///
/// # Structure
/// - Bits 1-6: QFI value (0-63)
/// - Bits 7-8: Spare (set to 0)
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::qfi::Qfi;
///
/// // Create QFI for a specific QoS flow
/// let qfi = Qfi::new(5).unwrap();
/// assert_eq!(qfi.value(), 5);
///
/// // Validate QFI range
/// assert!(Qfi::new(63).is_ok());  // Maximum valid value
/// assert!(Qfi::new(64).is_err()); // Out of range
///
/// // Marshal and unmarshal
/// let bytes = qfi.marshal();
/// let parsed = Qfi::unmarshal(&bytes).unwrap();
/// assert_eq!(qfi, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Qfi {
    /// QFI value (0-63)
    qfi: u8,
}

impl Qfi {
    /// Create a new QFI
    ///
    /// # Arguments
    /// * `value` - QFI value (must be 0-63)
    ///
    /// # Errors
    /// Returns error if value > 63 (exceeds 6-bit range)
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::qfi::Qfi;
    ///
    /// let qfi = Qfi::new(9).unwrap();
    /// assert_eq!(qfi.value(), 9);
    ///
    /// // Out of range
    /// assert!(Qfi::new(64).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, io::Error> {
        if value > QFI_MAX {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("QFI value {} exceeds maximum {}", value, QFI_MAX),
            ));
        }
        Ok(Qfi { qfi: value })
    }

    /// Get the QFI value
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::qfi::Qfi;
    ///
    /// let qfi = Qfi::new(15).unwrap();
    /// assert_eq!(qfi.value(), 15);
    /// ```
    pub fn value(&self) -> u8 {
        self.qfi
    }

    /// Marshal QFI to bytes
    ///
    /// # Returns
    /// 1-byte array with QFI value in bits 1-6
    pub fn marshal(&self) -> [u8; 1] {
        // Bits 1-6: QFI value, Bits 7-8: spare (0)
        [self.qfi & 0x3F]
    }

    /// Unmarshal QFI from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing QFI data (must be at least 1 byte)
    ///
    /// # Errors
    /// Returns error if data is too short or QFI value is invalid
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::qfi::Qfi;
    ///
    /// let qfi = Qfi::new(20).unwrap();
    /// let bytes = qfi.marshal();
    /// let parsed = Qfi::unmarshal(&bytes).unwrap();
    /// assert_eq!(qfi, parsed);
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Not enough data for QFI: expected 1 byte",
            ));
        }

        // Extract bits 1-6 (QFI value), ignore spare bits 7-8
        let qfi_value = data[0] & 0x3F;

        // Validate range (should be 0-63, but mask ensures this)
        if qfi_value > QFI_MAX {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("QFI value {} exceeds maximum {}", qfi_value, QFI_MAX),
            ));
        }

        Ok(Qfi { qfi: qfi_value })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::qfi::Qfi;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let qfi = Qfi::new(7).unwrap();
    /// let ie = qfi.to_ie();
    /// assert_eq!(ie.ie_type, IeType::Qfi);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::Qfi, self.marshal().to_vec())
    }
}
