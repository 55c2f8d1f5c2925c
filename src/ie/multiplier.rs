//! Multiplier Information Element
//!
//! The Multiplier IE is used in Usage Reporting Rules to specify a factor
//! for multiplying usage quota values.
//! Per 3GPP TS 29.244 Section 8.2.84.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// Multiplier
///
/// Represents a quotient multiplier for usage quota calculation.
/// Encoded as an unsigned 32-bit integer representing a factor
/// used in usage reporting quota calculations.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.84
///
/// # Structure
/// - 4 bytes: Multiplier value (u32, big-endian)
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::multiplier::Multiplier;
///
/// // Create a multiplier with value 100
/// let multiplier = Multiplier::new(100);
/// assert_eq!(multiplier.value(), 100);
///
/// // Marshal and unmarshal
/// let bytes = multiplier.marshal();
/// let parsed = Multiplier::unmarshal(&bytes)?;
/// assert_eq!(multiplier, parsed);
/// # Ok::<(), pfcp_engine::error::PfcpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplier {
    /// Multiplier quotient value
    value: u32,
}

impl Multiplier {
    /// Create a new Multiplier
    ///
    /// # Arguments
    /// * `value` - Multiplier quotient value (0 to u32::MAX)
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::multiplier::Multiplier;
    ///
    /// let multiplier = Multiplier::new(50);
    /// assert_eq!(multiplier.value(), 50);
    /// ```
    pub fn new(value: u32) -> Self {
        Multiplier { value }
    }

    /// Get the multiplier value
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::multiplier::Multiplier;
    ///
    /// let multiplier = Multiplier::new(200);
    /// assert_eq!(multiplier.value(), 200);
    /// ```
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Marshal Multiplier to bytes
    ///
    /// # Returns
    /// 4-byte vector containing multiplier value (big-endian)
    pub fn marshal(&self) -> Vec<u8> {
        self.value.to_be_bytes().to_vec()
    }

    /// Unmarshal Multiplier from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing multiplier data (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::multiplier::Multiplier;
    ///
    /// let multiplier = Multiplier::new(75000);
    /// let bytes = multiplier.marshal();
    /// let parsed = Multiplier::unmarshal(&bytes)?;
    /// assert_eq!(multiplier, parsed);
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Multiplier",
                IeType::Multiplier,
                4,
                data.len(),
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let value = u32::from_be_bytes(bytes);

        Ok(Multiplier { value })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::multiplier::Multiplier;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let multiplier = Multiplier::new(100);
    /// let ie = multiplier.to_ie();
    /// assert_eq!(ie.ie_type, IeType::Multiplier);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::Multiplier, self.marshal())
    }
}
