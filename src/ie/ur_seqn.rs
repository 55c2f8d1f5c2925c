//! UR-SEQN Information Element
//!
//! The UR-SEQN IE contains the sequence number of a usage report.
//! Per 3GPP TS 29.244 Section 8.2.71.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

/// UR-SEQN (Usage Report Sequence Number)
///
/// Specifies the sequence number of a usage report for correlation
/// and ordering purposes during usage reporting procedures.
///
/// # 3GPP Reference
/// 3GPP TS 29.244 Section 8.2.71
///
/// # Structure
/// - 4 bytes: Sequence number (u32, big-endian)
///
/// # Examples
///
/// ```
/// use pfcp_engine::ie::ur_seqn::UrSeqn;
///
/// // Create UR-SEQN with sequence number 12345
/// let seqn = UrSeqn::new(12345);
/// assert_eq!(seqn.sequence_number(), 12345);
///
/// // Marshal and unmarshal
/// let bytes = seqn.marshal();
/// let parsed = UrSeqn::unmarshal(&bytes)?;
/// assert_eq!(seqn, parsed);
/// # Ok::<(), pfcp_engine::error::PfcpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UrSeqn {
    /// Usage Report sequence number
    sequence_number: u32,
}

impl UrSeqn {
    /// Create a new UR-SEQN
    ///
    /// # Arguments
    /// * `sequence_number` - Usage report sequence number
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ur_seqn::UrSeqn;
    ///
    /// let seqn = UrSeqn::new(100);
    /// assert_eq!(seqn.sequence_number(), 100);
    /// ```
    pub fn new(sequence_number: u32) -> Self {
        UrSeqn { sequence_number }
    }

    /// Get the sequence number value
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ur_seqn::UrSeqn;
    ///
    /// let seqn = UrSeqn::new(5000);
    /// assert_eq!(seqn.sequence_number(), 5000);
    /// ```
    pub fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    /// Marshal UR-SEQN to bytes
    ///
    /// # Returns
    /// 4-byte vector containing sequence number (big-endian)
    pub fn marshal(&self) -> Vec<u8> {
        self.sequence_number.to_be_bytes().to_vec()
    }

    /// Unmarshal UR-SEQN from bytes
    ///
    /// # Arguments
    /// * `data` - Byte slice containing sequence number (must be at least 4 bytes)
    ///
    /// # Errors
    /// Returns error if data is too short
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ur_seqn::UrSeqn;
    ///
    /// let seqn = UrSeqn::new(54321);
    /// let bytes = seqn.marshal();
    /// let parsed = UrSeqn::unmarshal(&bytes)?;
    /// assert_eq!(seqn, parsed);
    /// # Ok::<(), pfcp_engine::error::PfcpError>(())
    /// ```
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "UR-SEQN",
                IeType::UrSeqn,
                4,
                data.len(),
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let sequence_number = u32::from_be_bytes(bytes);

        Ok(UrSeqn { sequence_number })
    }

    /// Convert to generic IE
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::ur_seqn::UrSeqn;
    /// use pfcp_engine::ie::IeType;
    ///
    /// let seqn = UrSeqn::new(1000);
    /// let ie = seqn.to_ie();
    /// assert_eq!(ie.ie_type, IeType::UrSeqn);
    /// ```
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::UrSeqn, self.marshal())
    }
}
