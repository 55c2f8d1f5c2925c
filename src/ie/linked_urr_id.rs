//! Linked URR ID IE implementation.
//!
//! Per 3GPP TS 29.244 Section 8.2.83, the Linked URR ID IE is used to
//! indicate one or more URRs to which the current URR is linked.

use crate::ie::{Ie, IeType};
use std::io;

/// Linked URR ID Information Element.
///
/// Used to link Usage Reporting Rules together. When a URR is linked to
/// another URR, usage reports from one may trigger actions on the other.
///
/// # Structure (per 3GPP TS 29.244)
/// ```text
/// +-----------+-----------+-----------+-----------+
/// |         Linked URR ID (32 bits)              |
/// +-----------+-----------+-----------+-----------+
/// ```
///
/// # Example
/// ```
/// use pfcp_engine::ie::linked_urr_id::LinkedUrrId;
///
/// let linked_urr = LinkedUrrId::new(42);
/// let marshaled = linked_urr.marshal();
/// let unmarshaled = LinkedUrrId::unmarshal(&marshaled).unwrap();
/// assert_eq!(linked_urr, unmarshaled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkedUrrId {
    /// The URR ID that this URR is linked to
    pub id: u32,
}

impl LinkedUrrId {
    /// Creates a new Linked URR ID.
    ///
    /// # Arguments
    /// * `id` - The URR ID to link to (u32)
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::linked_urr_id::LinkedUrrId;
    ///
    /// let linked_urr = LinkedUrrId::new(1);
    /// assert_eq!(linked_urr.id, 1);
    /// ```
    pub fn new(id: u32) -> Self {
        LinkedUrrId { id }
    }

    /// Marshals the Linked URR ID into a byte vector.
    ///
    /// # Returns
    /// A 4-byte vector in big-endian (network byte order).
    pub fn marshal(&self) -> Vec<u8> {
        self.id.to_be_bytes().to_vec()
    }

    /// Unmarshals a byte slice into a Linked URR ID.
    ///
    /// # Arguments
    /// * `payload` - Byte slice containing the Linked URR ID
    ///
    /// # Returns
    /// A `LinkedUrrId` instance or an error if unmarshaling fails.
    ///
    /// # Errors
    /// Returns `io::Error` if:
    /// - The buffer is too short (< 4 bytes)
    ///
    /// # Example
    /// ```
    /// use pfcp_engine::ie::linked_urr_id::LinkedUrrId;
    ///
    /// let data = vec![0x00, 0x00, 0x00, 0x2A]; // 42 in big-endian
    /// let linked_urr = LinkedUrrId::unmarshal(&data).unwrap();
    /// assert_eq!(linked_urr.id, 42);
    /// ```
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        if payload.len() < 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Linked URR ID requires 4 bytes (u32), got {}",
                    payload.len()
                ),
            ));
        }
        Ok(LinkedUrrId {
            id: u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]),
        })
    }

    /// Wraps the Linked URR ID in a generic IE.
    ///
    /// # Returns
    /// An `Ie` with type `LinkedUrrId` and the marshaled payload.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::LinkedUrrId, self.marshal())
    }
}
