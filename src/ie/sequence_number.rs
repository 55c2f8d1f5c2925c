// src/ie/sequence_number.rs

//! Sequence Number Information Element.

use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceNumber {
    pub value: u32,
}

impl SequenceNumber {
    pub fn new(value: u32) -> Self {
        SequenceNumber { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    /// Unmarshals a byte slice into a Sequence Number.
    ///
    /// Per 3GPP TS 29.244, Sequence Number requires exactly 4 bytes (u32).
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Sequence Number",
                IeType::SequenceNumber,
                4,
                data.len(),
            ));
        }
        Ok(SequenceNumber {
            value: u32::from_be_bytes([data[0], data[1], data[2], data[3]]),
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(super::IeType::SequenceNumber, self.marshal().to_vec())
    }
}
