// src/ie/inactivity_detection_time.rs

//! Inactivity Detection Time Information Element.

use crate::error::PfcpError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityDetectionTime {
    pub value: u32,
}

impl InactivityDetectionTime {
    pub fn new(value: u32) -> Self {
        InactivityDetectionTime { value }
    }

    pub fn marshal(&self) -> [u8; 4] {
        self.value.to_be_bytes()
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Inactivity Detection Time",
                IeType::InactivityDetectionTime,
                4,
                data.len(),
            ));
        }
        Ok(InactivityDetectionTime {
            value: u32::from_be_bytes(data[0..4].try_into().unwrap()),
        })
    }
}
