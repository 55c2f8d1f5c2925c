// src/ie/load_metric.rs

//! Metric Information Element.

use crate::error::PfcpError;
use crate::ie::IeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: u8,
}

impl Metric {
    pub fn new(value: u8) -> Self {
        Metric { value }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [self.value]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.is_empty() {
            return Err(PfcpError::invalid_length("Metric", IeType::Metric, 1, 0));
        }
        Ok(Metric { value: data[0] })
    }
}
