use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationMeasurement {
    pub duration_seconds: u32,
}

impl DurationMeasurement {
    pub fn new(duration_seconds: u32) -> Self {
        Self { duration_seconds }
    }

    pub fn marshal_len(&self) -> usize {
        4 // u32
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.marshal_len());
        self.marshal_to(&mut buf);
        buf
    }

    pub fn marshal_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.duration_seconds.to_be_bytes());
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Duration Measurement",
                IeType::DurationMeasurement,
                4,
                data.len(),
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let duration_seconds = u32::from_be_bytes(bytes);

        Ok(Self { duration_seconds })
    }

    pub fn to_ie(&self) -> Ie {
        let data = self.marshal();
        Ie::new(IeType::DurationMeasurement, data)
    }
}
