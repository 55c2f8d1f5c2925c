use crate::error::PfcpError;
use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeQuota {
    pub quota_seconds: u32,
}

impl TimeQuota {
    pub fn new(quota_seconds: u32) -> Self {
        Self { quota_seconds }
    }

    pub fn marshal_len(&self) -> usize {
        4 // u32
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.quota_seconds.to_be_bytes().to_vec()
    }

    pub fn marshal_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.quota_seconds.to_be_bytes());
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        if data.len() < 4 {
            return Err(PfcpError::invalid_length(
                "Time Quota",
                IeType::TimeQuota,
                4,
                data.len(),
            ));
        }

        let bytes: [u8; 4] = data[0..4].try_into().unwrap();
        let quota_seconds = u32::from_be_bytes(bytes);

        Ok(Self { quota_seconds })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::TimeQuota, self.marshal())
    }
}
