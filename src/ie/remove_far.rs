use crate::ie::far_id::FarId;
use crate::ie::{Ie, IeType};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFar {
    pub far_id: FarId,
}

impl RemoveFar {
    pub fn new(far_id: FarId) -> Self {
        RemoveFar { far_id }
    }

    pub fn marshal(&self) -> Vec<u8> {
        self.far_id.marshal().to_vec()
    }

    pub fn to_ie(self) -> Ie {
        Ie::new(IeType::RemoveFar, self.marshal())
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        Ok(RemoveFar {
            far_id: FarId::unmarshal(data)?,
        })
    }
}
