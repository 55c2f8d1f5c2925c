use std::io;

use crate::ie::{Ie, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageInformation {
    pub flags: u8,
}

impl UsageInformation {
    pub fn new(flags: u8) -> Self {
        Self { flags }
    }

    pub fn new_with_flags(bef: bool, aft: bool, uae: bool, ube: bool) -> Self {
        let mut flags = 0u8;
        if bef {
            flags |= 0x01;
        }
        if aft {
            flags |= 0x02;
        }
        if uae {
            flags |= 0x04;
        }
        if ube {
            flags |= 0x08;
        }
        Self { flags }
    }

    pub fn has_bef(&self) -> bool {
        (self.flags & 0x01) != 0
    }

    pub fn has_aft(&self) -> bool {
        (self.flags & 0x02) != 0
    }

    pub fn has_uae(&self) -> bool {
        (self.flags & 0x04) != 0
    }

    pub fn has_ube(&self) -> bool {
        (self.flags & 0x08) != 0
    }

    pub fn set_bef_flag(&mut self) {
        self.flags |= 0x01;
    }

    pub fn set_aft_flag(&mut self) {
        self.flags |= 0x02;
    }

    pub fn set_uae_flag(&mut self) {
        self.flags |= 0x04;
    }

    pub fn set_ube_flag(&mut self) {
        self.flags |= 0x08;
    }

    pub fn marshal_len(&self) -> usize {
        1 // Single flags byte
    }

    pub fn marshal(&self) -> Result<Vec<u8>, io::Error> {
        let mut buf = Vec::with_capacity(self.marshal_len());
        self.marshal_to(&mut buf)?;
        Ok(buf)
    }

    pub fn marshal_to(&self, buf: &mut Vec<u8>) -> Result<(), io::Error> {
        buf.push(self.flags);
        Ok(())
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, io::Error> {
        if data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Usage information requires 1 byte",
            ));
        }

        let flags = data[0];
        Ok(Self { flags })
    }

    pub fn to_ie(&self) -> Result<Ie, io::Error> {
        let data = self.marshal()?;
        Ok(Ie::new(IeType::UsageInformation, data))
    }
}
