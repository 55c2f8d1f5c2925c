// src/message/session_set_deletion_request.rs

//! Session Set Deletion Request message implementation.

use crate::ie::{Ie, IeType};
use crate::message::{header::Header, Message, MsgType};
use std::io;

/// Represents a Session Set Deletion Request message.
/// Used by CP function to request deletion of multiple PFCP sessions as a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSetDeletionRequest {
    pub header: Header,
    pub node_id: Ie,
    pub fseid_set: Option<Ie>,
    pub ies: Vec<Ie>,
}

impl SessionSetDeletionRequest {
    /// Creates a new Session Set Deletion Request message.
    pub fn new(
        seq: u32,
        node_id: Ie,
        fseid_set: Option<Ie>,
    ) -> Self {
        let mut payload_len = node_id.len();
        if let Some(ref ie) = fseid_set {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::SessionSetDeletionRequest, false, 0, seq);
        header.length = 4 + payload_len;

        SessionSetDeletionRequest {
            header,
            node_id,
            fseid_set,
            ies: Vec::new(),
        }
    }

    /// Creates a new Session Set Deletion Request with additional IEs.
    pub fn new_with_ies(
        seq: u32,
        node_id: Ie,
        fseid_set: Option<Ie>,
        ies: Vec<Ie>,
    ) -> Self {
        let mut payload_len = node_id.len();
        if let Some(ref ie) = fseid_set {
            payload_len += ie.len();
        }
        for ie in &ies {
            payload_len += ie.len();
        }

        let mut header = Header::new(MsgType::SessionSetDeletionRequest, false, 0, seq);
        header.length = 4 + payload_len;

        SessionSetDeletionRequest {
            header,
            node_id,
            fseid_set,
            ies,
        }
    }
}

impl Message for SessionSetDeletionRequest {
    fn msg_type(&self) -> MsgType {
        MsgType::SessionSetDeletionRequest
    }

    fn marshal(&self) -> Vec<u8> {
        let mut data = self.header.marshal();
        data.extend_from_slice(&self.node_id.marshal());
        if let Some(ref ie) = self.fseid_set {
            data.extend_from_slice(&ie.marshal());
        }
        for ie in &self.ies {
            data.extend_from_slice(&ie.marshal());
        }
        // Update length
        let len = (data.len() - 4) as u16;
        data[2..4].copy_from_slice(&len.to_be_bytes());
        data
    }

    fn unmarshal(buf: &[u8]) -> Result<Self, io::Error>
    where
        Self: Sized,
    {
        let header = Header::unmarshal(buf)?;
        let mut node_id = None;
        let mut fseid_set = None;
        let mut ies = Vec::new();

        let mut cursor = header.len() as usize;
        while cursor < buf.len() {
            let ie = Ie::unmarshal(&buf[cursor..])?;
            let ie_len = ie.len() as usize;
            match ie.ie_type {
                IeType::NodeId => node_id = Some(ie),
                IeType::Fseid => fseid_set = Some(ie), // F-SEID for session set identification
                _ => ies.push(ie),
            }
            cursor += ie_len;
        }

        let node_id = node_id.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Missing NodeId IE")
        })?;

        Ok(SessionSetDeletionRequest {
            header,
            node_id,
            fseid_set,
            ies,
        })
    }

    fn seid(&self) -> Option<u64> {
        if self.header.has_seid {
            Some(self.header.seid)
        } else {
            None
        }
    }

    fn sequence(&self) -> u32 {
        self.header.sequence_number
    }

    fn set_sequence(&mut self, seq: u32) {
        self.header.sequence_number = seq;
    }

    fn find_ie(&self, ie_type: IeType) -> Option<&Ie> {
        match ie_type {
            IeType::NodeId => Some(&self.node_id),
            IeType::Fseid => self.fseid_set.as_ref(),
            _ => self.ies.iter().find(|ie| ie.ie_type == ie_type),
        }
    }
}
