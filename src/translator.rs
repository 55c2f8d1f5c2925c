//! Message classification and the encode/decode entry points used by the
//! transport layer.
//!
//! This is the layer that used to be called a "translator" in node
//! implementations of this protocol: it knows how to tell a request from a
//! response, a session message from a node message, and how to build the two
//! messages (Heartbeat Request/Response, Version Not Supported Response) that
//! the transport layer needs to speak without going through the application.

use crate::error::EngineError;
use crate::ie::fseid::Fseid;
use crate::ie::recovery_time_stamp::RecoveryTimeStamp;
use crate::ie::{Ie, IeType};
use crate::message::header::Header;
use crate::message::{self, HeartbeatRequest, HeartbeatResponse, Message, MsgType};
use crate::message::version_not_supported_response::VersionNotSupportedResponse;
use std::time::SystemTime;

/// The only PFCP version this engine understands.
pub const SUPPORTED_VERSION: u8 = 1;

/// Coarse message classification, mirroring the two address spaces PFCP
/// messages live in: node-level (association, heartbeat) and session-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgClass {
    Node,
    Session,
    Unknown,
}

/// Metadata read off a message header before the message body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgInfo {
    pub version: u8,
    pub msg_type: MsgType,
    pub msg_class: MsgClass,
    pub seid: u64,
    pub sequence: u32,
    pub is_request: bool,
    /// True only for `SessionEstablishmentRequest`: the one request type a
    /// node must allocate a [`crate::node::Session`] for before the body is
    /// fully decoded, since the CP-assigned local SEID does not exist yet.
    pub is_create_session: bool,
}

/// Classifies a message type into [`MsgClass::Node`] or [`MsgClass::Session`].
///
/// Session messages occupy type range 50-57; every other known type is a
/// node message; an unrecognized type is [`MsgClass::Unknown`].
pub fn message_class(msg_type: MsgType) -> MsgClass {
    match msg_type {
        MsgType::SessionEstablishmentRequest
        | MsgType::SessionEstablishmentResponse
        | MsgType::SessionModificationRequest
        | MsgType::SessionModificationResponse
        | MsgType::SessionDeletionRequest
        | MsgType::SessionDeletionResponse
        | MsgType::SessionReportRequest
        | MsgType::SessionReportResponse => MsgClass::Session,
        MsgType::Unknown => MsgClass::Unknown,
        _ => MsgClass::Node,
    }
}

/// Reports whether a message type carries a request (odd position in the
/// req/rsp pair) as opposed to a response.
pub fn is_request(msg_type: MsgType) -> bool {
    matches!(
        msg_type,
        MsgType::HeartbeatRequest
            | MsgType::PfdManagementRequest
            | MsgType::AssociationSetupRequest
            | MsgType::AssociationUpdateRequest
            | MsgType::AssociationReleaseRequest
            | MsgType::NodeReportRequest
            | MsgType::SessionSetDeletionRequest
            | MsgType::SessionSetModificationRequest
            | MsgType::SessionEstablishmentRequest
            | MsgType::SessionModificationRequest
            | MsgType::SessionDeletionRequest
            | MsgType::SessionReportRequest
    )
}

/// Reports whether `version` is one this engine can decode.
pub fn is_version_supported(version: u8) -> bool {
    version == SUPPORTED_VERSION
}

/// Reads header fields out of a raw datagram without decoding the full
/// message body.
pub fn get_msg_info(buf: &[u8]) -> Result<MsgInfo, EngineError> {
    let header = Header::unmarshal(buf)?;
    Ok(MsgInfo {
        version: header.version,
        msg_type: header.message_type,
        msg_class: message_class(header.message_type),
        seid: header.seid,
        sequence: header.sequence_number,
        is_request: is_request(header.message_type),
        is_create_session: header.message_type == MsgType::SessionEstablishmentRequest,
    })
}

/// Reads the RecoveryTimeStamp IE (NTP seconds) carried by the four message
/// types that advertise a node's start time, without fully decoding the
/// message into its typed form.
///
/// Returns `None` for any other message type, or if the IE is malformed or
/// absent (the latter only possible for `AssociationSetupResponse`, where
/// the IE is conditional in this crate's model).
pub fn extract_recovery_timestamp(msg_type: MsgType, buf: &[u8]) -> Option<u32> {
    let payload = match msg_type {
        MsgType::HeartbeatRequest => message::HeartbeatRequest::unmarshal(buf)
            .ok()
            .map(|m| m.recovery_time_stamp_ie().payload.clone()),
        MsgType::HeartbeatResponse => message::HeartbeatResponse::unmarshal(buf)
            .ok()
            .map(|m| m.recovery_time_stamp_ie().payload.clone()),
        MsgType::AssociationSetupRequest => message::association_setup_request::AssociationSetupRequest::unmarshal(buf)
            .ok()
            .map(|m| m.recovery_time_stamp.payload.clone()),
        MsgType::AssociationSetupResponse => message::association_setup_response::AssociationSetupResponse::unmarshal(buf)
            .ok()
            .and_then(|m| m.recovery_time_stamp.map(|ie| ie.payload.clone())),
        _ => None,
    }?;
    (payload.len() >= 4).then(|| u32::from_be_bytes(payload[0..4].try_into().unwrap()))
}

/// Reads the CP F-SEID carried by a `SessionEstablishmentRequest`, lifting it
/// out ahead of the full typed decode so the transport layer can record the
/// peer's SEID against the [`crate::node::Session`] it allocates for this
/// request.
///
/// Returns `None` for any other message type, or if the F-SEID IE is absent
/// or malformed.
pub fn extract_cp_fseid(buf: &[u8]) -> Option<Fseid> {
    let msg = message::session_establishment_request::SessionEstablishmentRequest::unmarshal(buf).ok()?;
    Fseid::unmarshal(&msg.fseid.payload).ok()
}

/// Decodes a request previously classified by [`get_msg_info`].
pub fn decode_req(buf: &[u8]) -> Result<Box<dyn Message>, EngineError> {
    decode_any(buf)
}

/// Decodes a response previously classified by [`get_msg_info`].
pub fn decode_rsp(buf: &[u8]) -> Result<Box<dyn Message>, EngineError> {
    decode_any(buf)
}

fn decode_any(buf: &[u8]) -> Result<Box<dyn Message>, EngineError> {
    let info = get_msg_info(buf)?;
    if !is_version_supported(info.version) {
        return Err(EngineError::VersionNotSupported(info.version));
    }
    if info.msg_class == MsgClass::Unknown {
        return Err(EngineError::UnknownMessageType(info.msg_type));
    }
    message::parse(buf).map_err(EngineError::Io)
}

/// Marshals a request message. Kept as a thin wrapper over [`Message::marshal`]
/// so callers go through one place when the encode path needs to change
/// (e.g. to add a length-prefix framing layer).
pub fn encode_req(msg: &dyn Message) -> Vec<u8> {
    msg.marshal()
}

/// Marshals a response message.
pub fn encode_rsp(msg: &dyn Message) -> Vec<u8> {
    msg.marshal()
}

/// Builds a Heartbeat Request carrying the local node's recovery timestamp.
pub fn encode_heartbeat_req(seq: u32, recovery_ts: SystemTime) -> Vec<u8> {
    let ts = RecoveryTimeStamp::new(recovery_ts);
    let ts_ie = Ie::new(IeType::RecoveryTimeStamp, ts.marshal().to_vec());
    HeartbeatRequest::new(seq, ts_ie, None, vec![]).marshal()
}

/// Builds a Heartbeat Response carrying the local node's recovery timestamp.
pub fn encode_heartbeat_rsp(seq: u32, recovery_ts: SystemTime) -> Vec<u8> {
    let ts = RecoveryTimeStamp::new(recovery_ts);
    let ts_ie = Ie::new(IeType::RecoveryTimeStamp, ts.marshal().to_vec());
    HeartbeatResponse::new(seq, ts_ie, vec![]).marshal()
}

/// Builds a Version Not Supported Response for a request the engine could
/// not decode because of its PFCP version.
pub fn encode_version_not_supported_rsp(seq: u32) -> Vec<u8> {
    VersionNotSupportedResponse::new(seq).marshal()
}
