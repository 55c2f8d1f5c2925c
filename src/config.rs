//! Engine configuration.
//!
//! Mirrors the configuration surface of the reference PFCP node implementation:
//! socket parameters, retransmission timers, heartbeat timers, the peer
//! activity window used to decide when a heartbeat is due, and optional TEID
//! range assignment for multi-UPF deployments.

use serde::{Deserialize, Serialize};

/// Engine-wide configuration.
///
/// Defaults match the reference implementation's example application, not
/// arbitrary guesses: 8805 is the IANA-assigned PFCP port, and the retry/
/// heartbeat timers are the values the reference node ships with out of the
/// box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PfcpConfig {
    /// UDP port the local node listens on and sends from.
    pub pfcp_port: u16,
    /// `SO_RCVBUF`/`SO_SNDBUF` size, in bytes.
    pub socket_buffer_size: usize,
    /// Request retransmission timeout, in milliseconds.
    pub t1_ms: u64,
    /// Maximum number of retransmissions before a request is abandoned.
    pub n1: u32,
    /// Heartbeat retransmission timeout, in milliseconds.
    pub heartbeat_t1_ms: u64,
    /// Maximum number of heartbeat retransmissions before a peer is
    /// considered failed.
    pub heartbeat_n1: u32,
    /// Number of slots in a remote node's activity window.
    pub nbr_activity_windows: u32,
    /// Length of each activity-window slot, in milliseconds.
    pub len_activity_window_ms: u64,
    /// Whether the local node hands out TEID ranges to peers.
    pub assign_teid_range: bool,
    /// Width, in bits, of the assigned TEID range (0 disables allocation).
    pub nbr_teid_range_bits: u8,
}

impl Default for PfcpConfig {
    fn default() -> Self {
        PfcpConfig {
            pfcp_port: 8805,
            socket_buffer_size: 2_097_152,
            t1_ms: 3_000,
            n1: 2,
            heartbeat_t1_ms: 5_000,
            heartbeat_n1: 3,
            nbr_activity_windows: 10,
            len_activity_window_ms: 6_000,
            assign_teid_range: false,
            nbr_teid_range_bits: 0,
        }
    }
}

impl PfcpConfig {
    /// Widest TEID range value the protocol's range field can carry
    /// (`nbrTeidRangeBits` is documented 0..7 in spec terms).
    pub const MAX_TEID_RANGE_BITS: u8 = 7;

    /// Parses a configuration from a YAML document, falling back to
    /// [`Default`] for any key the document omits.
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(s)
    }

    /// Serializes this configuration back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }

    /// `nbr_teid_range_bits`, clamped to the 0..=7 range the TEID range
    /// field can actually carry. A document naming 8 or higher used to
    /// silently size the allocator to the literal field value instead of
    /// being rejected; this is the one place that value is read from, so
    /// every caller gets the clamp for free.
    pub fn teid_range_bits(&self) -> u8 {
        self.nbr_teid_range_bits.min(Self::MAX_TEID_RANGE_BITS)
    }

    /// Total time, in milliseconds, a request is allowed to remain
    /// outstanding before the caller gives up (first send plus every retry).
    pub fn request_timeout_ms(&self) -> u64 {
        self.t1_ms * (self.n1 as u64 + 1)
    }

    /// Total time, in milliseconds, a heartbeat is allowed to remain
    /// outstanding before the peer is declared failed.
    pub fn heartbeat_timeout_ms(&self) -> u64 {
        self.heartbeat_t1_ms * (self.heartbeat_n1 as u64 + 1)
    }
}
