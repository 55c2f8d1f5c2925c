//! Remove Traffic Endpoint IE.

use crate::ie::create_traffic_endpoint::TrafficEndpointId;
use crate::ie::{Ie, IeType};
use std::io;

/// Represents the Remove Traffic Endpoint.
/// Used to remove existing traffic endpoints in multi-access scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveTrafficEndpoint {
    pub traffic_endpoint_id: TrafficEndpointId,
}

impl RemoveTrafficEndpoint {
    /// Creates a new Remove Traffic Endpoint IE.
    pub fn new(traffic_endpoint_id: TrafficEndpointId) -> Self {
        RemoveTrafficEndpoint {
            traffic_endpoint_id,
        }
    }

    /// Marshals the Remove Traffic Endpoint into a byte vector.
    pub fn marshal(&self) -> Vec<u8> {
        // For Remove Traffic Endpoint, we only need the ID
        self.traffic_endpoint_id.marshal()
    }

    /// Unmarshals a byte slice into a Remove Traffic Endpoint IE.
    pub fn unmarshal(payload: &[u8]) -> Result<Self, io::Error> {
        let traffic_endpoint_id = TrafficEndpointId::unmarshal(payload)?;

        Ok(RemoveTrafficEndpoint {
            traffic_endpoint_id,
        })
    }

    /// Wraps the Remove Traffic Endpoint in a RemoveTrafficEndpoint IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::RemoveTrafficEndpoint, self.marshal())
    }
}
