//! Access Availability Control Information Information Element.
//!
//! Per 3GPP TS 29.244 Section 7.5.2.9-2, specifies the requested access
//! availability information for multi-access PDU session support.

use crate::error::PfcpError;
use crate::ie::requested_access_availability_information::RequestedAccessAvailabilityInformation;
use crate::ie::{marshal_ies, Ie, IeIterator, IeType};

/// Access Availability Control Information per 3GPP TS 29.244 ยง7.5.2.9-2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessAvailabilityControlInformation {
    /// Requested access availability flags (mandatory).
    pub requested: RequestedAccessAvailabilityInformation,
}

impl AccessAvailabilityControlInformation {
    pub fn new(requested: RequestedAccessAvailabilityInformation) -> Self {
        AccessAvailabilityControlInformation { requested }
    }

    pub fn marshal(&self) -> Vec<u8> {
        marshal_ies(&[self.requested.to_ie()])
    }

    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        let mut requested = None;

        for ie_result in IeIterator::new(payload) {
            let ie = ie_result?;
            if ie.ie_type == IeType::RequestedAccessAvailabilityInformation {
                requested = Some(RequestedAccessAvailabilityInformation::unmarshal(
                    &ie.payload,
                )?);
            }
        }

        Ok(AccessAvailabilityControlInformation {
            requested: requested.ok_or_else(|| {
                PfcpError::missing_ie_in_grouped(
                    IeType::RequestedAccessAvailabilityInformation,
                    IeType::AccessAvailabilityControlInformation,
                )
            })?,
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::AccessAvailabilityControlInformation, self.marshal())
    }
}
