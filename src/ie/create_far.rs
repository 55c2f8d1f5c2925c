// src/ie/create_far.rs

//! Create FAR Information Element.

use crate::error::PfcpError;
use crate::ie::apply_action::ApplyAction;
use crate::ie::bar_id::BarId;
use crate::ie::destination_interface::{DestinationInterface, Interface};
use crate::ie::duplicating_parameters::DuplicatingParameters;
use crate::ie::far_id::FarId;
use crate::ie::forwarding_parameters::ForwardingParameters;
use crate::ie::network_instance::NetworkInstance;
use crate::ie::{marshal_ies, Ie, IeIterator, IeType};
use std::io;

/// Traffic direction for FAR rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficDirection {
    Uplink,
    Downlink,
}

/// Common FAR actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarAction {
    Forward,
    Drop,
    Buffer,
    Duplicate,
    ForwardAndDuplicate,
}

impl FarAction {
    fn to_apply_action(self) -> ApplyAction {
        match self {
            FarAction::Forward => ApplyAction::FORW,
            FarAction::Drop => ApplyAction::DROP,
            FarAction::Buffer => ApplyAction::BUFF,
            FarAction::Duplicate => ApplyAction::DUPL,
            FarAction::ForwardAndDuplicate => ApplyAction::FORW | ApplyAction::DUPL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFar {
    pub far_id: FarId,
    pub apply_action: ApplyAction,
    pub forwarding_parameters: Option<ForwardingParameters>,
    pub duplicating_parameters: Option<DuplicatingParameters>,
    pub bar_id: Option<BarId>,
}

impl CreateFar {
    /// Creates a new Create FAR IE.
    pub fn new(far_id: FarId, apply_action: ApplyAction) -> Self {
        CreateFar {
            far_id,
            apply_action,
            forwarding_parameters: None,
            duplicating_parameters: None,
            bar_id: None,
        }
    }

    /// Creates a FAR with a specific action type.
    pub fn with_action(far_id: FarId, action: FarAction) -> Self {
        CreateFar::new(far_id, action.to_apply_action())
    }

    /// Adds forwarding parameters to the FAR.
    pub fn with_forwarding_parameters(mut self, params: ForwardingParameters) -> Self {
        self.forwarding_parameters = Some(params);
        self
    }

    /// Adds duplicating parameters to the FAR.
    pub fn with_duplicating_parameters(mut self, params: DuplicatingParameters) -> Self {
        self.duplicating_parameters = Some(params);
        self
    }

    /// Adds BAR ID for buffering actions.
    pub fn with_bar_id(mut self, bar_id: BarId) -> Self {
        self.bar_id = Some(bar_id);
        self
    }

    /// Creates a simple forwarding FAR for uplink traffic.
    pub fn uplink_forward(far_id: FarId, destination: Interface) -> Self {
        let dest_interface = DestinationInterface::new(destination);
        let forwarding_params = ForwardingParameters::new(dest_interface);

        CreateFar::with_action(far_id, FarAction::Forward)
            .with_forwarding_parameters(forwarding_params)
    }

    /// Creates a simple forwarding FAR for downlink traffic.
    pub fn downlink_forward(far_id: FarId, destination: Interface) -> Self {
        let dest_interface = DestinationInterface::new(destination);
        let forwarding_params = ForwardingParameters::new(dest_interface);

        CreateFar::with_action(far_id, FarAction::Forward)
            .with_forwarding_parameters(forwarding_params)
    }

    /// Creates a drop FAR.
    pub fn drop(far_id: FarId) -> Self {
        CreateFar::with_action(far_id, FarAction::Drop)
    }

    /// Creates a buffer FAR with BAR ID.
    pub fn buffer(far_id: FarId, bar_id: BarId) -> Self {
        CreateFar::with_action(far_id, FarAction::Buffer).with_bar_id(bar_id)
    }

    /// Marshals the Create FAR into bytes.
    pub fn marshal(&self) -> Vec<u8> {
        let mut ies = Vec::new();

        // FAR ID is mandatory
        ies.push(self.far_id.to_ie());

        // Apply Action is mandatory
        ies.push(Ie::new(
            IeType::ApplyAction,
            self.apply_action.marshal().to_vec(),
        ));

        // Optional IEs
        if let Some(ref fp) = self.forwarding_parameters {
            ies.push(fp.to_ie());
        }
        if let Some(ref dp) = self.duplicating_parameters {
            ies.push(dp.to_ie());
        }
        if let Some(ref bar_id) = self.bar_id {
            ies.push(bar_id.to_ie());
        }

        // Serialize all IEs
        marshal_ies(&ies)
    }

    /// Unmarshals Create FAR from bytes.
    pub fn unmarshal(data: &[u8]) -> Result<Self, PfcpError> {
        let mut far_id = None;
        let mut apply_action = None;
        let mut forwarding_parameters = None;
        let mut duplicating_parameters = None;
        let mut bar_id = None;

        for ie_result in IeIterator::new(data) {
            let ie = ie_result?;
            match ie.ie_type {
                IeType::FarId => far_id = Some(FarId::unmarshal(&ie.payload)?),
                IeType::ApplyAction => apply_action = Some(ApplyAction::unmarshal(&ie.payload)?),
                IeType::ForwardingParameters => {
                    forwarding_parameters = Some(ForwardingParameters::unmarshal(&ie.payload)?)
                }
                IeType::DuplicatingParameters => {
                    duplicating_parameters = Some(DuplicatingParameters::unmarshal(&ie.payload)?)
                }
                IeType::BarId => bar_id = Some(BarId::unmarshal(&ie.payload)?),
                _ => {} // Ignore unknown IEs
            }
        }

        Ok(CreateFar {
            far_id: far_id.ok_or_else(|| {
                PfcpError::missing_ie_in_grouped(IeType::FarId, IeType::CreateFar)
            })?,
            apply_action: apply_action.ok_or_else(|| {
                PfcpError::missing_ie_in_grouped(IeType::ApplyAction, IeType::CreateFar)
            })?,
            forwarding_parameters,
            duplicating_parameters,
            bar_id,
        })
    }

    /// Converts to IE.
    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::CreateFar, self.marshal())
    }

    /// Returns a builder for constructing Create FAR instances.
    pub fn builder(far_id: FarId) -> CreateFarBuilder {
        CreateFarBuilder::new(far_id)
    }
}

/// Builder for Create FAR Information Elements with validation.
///
/// The Create FAR builder provides an ergonomic way to construct FAR IEs for
/// traffic forwarding rules with proper validation of action and parameter combinations.
///
/// # Examples
///
/// ```rust
/// use pfcp_engine::ie::create_far::{CreateFarBuilder, FarAction};
/// use pfcp_engine::ie::far_id::FarId;
/// use pfcp_engine::ie::destination_interface::{DestinationInterface, Interface};
/// use pfcp_engine::ie::forwarding_parameters::ForwardingParameters;
///
/// // Simple forwarding FAR
/// let far = CreateFarBuilder::new(FarId::new(1))
///     .forward_to(Interface::Core)
///     .build()
///     .unwrap();
///
/// // Complex FAR with validation
/// let buffer_far = CreateFarBuilder::new(FarId::new(2))
///     .action(FarAction::Buffer)
///     .bar_id(pfcp_engine::ie::bar_id::BarId::new(1))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CreateFarBuilder {
    far_id: Option<FarId>,
    apply_action: Option<ApplyAction>,
    forwarding_parameters: Option<ForwardingParameters>,
    duplicating_parameters: Option<DuplicatingParameters>,
    bar_id: Option<BarId>,
}

impl CreateFarBuilder {
    /// Creates a new Create FAR builder with the specified FAR ID.
    ///
    /// FAR ID is mandatory for all FAR instances.
    pub fn new(far_id: FarId) -> Self {
        CreateFarBuilder {
            far_id: Some(far_id),
            ..Default::default()
        }
    }

    /// Sets the apply action.
    pub fn apply_action(mut self, action: ApplyAction) -> Self {
        self.apply_action = Some(action);
        self
    }

    /// Sets the apply action using the enum helper.
    pub fn action(mut self, action: FarAction) -> Self {
        self.apply_action = Some(action.to_apply_action());
        self
    }

    /// Adds forwarding parameters.
    pub fn forwarding_parameters(mut self, params: ForwardingParameters) -> Self {
        self.forwarding_parameters = Some(params);
        self
    }

    /// Quick method to add forwarding to specific interface.
    pub fn forward_to(mut self, destination: Interface) -> Self {
        let dest_interface = DestinationInterface::new(destination);
        let forwarding_params = ForwardingParameters::new(dest_interface);
        self.forwarding_parameters = Some(forwarding_params);
        // Only set FORW action if no action is already set
        if self.apply_action.is_none() {
            self.apply_action = Some(ApplyAction::FORW);
        }
        self
    }

    /// Quick method to add forwarding with network instance.
    pub fn forward_to_network(
        mut self,
        destination: Interface,
        network_instance: NetworkInstance,
    ) -> Self {
        let dest_interface = DestinationInterface::new(destination);
        let forwarding_params =
            ForwardingParameters::new(dest_interface).with_network_instance(network_instance);
        self.forwarding_parameters = Some(forwarding_params);
        // Only set FORW action if no action is already set
        if self.apply_action.is_none() {
            self.apply_action = Some(ApplyAction::FORW);
        }
        self
    }

    /// Adds duplicating parameters.
    pub fn duplicating_parameters(mut self, params: DuplicatingParameters) -> Self {
        self.duplicating_parameters = Some(params);
        self
    }

    /// Adds BAR ID.
    pub fn bar_id(mut self, bar_id: BarId) -> Self {
        self.bar_id = Some(bar_id);
        self
    }

    /// Builds the Create FAR with comprehensive validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - FAR ID is not set (should not happen with current API)
    /// - Apply Action is not set
    /// - Action and parameter combinations are invalid (e.g., BUFF without BAR ID)
    /// - FORW action without forwarding parameters
    /// - DUPL action without duplicating parameters
    pub fn build(self) -> Result<CreateFar, io::Error> {
        let far_id = self
            .far_id
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "FAR ID is required"))?;

        let apply_action = self.apply_action.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Apply Action is required")
        })?;

        // Validate action and parameter combinations
        self.validate_action_parameters(&apply_action)?;

        Ok(CreateFar {
            far_id,
            apply_action,
            forwarding_parameters: self.forwarding_parameters,
            duplicating_parameters: self.duplicating_parameters,
            bar_id: self.bar_id,
        })
    }

    /// Validates that action and parameter combinations are correct.
    fn validate_action_parameters(&self, apply_action: &ApplyAction) -> Result<(), io::Error> {
        // Check BUFF requires BAR ID
        if apply_action.contains(ApplyAction::BUFF) && self.bar_id.is_none() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "BUFF action requires BAR ID to be set",
            ));
        }

        // Check FORW should have forwarding parameters (warning, not error)
        if apply_action.contains(ApplyAction::FORW) && self.forwarding_parameters.is_none() {
            // This is valid according to spec, but unusual - could be a warning in real implementation
        }

        // Check DUPL should have duplicating parameters (warning, not error)
        if apply_action.contains(ApplyAction::DUPL) && self.duplicating_parameters.is_none() {
            // This is valid according to spec, but unusual - could be a warning in real implementation
        }

        // Check BAR ID without BUFF action (unusual but not invalid)
        if self.bar_id.is_some() && !apply_action.contains(ApplyAction::BUFF) {
            // This is technically valid but unusual
        }

        Ok(())
    }

    /// Creates a FAR builder for dropping traffic.
    pub fn drop_traffic(far_id: FarId) -> Self {
        CreateFarBuilder::new(far_id).action(FarAction::Drop)
    }

    /// Creates a FAR builder for buffering traffic.
    pub fn buffer_traffic(far_id: FarId, bar_id: BarId) -> Self {
        CreateFarBuilder::new(far_id)
            .action(FarAction::Buffer)
            .bar_id(bar_id)
    }

    /// Creates a FAR builder for uplink forwarding to core.
    pub fn uplink_to_core(far_id: FarId) -> Self {
        CreateFarBuilder::new(far_id).forward_to(Interface::Core)
    }

    /// Creates a FAR builder for downlink forwarding to access.
    pub fn downlink_to_access(far_id: FarId) -> Self {
        CreateFarBuilder::new(far_id).forward_to(Interface::Access)
    }

    /// Creates a FAR builder for forwarding to DN (Data Network).
    pub fn to_data_network(far_id: FarId) -> Self {
        CreateFarBuilder::new(far_id).forward_to(Interface::Dn)
    }

    /// Creates a FAR builder with forwarding and duplication.
    pub fn forward_and_duplicate(far_id: FarId, destination: Interface) -> Self {
        let dest_interface = DestinationInterface::new(destination);
        let forwarding_params = ForwardingParameters::new(dest_interface);

        CreateFarBuilder::new(far_id)
            .action(FarAction::ForwardAndDuplicate)
            .forwarding_parameters(forwarding_params)
    }
}
