// src/ie/create_pdr.rs

//! Create PDR Information Element.

use crate::error::PfcpError;
use crate::ie::activate_predefined_rules::ActivatePredefinedRules;
use crate::ie::far_id::FarId;
use crate::ie::outer_header_removal::OuterHeaderRemoval;
use crate::ie::pdi::Pdi;
use crate::ie::pdr_id::PdrId;
use crate::ie::precedence::Precedence;
use crate::ie::qer_id::QerId;
use crate::ie::urr_id::UrrId;
use crate::ie::{marshal_ies, Ie, IeIterator, IeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePdr {
    pub pdr_id: PdrId,
    pub precedence: Precedence,
    pub pdi: Pdi,
    pub outer_header_removal: Option<OuterHeaderRemoval>,
    pub far_id: Option<FarId>,
    pub urr_id: Option<UrrId>,
    pub qer_id: Option<QerId>,
    pub activate_predefined_rules: Option<ActivatePredefinedRules>,
}

impl CreatePdr {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pdr_id: PdrId,
        precedence: Precedence,
        pdi: Pdi,
        outer_header_removal: Option<OuterHeaderRemoval>,
        far_id: Option<FarId>,
        urr_id: Option<UrrId>,
        qer_id: Option<QerId>,
        activate_predefined_rules: Option<ActivatePredefinedRules>,
    ) -> Self {
        CreatePdr {
            pdr_id,
            precedence,
            pdi,
            outer_header_removal,
            far_id,
            urr_id,
            qer_id,
            activate_predefined_rules,
        }
    }

    pub fn marshal(&self) -> Vec<u8> {
        let mut ies = vec![
            self.pdr_id.to_ie(),
            self.precedence.to_ie(),
            self.pdi.to_ie(),
        ];

        if let Some(ohr) = &self.outer_header_removal {
            ies.push(Ie::new(IeType::OuterHeaderRemoval, ohr.marshal().to_vec()));
        }
        if let Some(far_id) = &self.far_id {
            ies.push(far_id.to_ie());
        }
        if let Some(urr_id) = &self.urr_id {
            ies.push(urr_id.to_ie());
        }
        if let Some(qer_id) = &self.qer_id {
            ies.push(qer_id.to_ie());
        }
        if let Some(apr) = &self.activate_predefined_rules {
            ies.push(Ie::new(IeType::ActivatePredefinedRules, apr.marshal()));
        }

        marshal_ies(&ies)
    }

    pub fn unmarshal(payload: &[u8]) -> Result<Self, PfcpError> {
        let mut pdr_id = None;
        let mut precedence = None;
        let mut pdi = None;
        let mut outer_header_removal = None;
        let mut far_id = None;
        let mut urr_id = None;
        let mut qer_id = None;
        let mut activate_predefined_rules = None;

        for ie_result in IeIterator::new(payload) {
            let ie = ie_result?;
            match ie.ie_type {
                IeType::PdrId => pdr_id = Some(PdrId::unmarshal(&ie.payload)?),
                IeType::Precedence => precedence = Some(Precedence::unmarshal(&ie.payload)?),
                IeType::Pdi => pdi = Some(Pdi::unmarshal(&ie.payload)?),
                IeType::OuterHeaderRemoval => {
                    outer_header_removal = Some(OuterHeaderRemoval::unmarshal(&ie.payload)?)
                }
                IeType::FarId => far_id = Some(FarId::unmarshal(&ie.payload)?),
                IeType::UrrId => urr_id = Some(UrrId::unmarshal(&ie.payload)?),
                IeType::QerId => qer_id = Some(QerId::unmarshal(&ie.payload)?),
                IeType::ActivatePredefinedRules => {
                    activate_predefined_rules =
                        Some(ActivatePredefinedRules::unmarshal(&ie.payload)?)
                }
                _ => (),
            }
        }

        Ok(CreatePdr {
            pdr_id: pdr_id.ok_or(PfcpError::missing_ie_in_grouped(
                IeType::PdrId,
                IeType::CreatePdr,
            ))?,
            precedence: precedence.ok_or(PfcpError::missing_ie_in_grouped(
                IeType::Precedence,
                IeType::CreatePdr,
            ))?,
            pdi: pdi.ok_or(PfcpError::missing_ie_in_grouped(
                IeType::Pdi,
                IeType::CreatePdr,
            ))?,
            outer_header_removal,
            far_id,
            urr_id,
            qer_id,
            activate_predefined_rules,
        })
    }

    pub fn to_ie(&self) -> Ie {
        Ie::new(IeType::CreatePdr, self.marshal())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreatePdrBuilder {
    pdr_id: Option<PdrId>,
    precedence: Option<Precedence>,
    pdi: Option<Pdi>,
    outer_header_removal: Option<OuterHeaderRemoval>,
    far_id: Option<FarId>,
    urr_id: Option<UrrId>,
    qer_id: Option<QerId>,
    activate_predefined_rules: Option<ActivatePredefinedRules>,
}

impl CreatePdrBuilder {
    pub fn new(pdr_id: PdrId) -> Self {
        CreatePdrBuilder {
            pdr_id: Some(pdr_id),
            ..Default::default()
        }
    }

    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = Some(precedence);
        self
    }

    pub fn pdi(mut self, pdi: Pdi) -> Self {
        self.pdi = Some(pdi);
        self
    }

    pub fn outer_header_removal(mut self, outer_header_removal: OuterHeaderRemoval) -> Self {
        self.outer_header_removal = Some(outer_header_removal);
        self
    }

    pub fn far_id(mut self, far_id: FarId) -> Self {
        self.far_id = Some(far_id);
        self
    }

    pub fn urr_id(mut self, urr_id: UrrId) -> Self {
        self.urr_id = Some(urr_id);
        self
    }

    pub fn qer_id(mut self, qer_id: QerId) -> Self {
        self.qer_id = Some(qer_id);
        self
    }

    pub fn activate_predefined_rules(
        mut self,
        activate_predefined_rules: ActivatePredefinedRules,
    ) -> Self {
        self.activate_predefined_rules = Some(activate_predefined_rules);
        self
    }

    pub fn build(self) -> Result<CreatePdr, PfcpError> {
        let pdr_id = self.pdr_id.ok_or(PfcpError::MissingMandatoryIe {
            ie_type: IeType::PdrId,
            message_type: None,
            parent_ie: Some(IeType::CreatePdr),
        })?;
        let precedence = self.precedence.ok_or(PfcpError::MissingMandatoryIe {
            ie_type: IeType::Precedence,
            message_type: None,
            parent_ie: Some(IeType::CreatePdr),
        })?;
        let pdi = self.pdi.ok_or(PfcpError::MissingMandatoryIe {
            ie_type: IeType::Pdi,
            message_type: None,
            parent_ie: Some(IeType::CreatePdr),
        })?;

        Ok(CreatePdr {
            pdr_id,
            precedence,
            pdi,
            outer_header_removal: self.outer_header_removal,
            far_id: self.far_id,
            urr_id: self.urr_id,
            qer_id: self.qer_id,
            activate_predefined_rules: self.activate_predefined_rules,
        })
    }
}

impl CreatePdr {
    pub fn uplink_access(pdr_id: PdrId, precedence: Precedence) -> CreatePdr {
        use crate::ie::source_interface::{SourceInterface, SourceInterfaceValue};

        let pdi = Pdi::new(
            SourceInterface::new(SourceInterfaceValue::Access),
            None,
            None,
            None,
            None,
            None,
            None,
        );

        CreatePdr::new(pdr_id, precedence, pdi, None, None, None, None, None)
    }

    pub fn downlink_core(pdr_id: PdrId, precedence: Precedence) -> CreatePdr {
        use crate::ie::source_interface::{SourceInterface, SourceInterfaceValue};

        let pdi = Pdi::new(
            SourceInterface::new(SourceInterfaceValue::Core),
            None,
            None,
            None,
            None,
            None,
            None,
        );

        CreatePdr::new(pdr_id, precedence, pdi, None, None, None, None, None)
    }
}
