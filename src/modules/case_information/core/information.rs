// Case information aggregate.
//
// Purpose
// - The root record of an accepted case plus its two optional sub-dossiers: the investigation
//   body record and the procuracy record.
//
// Invariants
// - Required fields are non-optional types, so omitting one is a compile error.
// - A sub-record is either wholly present or absent (`None`).
//
// Boundaries
// - No input or output. The flat wire shape never leaks into this module.

use crate::shared::core::primitives::Entity;
use chrono::{DateTime, Utc};

/// Outcome recorded by the investigation body. Wire values are fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum InformationStatus {
    #[default]
    None,
    Cessation,
    Prosecution,
    NonProsecution,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown information status {0}")]
pub struct UnknownStatus(pub i64);

impl InformationStatus {
    pub fn wire_value(self) -> i64 {
        match self {
            InformationStatus::None => 0,
            InformationStatus::Cessation => 1,
            InformationStatus::Prosecution => 2,
            InformationStatus::NonProsecution => 3,
        }
    }
}

impl TryFrom<i64> for InformationStatus {
    type Error = UnknownStatus;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InformationStatus::None),
            1 => Ok(InformationStatus::Cessation),
            2 => Ok(InformationStatus::Prosecution),
            3 => Ok(InformationStatus::NonProsecution),
            other => Err(UnknownStatus(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestigationBodyInformation {
    pub investigator: String,
    pub designation_no: String,
    pub designated_at: DateTime<Utc>,
    pub status: InformationStatus,
    pub handling_no: Option<String>,
    pub handled_at: Option<DateTime<Utc>>,
    pub transferred_at: Option<DateTime<Utc>>,
    pub extended_at: Option<DateTime<Utc>>,
    pub recovered_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
}

impl InvestigationBodyInformation {
    pub fn new(
        investigator: impl Into<String>,
        designation_no: impl Into<String>,
        designated_at: DateTime<Utc>,
        status: InformationStatus,
    ) -> Self {
        Self {
            investigator: investigator.into(),
            designation_no: designation_no.into(),
            designated_at,
            status,
            handling_no: None,
            handled_at: None,
            transferred_at: None,
            extended_at: None,
            recovered_at: None,
            canceled_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcuracyInformation {
    pub procurator: String,
    pub designation_no: String,
    pub designated_at: DateTime<Utc>,
    pub additional_evidence_requirement: Option<String>,
    pub non_prosecution_decision: Option<String>,
    pub cessation_decision: Option<String>,
}

impl ProcuracyInformation {
    pub fn new(
        procurator: impl Into<String>,
        designation_no: impl Into<String>,
        designated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            procurator: procurator.into(),
            designation_no: designation_no.into(),
            designated_at,
            additional_evidence_requirement: None,
            non_prosecution_decision: None,
            cessation_decision: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Information {
    pub entity: Entity,
    pub acceptance_no: String,
    pub accepted_at: DateTime<Utc>,
    pub plaintiff: String,
    pub defendant: String,
    pub law: Option<String>,
    pub description: Option<String>,
    pub investigation_information: Option<InvestigationBodyInformation>,
    pub procuracy_information: Option<ProcuracyInformation>,
}

impl Information {
    /// A new, not-yet-persisted record without sub-dossiers.
    pub fn new(
        acceptance_no: impl Into<String>,
        accepted_at: DateTime<Utc>,
        plaintiff: impl Into<String>,
        defendant: impl Into<String>,
    ) -> Self {
        Self {
            entity: Entity::new(),
            acceptance_no: acceptance_no.into(),
            accepted_at,
            plaintiff: plaintiff.into(),
            defendant: defendant.into(),
            law: None,
            description: None,
            investigation_information: None,
            procuracy_information: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.entity.id
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = entity;
        self
    }

    pub fn with_law(mut self, law: impl Into<String>) -> Self {
        self.law = Some(law.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_investigation(mut self, investigation: InvestigationBodyInformation) -> Self {
        self.investigation_information = Some(investigation);
        self
    }

    pub fn with_procuracy(mut self, procuracy: ProcuracyInformation) -> Self {
        self.procuracy_information = Some(procuracy);
        self
    }
}

#[cfg(test)]
mod information_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(InformationStatus::None, 0)]
    #[case(InformationStatus::Cessation, 1)]
    #[case(InformationStatus::Prosecution, 2)]
    #[case(InformationStatus::NonProsecution, 3)]
    fn it_should_use_the_fixed_wire_values(#[case] status: InformationStatus, #[case] wire: i64) {
        assert_eq!(status.wire_value(), wire);
        assert_eq!(InformationStatus::try_from(wire), Ok(status));
    }

    #[rstest]
    fn it_should_reject_an_unknown_wire_value() {
        assert_eq!(InformationStatus::try_from(4), Err(UnknownStatus(4)));
    }

    #[rstest]
    fn it_should_create_the_information_without_sub_records() {
        let accepted_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let information = Information::new("AN01", accepted_at, "A", "B");
        assert_eq!(information.acceptance_no, "AN01");
        assert_eq!(information.id(), "");
        assert!(information.investigation_information.is_none());
        assert!(information.procuracy_information.is_none());
    }

    #[rstest]
    fn it_should_attach_both_sub_records() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let information = Information::new("AN01", at, "A", "B")
            .with_law("L001")
            .with_investigation(InvestigationBodyInformation::new(
                "I",
                "D1",
                at,
                InformationStatus::Prosecution,
            ))
            .with_procuracy(ProcuracyInformation::new("P", "DE01", at));
        assert_eq!(information.law.as_deref(), Some("L001"));
        assert_eq!(
            information.investigation_information.unwrap().status,
            InformationStatus::Prosecution
        );
        assert_eq!(information.procuracy_information.unwrap().procurator, "P");
    }
}
