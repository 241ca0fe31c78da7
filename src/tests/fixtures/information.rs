// Shared test fixture for the Information aggregate.
// The canonical root fields come from `json/information.json` through the inbound DTO, so the
// fixture exercises the same transport shape callers send.

use crate::modules::case_information::adapters::inbound::information_input::InformationInput;
use crate::modules::case_information::core::information::{
    Information, InformationStatus, InvestigationBodyInformation, ProcuracyInformation,
};
use crate::shared::core::primitives::{Entity, from_epoch_millis};
use chrono::{DateTime, Utc};
use std::fs;

pub const FIXED_CREATED_AT_MS: i64 = 1_700_000_000_000;

pub fn at(millis: i64) -> DateTime<Utc> {
    from_epoch_millis(millis).unwrap()
}

pub fn investigation_fixture() -> InvestigationBodyInformation {
    InvestigationBodyInformation {
        investigator: "Tran A".to_string(),
        designation_no: "INO1".to_string(),
        designated_at: at(1_704_153_600_000),
        status: InformationStatus::Cessation,
        handling_no: Some("HAND1".to_string()),
        handled_at: Some(at(1_704_240_000_000)),
        transferred_at: Some(at(1_704_326_400_000)),
        extended_at: Some(at(1_704_412_800_000)),
        recovered_at: Some(at(1_704_499_200_000)),
        canceled_at: Some(at(1_704_585_600_000)),
    }
}

pub fn procuracy_fixture() -> ProcuracyInformation {
    ProcuracyInformation {
        procurator: "Dinh B".to_string(),
        designation_no: "DE01".to_string(),
        designated_at: at(1_704_672_000_000),
        additional_evidence_requirement: Some("Yeu cau them chung cu".to_string()),
        non_prosecution_decision: Some("Khong khoi to vu an".to_string()),
        cessation_decision: Some("Tam dinh chi vu an".to_string()),
    }
}

pub struct InformationBuilder {
    inner: Information,
}

impl Default for InformationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl InformationBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/information.json").unwrap();
        let dto: InformationInput = serde_json::from_str(&json_str).unwrap();
        let information = Information::try_from(dto)
            .unwrap()
            .with_entity(Entity::with_created_at(at(FIXED_CREATED_AT_MS)));

        Self { inner: information }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.entity.id = v.into();
        self
    }

    pub fn acceptance_no(mut self, v: impl Into<String>) -> Self {
        self.inner.acceptance_no = v.into();
        self
    }

    pub fn accepted_at(mut self, millis: i64) -> Self {
        self.inner.accepted_at = at(millis);
        self
    }

    pub fn plaintiff(mut self, v: impl Into<String>) -> Self {
        self.inner.plaintiff = v.into();
        self
    }

    pub fn defendant(mut self, v: impl Into<String>) -> Self {
        self.inner.defendant = v.into();
        self
    }

    pub fn law(mut self, v: Option<&str>) -> Self {
        self.inner.law = v.map(str::to_string);
        self
    }

    pub fn description(mut self, v: Option<&str>) -> Self {
        self.inner.description = v.map(str::to_string);
        self
    }

    pub fn investigation(mut self, v: Option<InvestigationBodyInformation>) -> Self {
        self.inner.investigation_information = v;
        self
    }

    pub fn procuracy(mut self, v: Option<ProcuracyInformation>) -> Self {
        self.inner.procuracy_information = v;
        self
    }

    pub fn build(self) -> Information {
        self.inner
    }
}

#[cfg(test)]
mod information_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = InformationBuilder::default().build();
        assert_eq!(built.id(), "");
        assert_eq!(built.acceptance_no, "DOC01");
        assert_eq!(built.accepted_at, at(1_704_067_200_000));
        assert_eq!(built.plaintiff, "Nguyen Van A");
        assert_eq!(built.defendant, "Dinh Thi B");
        assert_eq!(built.law.as_deref(), Some("L001"));
        assert_eq!(built.description.as_deref(), Some("Mo ta"));
        assert_eq!(built.entity.created_at, at(FIXED_CREATED_AT_MS));
        assert!(built.investigation_information.is_none());
        assert!(built.procuracy_information.is_none());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = InformationBuilder::new()
            .id("id-1")
            .acceptance_no("AN99")
            .accepted_at(0)
            .plaintiff("P")
            .defendant("D")
            .law(None)
            .description(Some("desc"))
            .investigation(Some(investigation_fixture()))
            .procuracy(Some(procuracy_fixture()))
            .build();

        assert_eq!(custom.id(), "id-1");
        assert_eq!(custom.acceptance_no, "AN99");
        assert_eq!(custom.accepted_at, at(0));
        assert_eq!(custom.plaintiff, "P");
        assert_eq!(custom.defendant, "D");
        assert_eq!(custom.law, None);
        assert_eq!(custom.description.as_deref(), Some("desc"));
        assert_eq!(custom.investigation_information, Some(investigation_fixture()));
        assert_eq!(custom.procuracy_information, Some(procuracy_fixture()));
    }
}
