// Transport shape of a case information record returned to callers. Instants are epoch
// milliseconds, absent sub-records are null.

use crate::modules::case_information::adapters::inbound::information_input::InformationStatusDto;
use crate::modules::case_information::core::information::{
    Information, InvestigationBodyInformation, ProcuracyInformation,
};
use crate::modules::case_information::core::query::Page;
use crate::shared::core::primitives::to_epoch_millis;
use async_graphql::SimpleObject;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
#[graphql(name = "Investigation")]
pub struct InvestigationView {
    pub investigator: String,
    pub designation_no: String,
    pub designated_at: i64,
    pub status: InformationStatusDto,
    pub handling_no: Option<String>,
    pub handled_at: Option<i64>,
    pub transferred_at: Option<i64>,
    pub extended_at: Option<i64>,
    pub recovered_at: Option<i64>,
    pub canceled_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
#[graphql(name = "Procuracy")]
pub struct ProcuracyView {
    pub procurator: String,
    pub designation_no: String,
    pub designated_at: i64,
    pub additional_evidence_requirement: Option<String>,
    pub non_prosecution_decision: Option<String>,
    pub cessation_decision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
#[graphql(name = "Information")]
pub struct InformationView {
    pub id: String,
    pub acceptance_no: String,
    pub accepted_at: i64,
    pub plaintiff: String,
    pub defendant: String,
    pub law: Option<String>,
    pub description: Option<String>,
    pub investigation_information: Option<InvestigationView>,
    pub procuracy_information: Option<ProcuracyView>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
#[graphql(name = "InformationPage")]
pub struct InformationPageView {
    pub records: Vec<InformationView>,
    pub total_count: u64,
}

impl From<InvestigationBodyInformation> for InvestigationView {
    fn from(v: InvestigationBodyInformation) -> Self {
        Self {
            investigator: v.investigator,
            designation_no: v.designation_no,
            designated_at: to_epoch_millis(&v.designated_at),
            status: v.status.into(),
            handling_no: v.handling_no,
            handled_at: v.handled_at.as_ref().map(to_epoch_millis),
            transferred_at: v.transferred_at.as_ref().map(to_epoch_millis),
            extended_at: v.extended_at.as_ref().map(to_epoch_millis),
            recovered_at: v.recovered_at.as_ref().map(to_epoch_millis),
            canceled_at: v.canceled_at.as_ref().map(to_epoch_millis),
        }
    }
}

impl From<ProcuracyInformation> for ProcuracyView {
    fn from(v: ProcuracyInformation) -> Self {
        Self {
            procurator: v.procurator,
            designation_no: v.designation_no,
            designated_at: to_epoch_millis(&v.designated_at),
            additional_evidence_requirement: v.additional_evidence_requirement,
            non_prosecution_decision: v.non_prosecution_decision,
            cessation_decision: v.cessation_decision,
        }
    }
}

impl From<Information> for InformationView {
    fn from(v: Information) -> Self {
        Self {
            created_at: to_epoch_millis(&v.entity.created_at),
            updated_at: v.entity.updated_at.as_ref().map(to_epoch_millis),
            id: v.entity.id,
            acceptance_no: v.acceptance_no,
            accepted_at: to_epoch_millis(&v.accepted_at),
            plaintiff: v.plaintiff,
            defendant: v.defendant,
            law: v.law,
            description: v.description,
            investigation_information: v.investigation_information.map(Into::into),
            procuracy_information: v.procuracy_information.map(Into::into),
        }
    }
}

impl From<Page<Information>> for InformationPageView {
    fn from(page: Page<Information>) -> Self {
        let page = page.map(InformationView::from);
        Self {
            records: page.records,
            total_count: page.total_count,
        }
    }
}
