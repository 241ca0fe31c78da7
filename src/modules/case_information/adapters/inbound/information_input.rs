// Transport shape of a case information record sent by callers (HTTP JSON body or GraphQL input).
//
// Sub-records are nested objects whose required fields are non-nullable, so a caller can send a
// sub-record only as a whole. Instants are epoch milliseconds.

use crate::modules::case_information::core::information::{
    Information, InformationStatus, InvestigationBodyInformation, ProcuracyInformation,
};
use crate::shared::core::primitives::{Entity, UNASSIGNED_ID, from_epoch_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("field {field}: {value} is not a valid epoch millisecond timestamp")]
pub struct InvalidTimestamp {
    pub field: &'static str,
    pub value: i64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, async_graphql::Enum,
)]
#[graphql(name = "InformationStatus")]
pub enum InformationStatusDto {
    None,
    Cessation,
    Prosecution,
    NonProsecution,
}

impl From<InformationStatusDto> for InformationStatus {
    fn from(value: InformationStatusDto) -> Self {
        match value {
            InformationStatusDto::None => InformationStatus::None,
            InformationStatusDto::Cessation => InformationStatus::Cessation,
            InformationStatusDto::Prosecution => InformationStatus::Prosecution,
            InformationStatusDto::NonProsecution => InformationStatus::NonProsecution,
        }
    }
}

impl From<InformationStatus> for InformationStatusDto {
    fn from(value: InformationStatus) -> Self {
        match value {
            InformationStatus::None => InformationStatusDto::None,
            InformationStatus::Cessation => InformationStatusDto::Cessation,
            InformationStatus::Prosecution => InformationStatusDto::Prosecution,
            InformationStatus::NonProsecution => InformationStatusDto::NonProsecution,
        }
    }
}

#[derive(Debug, Clone, Deserialize, async_graphql::InputObject)]
pub struct InvestigationInput {
    pub investigator: String,
    pub designation_no: String,
    pub designated_at: i64,
    #[serde(default = "default_status")]
    #[graphql(default_with = "default_status()")]
    pub status: InformationStatusDto,
    #[serde(default)]
    pub handling_no: Option<String>,
    #[serde(default)]
    pub handled_at: Option<i64>,
    #[serde(default)]
    pub transferred_at: Option<i64>,
    #[serde(default)]
    pub extended_at: Option<i64>,
    #[serde(default)]
    pub recovered_at: Option<i64>,
    #[serde(default)]
    pub canceled_at: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, async_graphql::InputObject)]
pub struct ProcuracyInput {
    pub procurator: String,
    pub designation_no: String,
    pub designated_at: i64,
    #[serde(default)]
    pub additional_evidence_requirement: Option<String>,
    #[serde(default)]
    pub non_prosecution_decision: Option<String>,
    #[serde(default)]
    pub cessation_decision: Option<String>,
}

#[derive(Debug, Clone, Deserialize, async_graphql::InputObject)]
pub struct InformationInput {
    #[serde(default)]
    pub id: Option<String>,
    pub acceptance_no: String,
    pub accepted_at: i64,
    pub plaintiff: String,
    pub defendant: String,
    #[serde(default)]
    pub law: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub investigation_information: Option<InvestigationInput>,
    #[serde(default)]
    pub procuracy_information: Option<ProcuracyInput>,
}

fn default_status() -> InformationStatusDto {
    InformationStatusDto::None
}

fn instant(field: &'static str, value: i64) -> Result<DateTime<Utc>, InvalidTimestamp> {
    from_epoch_millis(value).ok_or(InvalidTimestamp { field, value })
}

fn optional_instant(
    field: &'static str,
    value: Option<i64>,
) -> Result<Option<DateTime<Utc>>, InvalidTimestamp> {
    value.map(|millis| instant(field, millis)).transpose()
}

impl TryFrom<InvestigationInput> for InvestigationBodyInformation {
    type Error = InvalidTimestamp;

    fn try_from(input: InvestigationInput) -> Result<Self, Self::Error> {
        Ok(Self {
            designated_at: instant("designated_at", input.designated_at)?,
            handled_at: optional_instant("handled_at", input.handled_at)?,
            transferred_at: optional_instant("transferred_at", input.transferred_at)?,
            extended_at: optional_instant("extended_at", input.extended_at)?,
            recovered_at: optional_instant("recovered_at", input.recovered_at)?,
            canceled_at: optional_instant("canceled_at", input.canceled_at)?,
            investigator: input.investigator,
            designation_no: input.designation_no,
            status: input.status.into(),
            handling_no: input.handling_no,
        })
    }
}

impl TryFrom<ProcuracyInput> for ProcuracyInformation {
    type Error = InvalidTimestamp;

    fn try_from(input: ProcuracyInput) -> Result<Self, Self::Error> {
        Ok(Self {
            designated_at: instant("designated_at", input.designated_at)?,
            procurator: input.procurator,
            designation_no: input.designation_no,
            additional_evidence_requirement: input.additional_evidence_requirement,
            non_prosecution_decision: input.non_prosecution_decision,
            cessation_decision: input.cessation_decision,
        })
    }
}

impl TryFrom<InformationInput> for Information {
    type Error = InvalidTimestamp;

    fn try_from(input: InformationInput) -> Result<Self, Self::Error> {
        let mut entity = Entity::new();
        entity.id = input.id.unwrap_or_else(|| UNASSIGNED_ID.to_string());
        Ok(Self {
            entity,
            accepted_at: instant("accepted_at", input.accepted_at)?,
            investigation_information: input
                .investigation_information
                .map(InvestigationBodyInformation::try_from)
                .transpose()?,
            procuracy_information: input
                .procuracy_information
                .map(ProcuracyInformation::try_from)
                .transpose()?,
            acceptance_no: input.acceptance_no,
            plaintiff: input.plaintiff,
            defendant: input.defendant,
            law: input.law,
            description: input.description,
        })
    }
}
