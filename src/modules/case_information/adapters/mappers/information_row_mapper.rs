// Bidirectional mapping between the Information aggregate and the flat wire row.
//
// Flatten
// - Total and side-effect free. Instants become epoch milliseconds by truncation.
// - An absent sub-record emits null for every key of its prefixed group.
// - A blank id is replaced by the seed id placeholder.
//
// Reconstruct
// - A sub-record exists only when both of its anchor fields are truthy (non-empty):
//   `inv_investigator` + `inv_designation_no`, `pro_procurator` + `pro_designation_no`.
//   Other prefixed fields are ignored when the anchor test fails.
// - Optional instants are truthy-tested as well: null and 0 both read back as None.
// - A missing `created_at` reads back as the current instant, a missing `*_designated_at` of an
//   anchored sub-record as the epoch. Neither rejects the row.

use crate::modules::case_information::adapters::outbound::information_row::{
    InformationRow, SEED_ID,
};
use crate::modules::case_information::core::information::{
    Information, InformationStatus, InvestigationBodyInformation, ProcuracyInformation,
    UnknownStatus,
};
use crate::shared::core::primitives::{Entity, from_epoch_millis, to_epoch_millis};
use chrono::{DateTime, SubsecRound, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("row {id}: field {field} holds an out of range timestamp {value}")]
    InvalidTimestamp {
        id: String,
        field: &'static str,
        value: i64,
    },

    #[error("row {id}: {source}")]
    Status {
        id: String,
        #[source]
        source: UnknownStatus,
    },
}

pub fn flatten(information: &Information) -> InformationRow {
    let investigation = information.investigation_information.as_ref();
    let procuracy = information.procuracy_information.as_ref();
    let id = if information.entity.is_persisted() {
        information.entity.id.clone()
    } else {
        SEED_ID.to_string()
    };

    InformationRow {
        id,
        acceptance_no: information.acceptance_no.clone(),
        accepted_at: to_epoch_millis(&information.accepted_at),
        plaintiff: information.plaintiff.clone(),
        defendant: information.defendant.clone(),
        description: information.description.clone(),
        law: information.law.clone(),
        inv_investigator: investigation.map(|inv| inv.investigator.clone()),
        inv_designation_no: investigation.map(|inv| inv.designation_no.clone()),
        inv_designated_at: investigation.map(|inv| to_epoch_millis(&inv.designated_at)),
        inv_status: investigation.map(|inv| inv.status.wire_value()),
        inv_handling_no: investigation.and_then(|inv| inv.handling_no.clone()),
        inv_handled_at: investigation.and_then(|inv| inv.handled_at.as_ref().map(to_epoch_millis)),
        inv_transferred_at: investigation
            .and_then(|inv| inv.transferred_at.as_ref().map(to_epoch_millis)),
        inv_extended_at: investigation
            .and_then(|inv| inv.extended_at.as_ref().map(to_epoch_millis)),
        inv_recovered_at: investigation
            .and_then(|inv| inv.recovered_at.as_ref().map(to_epoch_millis)),
        inv_canceled_at: investigation
            .and_then(|inv| inv.canceled_at.as_ref().map(to_epoch_millis)),
        pro_procurator: procuracy.map(|pro| pro.procurator.clone()),
        pro_designation_no: procuracy.map(|pro| pro.designation_no.clone()),
        pro_designated_at: procuracy.map(|pro| to_epoch_millis(&pro.designated_at)),
        pro_additional_evidence_requirement: procuracy
            .and_then(|pro| pro.additional_evidence_requirement.clone()),
        pro_non_prosecution_decision: procuracy
            .and_then(|pro| pro.non_prosecution_decision.clone()),
        pro_cessation_decision: procuracy.and_then(|pro| pro.cessation_decision.clone()),
        created_at: Some(to_epoch_millis(&information.entity.created_at)),
        updated_at: information.entity.updated_at.as_ref().map(to_epoch_millis),
        deleted_at: information.entity.deleted_at.as_ref().map(to_epoch_millis),
    }
}

pub fn reconstruct(row: InformationRow) -> Result<Information, MappingError> {
    let reader = RowReader { id: &row.id };

    let investigation_information = if is_truthy(&row.inv_investigator)
        && is_truthy(&row.inv_designation_no)
    {
        let status = match row.inv_status {
            Some(value) => InformationStatus::try_from(value).map_err(|source| {
                MappingError::Status {
                    id: row.id.clone(),
                    source,
                }
            })?,
            None => InformationStatus::None,
        };
        Some(InvestigationBodyInformation {
            investigator: row.inv_investigator.clone().unwrap_or_default(),
            designation_no: row.inv_designation_no.clone().unwrap_or_default(),
            designated_at: reader.instant_or_epoch("inv_designated_at", row.inv_designated_at)?,
            status,
            handling_no: row.inv_handling_no.clone(),
            handled_at: reader.optional_instant("inv_handled_at", row.inv_handled_at)?,
            transferred_at: reader
                .optional_instant("inv_transferred_at", row.inv_transferred_at)?,
            extended_at: reader.optional_instant("inv_extended_at", row.inv_extended_at)?,
            recovered_at: reader.optional_instant("inv_recovered_at", row.inv_recovered_at)?,
            canceled_at: reader.optional_instant("inv_canceled_at", row.inv_canceled_at)?,
        })
    } else {
        None
    };

    let procuracy_information =
        if is_truthy(&row.pro_procurator) && is_truthy(&row.pro_designation_no) {
            Some(ProcuracyInformation {
                procurator: row.pro_procurator.clone().unwrap_or_default(),
                designation_no: row.pro_designation_no.clone().unwrap_or_default(),
                designated_at: reader
                    .instant_or_epoch("pro_designated_at", row.pro_designated_at)?,
                additional_evidence_requirement: row.pro_additional_evidence_requirement.clone(),
                non_prosecution_decision: row.pro_non_prosecution_decision.clone(),
                cessation_decision: row.pro_cessation_decision.clone(),
            })
        } else {
            None
        };

    let entity = Entity {
        id: row.id.clone(),
        created_at: match row.created_at {
            Some(millis) => reader.instant("created_at", millis)?,
            None => Utc::now().trunc_subsecs(3),
        },
        updated_at: reader.optional_instant("updated_at", row.updated_at)?,
        deleted_at: reader.optional_instant("deleted_at", row.deleted_at)?,
    };

    Ok(Information {
        entity,
        accepted_at: reader.instant("accepted_at", row.accepted_at)?,
        acceptance_no: row.acceptance_no,
        plaintiff: row.plaintiff,
        defendant: row.defendant,
        law: row.law,
        description: row.description,
        investigation_information,
        procuracy_information,
    })
}

fn is_truthy(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

struct RowReader<'a> {
    id: &'a str,
}

impl RowReader<'_> {
    fn instant_or_epoch(
        &self,
        field: &'static str,
        value: Option<i64>,
    ) -> Result<DateTime<Utc>, MappingError> {
        self.instant(field, value.unwrap_or_default())
    }

    fn optional_instant(
        &self,
        field: &'static str,
        value: Option<i64>,
    ) -> Result<Option<DateTime<Utc>>, MappingError> {
        match value {
            None | Some(0) => Ok(None),
            Some(millis) => self.instant(field, millis).map(Some),
        }
    }

    fn instant(&self, field: &'static str, millis: i64) -> Result<DateTime<Utc>, MappingError> {
        from_epoch_millis(millis).ok_or_else(|| MappingError::InvalidTimestamp {
            id: self.id.to_string(),
            field,
            value: millis,
        })
    }
}
