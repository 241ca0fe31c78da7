// Flat wire row exchanged with the backend.
//
// Key names are fixed for backend compatibility. Investigation fields carry the `inv_` prefix,
// procuracy fields the `pro_` prefix. Every instant is an epoch millisecond integer.

use serde::{Deserialize, Deserializer, Serialize};

pub use crate::shared::core::primitives::SEED_ID;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationRow {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub acceptance_no: String,
    pub accepted_at: i64,
    pub plaintiff: String,
    pub defendant: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub law: Option<String>,
    #[serde(default)]
    pub inv_investigator: Option<String>,
    #[serde(default)]
    pub inv_designation_no: Option<String>,
    #[serde(default)]
    pub inv_designated_at: Option<i64>,
    #[serde(default)]
    pub inv_status: Option<i64>,
    #[serde(default)]
    pub inv_handling_no: Option<String>,
    #[serde(default)]
    pub inv_handled_at: Option<i64>,
    #[serde(default)]
    pub inv_transferred_at: Option<i64>,
    #[serde(default)]
    pub inv_extended_at: Option<i64>,
    #[serde(default)]
    pub inv_recovered_at: Option<i64>,
    #[serde(default)]
    pub inv_canceled_at: Option<i64>,
    #[serde(default)]
    pub pro_procurator: Option<String>,
    #[serde(default)]
    pub pro_designation_no: Option<String>,
    #[serde(default)]
    pub pro_designated_at: Option<i64>,
    #[serde(default)]
    pub pro_additional_evidence_requirement: Option<String>,
    #[serde(default)]
    pub pro_non_prosecution_decision: Option<String>,
    #[serde(default)]
    pub pro_cessation_decision: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub deleted_at: Option<i64>,
}

/// Raw listing response: the page of rows and the backend-reported total.
pub type RawInformationList = (Vec<InformationRow>, Option<i64>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

// Backends with integer keys send the id as a JSON number.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(value) => value.to_string(),
        RawId::Text(value) => value,
    })
}

#[cfg(test)]
mod information_row_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_accept_a_numeric_id_from_the_backend() {
        let row: InformationRow = serde_json::from_value(json!({
            "id": 42,
            "acceptance_no": "AN01",
            "accepted_at": 1_704_067_200_000i64,
            "plaintiff": "A",
            "defendant": "B"
        }))
        .unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.inv_investigator, None);
        assert_eq!(row.created_at, None);
    }

    #[rstest]
    fn it_should_accept_a_string_id_and_explicit_nulls() {
        let row: InformationRow = serde_json::from_value(json!({
            "id": "abc",
            "acceptance_no": "AN01",
            "accepted_at": 0,
            "plaintiff": "A",
            "defendant": "B",
            "inv_investigator": null,
            "pro_procurator": "P"
        }))
        .unwrap();
        assert_eq!(row.id, "abc");
        assert_eq!(row.inv_investigator, None);
        assert_eq!(row.pro_procurator.as_deref(), Some("P"));
    }

    #[rstest]
    fn it_should_serialize_every_prefixed_key_even_when_absent() {
        let row = InformationRow {
            id: SEED_ID.to_string(),
            ..InformationRow::default()
        };
        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("id"), Some(&json!("0")));
        assert_eq!(object.get("inv_investigator"), Some(&json!(null)));
        assert_eq!(object.get("pro_cessation_decision"), Some(&json!(null)));
    }
}
