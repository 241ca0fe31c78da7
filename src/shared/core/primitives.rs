// Shared primitives for persisted records.
//
// Purpose
// - Identity and lifecycle timestamps embedded in every aggregate.
// - Conversion between instants and the epoch millisecond integers used on the wire.
//
// Timestamps
// - The wire carries epoch milliseconds. Converting an instant truncates sub-millisecond
//   precision, it never rounds.

use chrono::{DateTime, SubsecRound, Utc};

/// Identity placeholder for records that have not been persisted yet.
pub const UNASSIGNED_ID: &str = "";

/// Identity placeholder the backend expects on a create request.
pub const SEED_ID: &str = "0";

/// Identity and lifecycle timestamps shared by persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity {
    /// A not-yet-persisted identity stamped with the current instant.
    pub fn new() -> Self {
        Self::with_created_at(Utc::now().trunc_subsecs(3))
    }

    pub fn with_created_at(created_at: DateTime<Utc>) -> Self {
        Self {
            id: UNASSIGNED_ID.to_string(),
            created_at,
            updated_at: None,
            deleted_at: None,
        }
    }

    /// False for a blank id and for the seed placeholder.
    pub fn is_persisted(&self) -> bool {
        let id = self.id.trim();
        !id.is_empty() && id != SEED_ID
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

pub fn to_epoch_millis(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
