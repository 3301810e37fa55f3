#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tt_core::status::Status;

/// One tracked unit of work, in exactly the shape the document stores it.
/// Field order here is the order fields serialize in.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: usize,
    pub description: String,
    #[serde(with = "status_repr")]
    pub status: Status,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Task {
    pub(crate) fn new(id: usize, description: String, now: OffsetDateTime) -> Self {
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }
}

// Statuses persist under their command-line labels; tt_core stays free of
// serde, so the mapping lives here.
mod status_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use tt_core::status::Status;

    pub fn serialize<S: Serializer>(status: &Status, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(status.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Status, D::Error> {
        let label = String::deserialize(deserializer)?;
        Status::from_str(&label)
            .ok_or_else(|| D::Error::custom(format!("unknown status: {label}")))
    }
}
