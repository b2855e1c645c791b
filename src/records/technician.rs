use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::filter::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechStatus {
    Available,
    Busy,
    Offline,
}

impl TechStatus {
    pub const ALL: [TechStatus; 3] = [TechStatus::Available, TechStatus::Busy, TechStatus::Offline];

    pub fn as_str(&self) -> &'static str {
        match self {
            TechStatus::Available => "available",
            TechStatus::Busy => "busy",
            TechStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for TechStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TechStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(TechStatus::Available),
            "busy" => Ok(TechStatus::Busy),
            "offline" => Ok(TechStatus::Offline),
            other => Err(BoardError::UnknownValue {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// One member of the field crew.
///
/// `current_job` is expected to be set only while `status` is `Busy`; like
/// the job side, that convention is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub specialties: Vec<String>,
    pub status: TechStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_job: Option<String>,
    pub rating: f64,
    pub completed_jobs: u32,
    pub location: String,
    pub last_active: String,
}

impl Filterable for TechnicianRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.specialties.iter().map(String::as_str));
        fields
    }

    fn dimension(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}
