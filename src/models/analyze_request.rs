use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

use crate::graphql::Upload;

/// Processing state of an analyze request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeRequestStatus {
    InProgress,
    Done,
    Error,
    Unknown(String),
}

impl AnalyzeRequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "in-progress",
            Self::Done => "done",
            Self::Error => "error",
            Self::Unknown(status) => status,
        }
    }

    /// Whether the backend is still working on the request
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::InProgress => "In Progress",
            Self::Done => "Done",
            Self::Error => "Error",
            Self::Unknown(status) => status,
        }
    }
}

impl From<&str> for AnalyzeRequestStatus {
    fn from(status: &str) -> Self {
        match status {
            "in-progress" => Self::InProgress,
            "done" => Self::Done,
            "error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for AnalyzeRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AnalyzeRequestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AnalyzeRequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(Self::from(status.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub id: String,
    pub ov_chipkaart_number: String,
    pub start_date: String,
    pub end_date: String,
    pub status: AnalyzeRequestStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Where the travel history comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelHistorySource {
    /// The backend fetches the history with the card holder's credentials
    Credentials { username: String, password: String },
    /// An exported travel history file
    File(Upload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreAnalyzeRequestInput {
    pub ov_chipkaart_number: String,
    pub start_date: String,
    pub end_date: String,
    pub source: TravelHistorySource,
}

impl StoreAnalyzeRequestInput {
    /// The `input` variable, with the file slot left `null`
    pub fn to_variables(&self) -> Value {
        let (username, password) = match &self.source {
            TravelHistorySource::Credentials { username, password } => {
                (Value::from(username.as_str()), Value::from(password.as_str()))
            }
            TravelHistorySource::File(_) => (Value::Null, Value::Null),
        };

        json!({
            "input": {
                "ovChipkaartUsername": username,
                "ovChipkaartPassword": password,
                "travelHistoryFile": null,
                "ovChipkaartNumber": self.ov_chipkaart_number,
                "startDate": self.start_date,
                "endDate": self.end_date,
            }
        })
    }

    pub fn upload(&self) -> Option<&Upload> {
        match &self.source {
            TravelHistorySource::File(upload) => Some(upload),
            TravelHistorySource::Credentials { .. } => None,
        }
    }
}

/// Paging and ordering for the recent requests list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    pub take: u32,
    pub skip: u32,
    pub order_by: String,
    pub order_direction: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            take: 10,
            skip: 0,
            order_by: "created_at".to_string(),
            order_direction: "DESC".to_string(),
        }
    }
}

impl ListOptions {
    pub fn latest(take: u32) -> Self {
        Self {
            take,
            ..Self::default()
        }
    }
}
