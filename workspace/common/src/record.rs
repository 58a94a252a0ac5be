use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Whether a communication crisis was detected during the month.
///
/// Serialized with the labels used in the source dataset (`"Sí"` / `"No"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CrisisFlag {
    #[serde(rename = "Sí")]
    Yes,
    #[serde(rename = "No")]
    No,
}

impl CrisisFlag {
    /// Label as it appears in the dataset and on the charts.
    pub fn label(&self) -> &'static str {
        match self {
            CrisisFlag::Yes => "Sí",
            CrisisFlag::No => "No",
        }
    }
}

impl fmt::Display for CrisisFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CrisisFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sí" | "si" | "yes" => Ok(CrisisFlag::Yes),
            "no" => Ok(CrisisFlag::No),
            other => Err(format!("unknown crisis label '{}'", other)),
        }
    }
}

/// One month of citizen-trust metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    /// Year-month label, e.g. "2024-01"
    pub month: String,
    /// Share of positive sentiment, in percent
    pub positive_sentiment: f64,
    /// Share of negative sentiment, in percent
    pub negative_sentiment: f64,
    /// Total number of mentions in the month
    pub mention_volume: i64,
    /// Most discussed topic
    pub dominant_topic: String,
    /// Crisis flag for the month
    pub crisis_detected: CrisisFlag,
    /// Average response time in hours
    pub response_time_hours: f64,
    /// Channel with the most mentions
    pub primary_channel: String,
    /// Citizen trust score, expected in 0-100
    pub citizen_trust_index: f64,
    /// Number of communication interventions
    pub communication_interventions: i64,
    /// Number of positive mentions
    pub positive_mentions: i64,
    /// Number of negative mentions
    pub negative_mentions: i64,
}
