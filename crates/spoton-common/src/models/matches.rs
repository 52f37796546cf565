//! Match records

use serde::{Deserialize, Serialize};

/// Lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Proposed, waiting for the away side to confirm
    Pending,
    /// Both sides confirmed
    Confirmed,
    /// Played and recorded
    Completed,
    /// Called off
    Cancelled,
}

/// A scheduled or played match between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Home team identifier
    pub home_team_id: String,
    /// Away team identifier
    pub away_team_id: String,
    /// Home team display name
    pub home_team_name: String,
    /// Away team display name
    pub away_team_name: String,
    /// Scheduled date
    pub match_date: String,
    /// Venue
    pub location: String,
    /// Lifecycle state
    pub status: MatchStatus,
    /// Match format, e.g. "5v5"
    pub format: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Query parameters for listing matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchListParams {
    /// Page number, 1-based
    pub page: u32,
    /// Records per page
    pub page_size: u32,
    /// Restrict to a single lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
}
