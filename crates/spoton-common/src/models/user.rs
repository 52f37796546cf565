//! User records and the login handshake payloads

use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub nickname: String,
    /// Avatar URL
    pub avatar: String,
    /// Contact phone number
    pub phone: String,
    /// Preferred playing position
    pub position: String,
    /// Reliability score
    pub credit_score: u32,
    /// Identifier of the user's team, empty when unaffiliated
    pub team_id: String,
    /// Creation timestamp
    pub created_at: String,
}

/// Partial user payload for profile updates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Preferred playing position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Body of the `/auth/wx-login` exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WxLoginRequest {
    /// Platform login code obtained by the host application
    pub code: String,
}

/// Response of the `/auth/wx-login` exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResult {
    /// Bearer token to attach to subsequent calls
    pub token: String,
    /// The authenticated user's record
    pub user: User,
}
