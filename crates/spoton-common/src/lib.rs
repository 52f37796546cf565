//! Shared wire types for the Spot On client SDK.
//!
//! Everything the server sends or accepts lives here: the uniform response
//! envelope, the domain records (matches, teams, users), and the error type
//! surfaced by the client crate.

pub mod base_url;
pub mod envelope;
pub mod error;
pub mod models;

pub use base_url::BaseUrl;
pub use envelope::Envelope;
pub use error::Error;
pub use models::matches::{Match, MatchListParams, MatchStatus};
pub use models::team::{Team, TeamDraft, TeamListParams};
pub use models::user::{LoginResult, User, UserPatch, WxLoginRequest};
pub use models::Page;
