//! Typed endpoint surface
//!
//! One method per endpoint, each a stateless pass-through to the request
//! wrapper with a fixed path template and method. Implemented by
//! [`ApiClient`]; hosts can mock the trait in their own tests.

use std::fmt::Debug;

use async_trait::async_trait;
use spoton_common::{
    Error, LoginResult, Match, MatchListParams, Page, Team, TeamDraft, TeamListParams, User,
    UserPatch, WxLoginRequest,
};

use crate::client::ApiClient;

/// Interface that connects a host application to the Spot On API
#[async_trait]
pub trait LeagueConnector: Debug {
    /// List matches, paginated, optionally filtered by status
    async fn list_matches(&self, params: &MatchListParams) -> Result<Page<Match>, Error>;
    /// Fetch a single match
    async fn get_match(&self, match_id: &str) -> Result<Match, Error>;
    /// List teams, paginated, optionally filtered by level
    async fn list_teams(&self, params: &TeamListParams) -> Result<Page<Team>, Error>;
    /// Fetch a single team
    async fn get_team(&self, team_id: &str) -> Result<Team, Error>;
    /// Register a new team
    async fn create_team(&self, draft: &TeamDraft) -> Result<Team, Error>;
    /// Exchange a platform login code for a token and user record
    async fn wx_login(&self, code: &str) -> Result<LoginResult, Error>;
    /// Fetch the authenticated user's record
    async fn get_current_user(&self) -> Result<User, Error>;
    /// Update the authenticated user's record
    async fn update_current_user(&self, patch: &UserPatch) -> Result<User, Error>;
}

#[async_trait]
impl LeagueConnector for ApiClient {
    async fn list_matches(&self, params: &MatchListParams) -> Result<Page<Match>, Error> {
        self.get_query("/matches", params).await
    }

    async fn get_match(&self, match_id: &str) -> Result<Match, Error> {
        self.get(&format!("/matches/{match_id}")).await
    }

    async fn list_teams(&self, params: &TeamListParams) -> Result<Page<Team>, Error> {
        self.get_query("/teams", params).await
    }

    async fn get_team(&self, team_id: &str) -> Result<Team, Error> {
        self.get(&format!("/teams/{team_id}")).await
    }

    async fn create_team(&self, draft: &TeamDraft) -> Result<Team, Error> {
        self.post("/teams", draft).await
    }

    async fn wx_login(&self, code: &str) -> Result<LoginResult, Error> {
        let request = WxLoginRequest {
            code: code.to_string(),
        };
        self.post("/auth/wx-login", &request).await
    }

    async fn get_current_user(&self) -> Result<User, Error> {
        self.get("/users/me").await
    }

    async fn update_current_user(&self, patch: &UserPatch) -> Result<User, Error> {
        self.put("/users/me", patch).await
    }
}
