//! Base URL

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Normalized API base URL
///
/// Stored without a trailing slash so that joining a `/relative` path is a
/// plain concatenation, matching how callers write endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseUrl(String);

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BaseUrl::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl BaseUrl {
    /// Join a relative path onto the base URL
    ///
    /// The path may be given with or without a leading slash.
    pub fn join(&self, path: &str) -> Result<Url, Error> {
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", self.0, path))?)
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_end_matches('/');
        // Validate eagerly so a bad base URL fails at configuration time,
        // not on the first request.
        Url::parse(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let base = BaseUrl::from_str("https://api.example.com/").expect("valid url");
        assert_eq!(base.to_string(), "https://api.example.com");
    }

    #[test]
    fn test_join_relative_path() {
        let base = BaseUrl::from_str("https://api.example.com/v1").expect("valid url");
        let url = base.join("/matches/m1").expect("join");
        assert_eq!(url.as_str(), "https://api.example.com/v1/matches/m1");
    }

    #[test]
    fn test_join_without_leading_slash() {
        let base = BaseUrl::from_str("https://api.example.com").expect("valid url");
        let url = base.join("teams").expect("join");
        assert_eq!(url.as_str(), "https://api.example.com/teams");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(BaseUrl::from_str("not a url").is_err());
    }
}
