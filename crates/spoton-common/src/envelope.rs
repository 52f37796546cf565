//! Response envelope
//!
//! Every endpoint wraps its payload in `{code, data, message}`. A call has
//! succeeded only when the transport status is 200 **and** `code == 0`;
//! whatever `data` holds is irrelevant on any other combination.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Fixed notice text used when a failure envelope carries no message
pub const FALLBACK_FAILURE_MESSAGE: &str = "request failed";

/// Uniform `{code, data, message}` wrapper returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application status code, `0` on success
    pub code: i64,
    /// Payload, present on success
    pub data: Option<T>,
    /// Human readable description, typically empty on success
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    /// Whether the application-level code signals success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// The envelope message, or the fixed fallback when empty
    pub fn failure_message(&self) -> String {
        if self.message.is_empty() {
            FALLBACK_FAILURE_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }

    /// Unwrap the envelope into its payload
    ///
    /// Returns [`Error::Api`] when the code is non-zero, or when a success
    /// envelope is missing its payload.
    pub fn into_data(self) -> Result<T, Error> {
        if !self.is_success() {
            return Err(Error::Api {
                code: self.code,
                message: self.failure_message(),
            });
        }
        self.data.ok_or(Error::Api {
            code: 0,
            message: FALLBACK_FAILURE_MESSAGE.to_string(),
        })
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Envelope from a raw JSON body
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_into_data() {
        let envelope: Envelope<Vec<u32>> =
            Envelope::from_json(r#"{"code": 0, "data": [1, 2, 3], "message": ""}"#)
                .expect("valid envelope");
        assert!(envelope.is_success());
        assert_eq!(envelope.into_data().expect("payload"), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_envelope_carries_message() {
        let envelope: Envelope<()> =
            Envelope::from_json(r#"{"code": 4001, "data": null, "message": "no such team"}"#)
                .expect("valid envelope");
        let err = envelope.into_data().expect_err("non-zero code must fail");
        match err {
            Error::Api { code, message } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "no such team");
            }
            _ => panic!("Expected Error::Api"),
        }
    }

    #[test]
    fn test_failure_envelope_empty_message_falls_back() {
        let envelope: Envelope<()> =
            Envelope::from_json(r#"{"code": 1}"#).expect("message and data are optional");
        assert_eq!(envelope.failure_message(), FALLBACK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_success_envelope_without_payload_is_failure() {
        let envelope: Envelope<String> =
            Envelope::from_json(r#"{"code": 0, "message": ""}"#).expect("valid envelope");
        let err = envelope.into_data().expect_err("missing data must fail");
        assert!(matches!(err, Error::Api { code: 0, .. }));
    }
}
