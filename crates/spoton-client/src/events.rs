//! Session event hooks
//!
//! The original mini-program client reacted to failures inline: a toast for
//! application errors and a forced jump to the login screen on 401. Here those
//! side effects are an injectable observer so the hosting application decides
//! how to surface them.

use std::fmt::Debug;

/// Observer for user-visible failure side effects
///
/// Registered on [`crate::ApiClientBuilder`]. Every method has a no-op
/// default, so hosts implement only what they care about.
pub trait SessionEvents: Debug + Send + Sync {
    /// The server rejected the session token (HTTP 401)
    ///
    /// Fired exactly once per rejected request, after the persisted token has
    /// been deleted. Hosts typically navigate to their login screen here.
    fn on_session_expired(&self) {}

    /// A request failed in a user-visible way
    ///
    /// `message` is the envelope message, the fixed fallback text, or the
    /// fixed network-failure text. Hosts typically show a transient toast.
    fn on_failure_notice(&self, message: &str) {
        let _ = message;
    }
}

/// Default observer that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEvents;

impl SessionEvents for NoopEvents {}
