//! Domain records
//!
//! Flat JSON shapes as the server defines them. The client transports these
//! without interpreting their contents.

use serde::{Deserialize, Serialize};

pub mod matches;
pub mod team;
pub mod user;

/// One page of a listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,
    /// Total number of records across all pages
    pub total: u64,
}
