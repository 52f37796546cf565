//! HTTP client and session handling for the Spot On league API
//!
//! The client attaches the persisted bearer token to every call, unwraps the
//! uniform `{code, data, message}` envelope, and surfaces the three failure
//! kinds (authentication expired, application error, transport error) as
//! structured [`Error`](spoton_common::Error) variants. User-visible side
//! effects (toasts, login redirects) are delegated to an injectable
//! [`SessionEvents`] observer.
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use spoton_client::{ApiClient, LeagueConnector};
//! use spoton_common::{BaseUrl, MatchListParams};
//!
//! # async fn example() -> Result<(), spoton_common::Error> {
//! let client = ApiClient::builder()
//!     .base_url(BaseUrl::from_str("https://api.example.com")?)
//!     .build()?;
//!
//! let login = client.login("wx-code").await?;
//! println!("logged in as {}", login.user.nickname);
//!
//! let page = client
//!     .list_matches(&MatchListParams {
//!         page: 1,
//!         page_size: 20,
//!         status: None,
//!     })
//!     .await?;
//! println!("{} matches", page.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod connector;
pub mod events;
pub mod session;
pub mod token_storage;

pub use client::{ApiClient, ApiClientBuilder, BASE_URL_ENV, NETWORK_FAILURE_NOTICE};
pub use connector::LeagueConnector;
pub use events::{NoopEvents, SessionEvents};
pub use session::{AppState, SessionStore};
pub use token_storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage, TOKEN_FILE_NAME};
