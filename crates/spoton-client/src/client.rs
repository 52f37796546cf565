//! HTTP request wrapper
//!
//! One generic request path carries every endpoint: read the token at
//! dispatch time, join the base URL, attach default headers, send, and unwrap
//! the `{code, data, message}` envelope into a typed payload or an
//! [`Error`]. The 401 branch is the only one that mutates session state.

use std::str::FromStr;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use spoton_common::{BaseUrl, Envelope, Error, LoginResult};
use tracing::instrument;

use crate::connector::LeagueConnector;
use crate::events::{NoopEvents, SessionEvents};
use crate::session::SessionStore;
use crate::token_storage::{MemoryTokenStorage, TokenStorage};

/// Environment variable the base URL is read from by [`ApiClientBuilder::from_env`]
pub const BASE_URL_ENV: &str = "SPOTON_API_BASE_URL";

/// Fixed notice text for network-level failures
pub const NETWORK_FAILURE_NOTICE: &str = "network error";

/// Typed client for the Spot On API
///
/// Cheaply clonable; clones share the session store and event observer.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: BaseUrl,
    session: SessionStore,
    events: Arc<dyn SessionEvents>,
}

impl ApiClient {
    /// Create a client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The session store backing this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The configured base URL
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Issue a request and unwrap the response envelope
    ///
    /// For GET the payload is sent as a query string, otherwise as a JSON
    /// body. `headers` override the defaults (`Content-Type`,
    /// `Authorization`) on key collision.
    ///
    /// # Errors
    ///
    /// [`Error::AuthExpired`] on 401 (after the persisted token has been
    /// deleted), [`Error::Api`] on any other non-success combination,
    /// [`Error::Transport`] on network-level failure.
    #[instrument(skip(self, payload, headers))]
    pub async fn request<P, R>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&P>,
        headers: &[(&str, &str)],
    ) -> Result<R, Error>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;

        let mut request = self.http.request(method.clone(), url);
        if let Some(payload) = payload {
            request = if method == Method::GET {
                request.query(payload)
            } else {
                request.json(payload)
            };
        }
        request = request.headers(self.compose_headers(headers)?);

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("transport failure on {path}: {err}");
                self.events.on_failure_notice(NETWORK_FAILURE_NOTICE);
                return Err(Error::Transport(err.to_string()));
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(self.expire_session());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("could not read response body: {err}");
                self.events.on_failure_notice(NETWORK_FAILURE_NOTICE);
                return Err(Error::Transport(err.to_string()));
            }
        };

        let envelope: Envelope<R> = match Envelope::from_json(&body) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!("undecodable response envelope: {err}");
                Envelope {
                    code: -1,
                    data: None,
                    message: String::new(),
                }
            }
        };

        if status == StatusCode::OK && envelope.is_success() {
            return match envelope.into_data() {
                Ok(data) => Ok(data),
                // a success envelope missing its payload is an application
                // failure like any other
                Err(err) => {
                    if let Error::Api { message, .. } = &err {
                        self.events.on_failure_notice(message);
                    }
                    Err(err)
                }
            };
        }

        let message = envelope.failure_message();
        tracing::debug!(code = envelope.code, status = %status, "api failure: {message}");
        self.events.on_failure_notice(&message);
        Err(Error::Api {
            code: envelope.code,
            message,
        })
    }

    /// GET without a payload
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        self.request::<(), R>(Method::GET, path, None, &[]).await
    }

    /// GET with a query-string payload
    pub async fn get_query<P, R>(&self, path: &str, query: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.request(Method::GET, path, Some(query), &[]).await
    }

    /// POST with a JSON body
    pub async fn post<P, R>(&self, path: &str, body: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    /// PUT with a JSON body
    pub async fn put<P, R>(&self, path: &str, body: &P) -> Result<R, Error>
    where
        P: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    /// DELETE without a payload
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        self.request::<(), R>(Method::DELETE, path, None, &[]).await
    }

    /// Full login handshake: exchange the platform code, persist the token,
    /// cache the user profile
    #[instrument(skip_all)]
    pub async fn login(&self, code: &str) -> Result<LoginResult, Error> {
        let result = self.wx_login(code).await?;
        self.session.set_token(&result.token)?;
        self.session.set_user(result.user.clone());
        Ok(result)
    }

    /// Drop the session and delete the persisted token
    pub fn logout(&self) -> Result<(), Error> {
        self.session.clear()
    }

    /// Default headers with caller overrides applied on top
    fn compose_headers(&self, extra: &[(&str, &str)]) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Custom(format!("invalid token header: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in extra {
            let name = HeaderName::from_str(name)
                .map_err(|e| Error::Custom(format!("invalid header name `{name}`: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Custom(format!("invalid header value: {e}")))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// 401 handling: delete the persisted token, notify the host once,
    /// reject with [`Error::AuthExpired`]
    fn expire_session(&self) -> Error {
        if let Err(err) = self.session.clear() {
            tracing::warn!("could not clear expired session: {err}");
        }
        self.events.on_session_expired();
        Error::AuthExpired
    }
}

/// Builder for [`ApiClient`]
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<BaseUrl>,
    storage: Option<Arc<dyn TokenStorage>>,
    events: Option<Arc<dyn SessionEvents>>,
    http: Option<reqwest::Client>,
}

impl ApiClientBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Read the base URL from the `SPOTON_API_BASE_URL` environment variable
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset or does not parse as a URL.
    pub fn from_env(self) -> Result<Self, Error> {
        let raw = std::env::var(BASE_URL_ENV)
            .map_err(|_| Error::Custom(format!("{BASE_URL_ENV} is not set")))?;
        Ok(self.base_url(BaseUrl::from_str(&raw)?))
    }

    /// Set the token persistence backend (defaults to in-memory)
    pub fn token_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Register the host's session event observer (defaults to no-op)
    pub fn events(mut self, events: Arc<dyn SessionEvents>) -> Self {
        self.events = Some(events);
        self
    }

    /// Use a preconfigured `reqwest::Client`
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client, initializing the session from persisted storage
    ///
    /// # Errors
    ///
    /// Fails when no base URL was configured.
    pub fn build(self) -> Result<ApiClient, Error> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Custom("base URL is required".to_string()))?;
        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryTokenStorage::new()));
        Ok(ApiClient {
            http: self.http.unwrap_or_default(),
            base_url,
            session: SessionStore::new(storage),
            events: self.events.unwrap_or_else(|| Arc::new(NoopEvents)),
        })
    }
}
