use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use url::Url;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::models::{DelOptions, Envelope, GetOptions, TokenResponse};
use crate::routes;
use crate::token;

/// Shareable store client for use across async tasks
///
/// Every operation is a single HTTP request against
/// `<host>/<token>/<base path>/<call path>`. Nothing is cached or retried,
/// and clones share one HTTP client.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    http: reqwest::Client,
    host: String,
    token: String,
    base_path: String,
}

impl fmt::Debug for JsonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStore")
            .field("host", &self.inner.host)
            .field("token", &token::redact(&self.inner.token))
            .field("base_path", &self.inner.base_path)
            .finish()
    }
}

impl JsonStore {
    /// Create a client for an existing token
    ///
    /// The token is validated before anything else happens, so a bad token
    /// never results in a request.
    ///
    /// # Errors
    /// `MissingToken` when the config has no token, `TokenLength` or
    /// `TokenFormat` when it is malformed, `InvalidUrl` for a bad host,
    /// `InvalidPath` for a base path with `.` or `..` segments
    pub fn new(config: Config) -> Result<Self> {
        let token = config.token.clone().ok_or(StoreError::MissingToken)?;
        token::validate(&token)?;
        let http = http_client(&config)?;
        Ok(Self::assemble(http, config, token))
    }

    /// Create a client, requesting a fresh token from the store if none is configured
    ///
    /// With a token this is the same as [`JsonStore::new`] and performs no I/O.
    /// Without one it calls the token endpoint and only returns once the
    /// minted token is in hand.
    ///
    /// # Errors
    /// Everything [`JsonStore::new`] returns, plus `TokenAcquisition` wrapping
    /// the failure of the token request
    pub async fn connect(config: Config) -> Result<Self> {
        if config.token.is_some() {
            return Self::new(config);
        }

        let http = http_client(&config)?;
        let token = request_token(&http, &config.host)
            .await
            .map_err(|e| StoreError::TokenAcquisition(Box::new(e)))?;

        tracing::info!("Acquired new store token: {}", token::redact(&token));
        Ok(Self::assemble(http, config, token))
    }

    fn assemble(http: reqwest::Client, config: Config, token: String) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                http,
                host: config.host,
                token,
                base_path: config.path,
            }),
        }
    }

    pub fn token(&self) -> &str {
        &self.inner.token
    }

    pub fn base_path(&self) -> &str {
        &self.inner.base_path
    }

    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// Read the value stored at `options.path`
    ///
    /// # Returns
    /// * `Ok(value)` - the envelope's `result`, or `Null` when it has none
    /// * `Err(NonOk)` - the store answered `ok: false`
    ///
    /// # Errors
    /// Network and body-decoding failures are returned unchanged
    pub async fn get(&self, options: GetOptions) -> Result<JsonValue> {
        let url = self.url(
            &options.path,
            &[
                (routes::ORDER_KEY, options.order.as_deref()),
                (routes::FILTER_VALUE, options.filter.as_deref()),
                (routes::VALUE_TYPE, options.value_type.as_deref()),
            ],
        )?;

        let request = self.inner.http.get(url);
        let envelope = self.dispatch(Method::GET, &options.path, request).await?;
        Ok(envelope.result.unwrap_or(JsonValue::Null))
    }

    /// Read the value at `options.path` and decode it into `T`
    pub async fn get_as<T: DeserializeOwned>(&self, options: GetOptions) -> Result<T> {
        let value = self.get(options).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Create or overwrite the value at `path`
    pub async fn set<T: Serialize + ?Sized>(&self, data: &T, path: &str) -> Result<()> {
        self.write(Method::POST, data, path).await
    }

    /// Merge `data` into the value at `path`
    pub async fn chg<T: Serialize + ?Sized>(&self, data: &T, path: &str) -> Result<()> {
        self.write(Method::PUT, data, path).await
    }

    /// Delete the value at `options.path`
    pub async fn del(&self, options: DelOptions) -> Result<()> {
        let url = self.url(&options.path, &[])?;
        let request = self.inner.http.delete(url);
        self.dispatch(Method::DELETE, &options.path, request).await?;
        Ok(())
    }

    async fn write<T: Serialize + ?Sized>(&self, method: Method, data: &T, path: &str) -> Result<()> {
        let body = serde_json::to_vec(data)?;
        let url = self.url(path, &[])?;
        let request = self
            .inner
            .http
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.dispatch(method, path, request).await?;
        Ok(())
    }

    fn url(&self, path: &str, query: &[(&str, Option<&str>)]) -> Result<Url> {
        routes::build(
            &self.inner.host,
            &[self.inner.token.as_str(), self.inner.base_path.as_str(), path],
            query,
        )
    }

    /// Store-relative path for log output; keeps the token out of logs
    fn store_path(&self, path: &str) -> String {
        let joined = routes::join("", &[self.inner.base_path.as_str(), path]);
        if joined.is_empty() { "/".to_string() } else { joined }
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Envelope> {
        let store_path = self.store_path(path);
        tracing::debug!("{} {}", method, store_path);

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let envelope: Envelope = serde_json::from_slice(&body)?;

        if !envelope.ok {
            tracing::warn!(
                "{} {} rejected by store (HTTP {}): {}",
                method,
                store_path,
                status,
                String::from_utf8_lossy(&body)
            );
            return Err(StoreError::NonOk);
        }

        tracing::debug!("{} {} succeeded", method, store_path);
        Ok(envelope)
    }
}

fn http_client(config: &Config) -> Result<reqwest::Client> {
    Url::parse(&config.host)?;
    routes::check_path(&config.path)?;

    let mut builder = reqwest::Client::builder()
        .user_agent(format!("jsonstore-client/{}", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    #[cfg(test)]
    {
        // mock server is always local
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}

async fn request_token(http: &reqwest::Client, host: &str) -> Result<String> {
    let url = routes::build(host, &[routes::GET_TOKEN], &[])?;
    tracing::debug!("GET /{}", routes::GET_TOKEN);

    let body = http.get(url).send().await?.bytes().await?;
    let TokenResponse { token } = serde_json::from_slice(&body)?;
    token::validate(&token)?;
    Ok(token)
}
