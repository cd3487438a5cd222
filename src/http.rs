//! HTTP client construction and text fetching.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::stream::read_to_text;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Programmatic fetch configuration.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum time for the whole request, connection included.
    pub read_timeout: Duration,
    /// `User-Agent` header sent with each request; `None` leaves the
    /// client's default in place.
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            user_agent: Some(format!("jsonfetch/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

/// Build an HTTP client with `options` applied.
pub fn client_for(options: &FetchOptions) -> Result<Client, FetchError> {
    let mut builder = ClientBuilder::new()
        .connect_timeout(options.connect_timeout)
        .timeout(options.read_timeout);
    if let Some(agent) = &options.user_agent {
        builder = builder.user_agent(agent.as_str());
    }
    Ok(builder.build()?)
}

/// Fetch `url` with the default options and return its body as text with
/// line separators stripped.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    fetch_text_with(&FetchOptions::default(), url).await
}

/// Fetch `url` with explicit options.
pub async fn fetch_text_with(options: &FetchOptions, url: &str) -> Result<String, FetchError> {
    let client = client_for(options)?;
    fetch_text_with_client(&client, url).await
}

/// Fetch `url` reusing a caller-supplied client.
///
/// The URL is validated before any network I/O. A non-success HTTP status
/// is reported as a transport failure, like a refused connection or an
/// expired timeout. The body is drained line by line, so the returned text
/// carries no line separators.
pub async fn fetch_text_with_client(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_owned(),
        source,
    })?;

    debug!(url, "fetching url");
    let response = client.get(parsed).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    let text = read_to_text(body.as_ref())
        .await
        .map_err(|source| FetchError::Read {
            url: url.to_owned(),
            source,
        })?;
    debug!(url, bytes = body.len(), "fetched url body");

    Ok(text)
}
