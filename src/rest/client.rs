use std::time::Duration;

use reqwest::header::LOCATION;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::rest::error::{backend_message, RestError};

/// Path prefix of every resource, below the configured base URL.
const REST_BASE_PATH: [&str; 2] = ["shop", "rest"];

/// Shared HTTP plumbing for the resource clients.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ShopClient {
    client: Client,
    base_url: Url,
}

impl ShopClient {
    pub fn new(config: &BackendConfig) -> Result<Self, RestError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base() && matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| RestError::InvalidBaseUrl(config.base_url.clone()))?;

        // Connection setup only. Requests themselves are never timed out.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(RestError::ClientBuild)?;

        Ok(Self { client, base_url })
    }

    /// `{base}/shop/rest/{segments...}` with each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(REST_BASE_PATH).extend(segments);
        }
        url
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, RestError> {
        let response = self.send::<()>(Method::GET, url, None).await?;
        decode_json(url, response).await
    }

    /// Send one request and turn non-2xx answers into [`RestError::Status`].
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &Url,
        body: Option<&B>,
    ) -> Result<Response, RestError> {
        let request_id = Uuid::new_v4();
        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(
            %request_id,
            %method,
            path = url.path(),
            query = url.query().unwrap_or(""),
            "Sending request"
        );

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(%request_id, %method, %url, error = %source, "Request failed");
            RestError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = backend_message(status, &body);
            tracing::warn!(
                %request_id,
                %method,
                path = url.path(),
                status = status.as_u16(),
                %message,
                "Backend returned error"
            );
            return Err(RestError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(%request_id, status = status.as_u16(), "Response received");
        Ok(response)
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    url: &Url,
    response: Response,
) -> Result<T, RestError> {
    decode_optional(url, response)
        .await?
        .ok_or_else(|| RestError::Decode {
            url: url.to_string(),
            message: "empty response body".to_string(),
        })
}

/// Like [`decode_json`], but an empty body (201/204 without content) is `None`.
pub(crate) async fn decode_optional<T: DeserializeOwned>(
    url: &Url,
    response: Response,
) -> Result<Option<T>, RestError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| RestError::Transport {
            url: url.to_string(),
            source,
        })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| RestError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
}

/// Numeric id from the last path segment of a `Location` header.
pub(crate) fn location_id(response: &Response) -> Option<u64> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    parse_location_id(location)
}

fn parse_location_id(location: &str) -> Option<u64> {
    let path = location.split(['?', '#']).next()?;
    path.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}
