//! Reqwest-backed ViaCEP address lookup.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP error mapping, and JSON decoding into an [`AddressFragment`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::ViaCepResponseDto;
use crate::domain::ports::{AddressFragment, AddressLookup, AddressLookupError};

/// Public ViaCEP endpoint.
pub const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br";
const DEFAULT_USER_AGENT: &str = "socialbuddy-backend/0.1";

/// Address lookup that performs one `GET {base}/ws/{zip}/json` per call.
pub struct ViaCepAddressLookup {
    client: Client,
    base_url: Url,
}

impl ViaCepAddressLookup {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn lookup_url(&self, zip_code: &str) -> Result<Url, AddressLookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AddressLookupError::transport(format!(
                    "base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["ws", zip_code, "json"]);
        Ok(url)
    }
}

#[async_trait]
impl AddressLookup for ViaCepAddressLookup {
    async fn lookup(&self, zip_code: &str) -> Result<AddressFragment, AddressLookupError> {
        let url = self.lookup_url(zip_code)?;
        debug!(%url, "querying postal directory");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_fragment(zip_code, body.as_ref())
    }
}

fn parse_fragment(zip_code: &str, body: &[u8]) -> Result<AddressFragment, AddressLookupError> {
    let decoded: ViaCepResponseDto = serde_json::from_slice(body).map_err(|error| {
        AddressLookupError::decode(format!("invalid ViaCEP JSON payload: {error}"))
    })?;
    if decoded.is_unregistered() {
        return Err(AddressLookupError::not_found(zip_code));
    }
    Ok(decoded.into_fragment())
}

fn map_transport_error(error: reqwest::Error) -> AddressLookupError {
    if error.is_timeout() {
        AddressLookupError::timeout(error.to_string())
    } else {
        AddressLookupError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AddressLookupError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), body_preview)
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            AddressLookupError::timeout(message)
        }
        _ => AddressLookupError::status(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
