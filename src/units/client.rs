//! HTTP Client
//!
//! Blocking REST client for the unit collection endpoints.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;

use super::{ApiError, ApiResult, Unit, UnitFields, UnitsApi};

pub struct HttpUnitsApi {
    client: Client,
    collection_url: Url,
}

impl HttpUnitsApi {
    /// `timeout` of `None` lets requests wait until the network layer gives up.
    pub fn new(base_url: &str, units_path: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let raw = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            units_path.trim_matches('/')
        );
        let collection_url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if collection_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl { url: raw, reason: "not a hierarchical URL".into() });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport { url: raw, source })?;

        Ok(Self { client, collection_url })
    }

    fn item_url(&self, id: &str) -> Url {
        let mut url = self.collection_url.clone();
        // Hierarchical URLs were checked in `new`, so segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    fn send(&self, method: &'static str, url: &Url, request: RequestBuilder) -> ApiResult<Response> {
        tracing::debug!(method, url = %url, "sending request");
        let response = request.send().map_err(|source| classify(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

fn classify(url: &Url, source: reqwest::Error) -> ApiError {
    if source.is_connect() {
        ApiError::Unavailable(url.to_string())
    } else {
        ApiError::Transport { url: url.to_string(), source }
    }
}

impl UnitsApi for HttpUnitsApi {
    fn list(&self) -> ApiResult<Vec<Unit>> {
        let url = &self.collection_url;
        let response = self.send("GET", url, self.client.get(url.clone()))?;
        response
            .json::<Vec<Unit>>()
            .map_err(|source| ApiError::Decode { url: url.to_string(), source })
    }

    fn create(&self, fields: &UnitFields) -> ApiResult<()> {
        let url = &self.collection_url;
        self.send("POST", url, self.client.post(url.clone()).json(fields))?;
        Ok(())
    }

    fn update(&self, id: &str, fields: &UnitFields) -> ApiResult<()> {
        let url = self.item_url(id);
        self.send("PUT", &url, self.client.put(url.clone()).json(fields))?;
        Ok(())
    }

    fn delete(&self, id: &str) -> ApiResult<()> {
        let url = self.item_url(id);
        self.send("DELETE", &url, self.client.delete(url.clone()))?;
        Ok(())
    }

    fn location(&self) -> &str {
        self.collection_url.as_str()
    }
}
