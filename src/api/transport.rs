//! HTTP transport for backend calls.

use crate::{
    config::settings::ApiSettings,
    errors::{Error, Result},
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, warn};

/// Minimal JSON-over-HTTP surface used by [`super::SalonApi`].
///
/// Paths are relative to the backend root (e.g. `api/clients/`).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET and decode the JSON body
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T>;
    /// POST a JSON body and decode the JSON answer
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T>;
    /// PUT a JSON body and decode the JSON answer
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T>;
    /// PATCH a JSON body and decode the JSON answer
    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T>;
    /// DELETE, ignoring any response body
    async fn delete(&self, path: &str) -> Result<()>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    /// Builds a transport from the `[api]` settings.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        })
    }

    /// Backend root URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "Sending backend request");
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %url, "Backend request failed");
        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found("backend resource", url));
        }
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
        let response = Self::check_status(request.send().await?).await?;
        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> Result<T> {
        Self::send(self.request(Method::GET, path)).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::send(self.request(Method::POST, path).json(body)).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::send(self.request(Method::PUT, path).json(body)).await
    }

    async fn patch<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::send(self.request(Method::PATCH, path).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        Self::check_status(self.request(Method::DELETE, path).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn settings(base_url: &str) -> ApiSettings {
        ApiSettings {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            token: None,
        }
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = ReqwestTransport::new(&settings("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(transport.base_url(), "http://127.0.0.1:8000");
        assert_eq!(
            transport.url("/api/clients/"),
            "http://127.0.0.1:8000/api/clients/"
        );
        assert_eq!(
            transport.url("api/business/3/"),
            "http://127.0.0.1:8000/api/business/3/"
        );
    }
}
