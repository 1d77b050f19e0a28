use cineview_model::ApiEnvelope;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// HTTP client for the catalog API.
///
/// Session authentication rides an httpOnly cookie, so the client is built
/// with a cookie store and every request is credentialed automatically.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .cookie_store(true)
            .build()?;

        debug!(
            "[ApiClient] created with base URL: {}",
            config.base_url
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Join a path onto the configured base URL.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decode a response, mapping 401 and non-success statuses into the
    /// error taxonomy before touching the body.
    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            // Error bodies still use the envelope; keep the server's
            // message for inline display when it provides one.
            let message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            warn!("[ApiClient] {status}: {message}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET an enveloped payload.
    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ApiResult<T> {
        let response = self.client.get(self.build_url(path)).send().await?;
        let envelope: ApiEnvelope<T> = self.decode(response).await?;
        envelope.into_data().map_err(ApiError::Rejected)
    }

    /// GET an enveloped payload where `data: null` means "none".
    pub(crate) async fn get_optional_data<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ApiResult<Option<T>> {
        let response = self.client.get(self.build_url(path)).send().await?;
        let envelope: ApiEnvelope<T> = self.decode(response).await?;
        envelope.into_optional_data().map_err(ApiError::Rejected)
    }

    /// GET an enveloped payload with query parameters.
    pub(crate) async fn get_data_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<T> {
        let response = self
            .client
            .get(self.build_url(path))
            .query(query)
            .send()
            .await?;
        let envelope: ApiEnvelope<T> = self.decode(response).await?;
        envelope.into_data().map_err(ApiError::Rejected)
    }

    /// POST a JSON body, returning the enveloped payload.
    pub(crate) async fn post_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await?;
        let envelope: ApiEnvelope<T> = self.decode(response).await?;
        envelope.into_data().map_err(ApiError::Rejected)
    }

    /// POST whose response carries no payload worth keeping.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let response = self
            .client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> =
            self.decode(response).await?;
        Self::ensure_ok(envelope)
    }

    /// DELETE whose response carries no payload worth keeping.
    pub(crate) async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        let response = self.client.delete(self.build_url(path)).send().await?;
        let envelope: ApiEnvelope<serde_json::Value> =
            self.decode(response).await?;
        Self::ensure_ok(envelope)
    }

    /// POST a JSON body, returning the enveloped payload plus the
    /// paginated `count` field.
    pub(crate) async fn post_page<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<(T, u64)> {
        let response = self
            .client
            .post(self.build_url(path))
            .json(body)
            .send()
            .await?;
        let envelope: ApiEnvelope<T> = self.decode(response).await?;
        let count = envelope.count.unwrap_or(0);
        let data = envelope.into_data().map_err(ApiError::Rejected)?;
        Ok((data, count))
    }

    fn ensure_ok(envelope: ApiEnvelope<serde_json::Value>) -> ApiResult<()> {
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ApiClient {
        ApiClient::new(&ClientConfig::default()).unwrap()
    }

    #[test]
    fn build_url_joins_relative_paths() {
        let client = test_client();
        assert_eq!(
            client.build_url("/titles/trending"),
            "http://localhost:8080/api/titles/trending"
        );
        assert_eq!(
            client.build_url("titles/trending"),
            "http://localhost:8080/api/titles/trending"
        );
    }

    #[test]
    fn build_url_passes_absolute_urls_through() {
        let client = test_client();
        assert_eq!(
            client.build_url("https://elsewhere.example/x"),
            "https://elsewhere.example/x"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let config = ClientConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            ..ClientConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
