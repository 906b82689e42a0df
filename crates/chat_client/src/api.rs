use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::{ApiError, ChatReply, ChatRequest, ClientError, FailureKind, StatusReport};

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URLs tried in order during discovery.
    pub candidates: Vec<String>,
    pub connect_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            candidates: vec![
                "http://localhost:5000".to_string(),
                "http://localhost:5001".to_string(),
            ],
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// The two REST exchanges the widget performs against a backend.
#[async_trait::async_trait]
pub trait ChatApi: Send + Sync {
    /// Liveness check used by discovery: any 2xx answer counts, the body is ignored.
    async fn ping(&self, base: &str) -> Result<(), ApiError> {
        self.status(base).await.map(|_| ())
    }

    async fn status(&self, base: &str) -> Result<StatusReport, ApiError>;
    async fn chat(&self, base: &str, message: &str) -> Result<ChatReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestChatApi {
    client: reqwest::Client,
}

impl ReqwestChatApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn get_status(&self, base: &str) -> Result<reqwest::Response, ApiError> {
        let url = endpoint_url(base, "api/status")?;
        self.client
            .get(url)
            .header(ACCEPT, JSON)
            .send()
            .await
            .map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl ChatApi for ReqwestChatApi {
    async fn ping(&self, base: &str) -> Result<(), ApiError> {
        let response = self.get_status(base).await?;
        check_success(&response)
    }

    async fn status(&self, base: &str) -> Result<StatusReport, ApiError> {
        let response = self.get_status(base).await?;
        read_json(response).await
    }

    async fn chat(&self, base: &str, message: &str) -> Result<ChatReply, ApiError> {
        let url = endpoint_url(base, "api/chat")?;
        let response = self
            .client
            .post(url)
            .header(ACCEPT, JSON)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(response).await
    }
}

fn endpoint_url(base: &str, path: &str) -> Result<reqwest::Url, ApiError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path);
    reqwest::Url::parse(&joined)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn check_success(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    check_success(&response)?;
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&body)
        .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        let a = endpoint_url("http://localhost:5000", "api/status").unwrap();
        let b = endpoint_url("http://localhost:5000/", "api/status").unwrap();
        assert_eq!(a.as_str(), "http://localhost:5000/api/status");
        assert_eq!(a, b);
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "api/chat").unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
