use crate::{
    error::ErrorResponse,
    models::{GameResult, GameStats, UpdateResponse},
};
use reqwest::{Client, Response, StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Thin client for the stats API, reporting games the way the web
/// front-end does.
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_stats(&self) -> Result<GameStats, ClientError> {
        let response = self.client.get(self.stats_url()).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn report_game(
        &self,
        result: &GameResult,
        score: Option<u64>,
    ) -> Result<GameStats, ClientError> {
        let mut payload = json!({ "result": result.as_tag() });
        if let Some(score) = score {
            payload["score"] = json!(score);
        }

        let response = self
            .client
            .post(self.stats_url())
            .json(&payload)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: UpdateResponse = response.json().await?;
        tracing::debug!("{}", body.message);
        Ok(body.stats)
    }

    fn stats_url(&self) -> String {
        format!("{}/api/stats", self.base_url)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        Err(ClientError::Api { status, message })
    }
}
