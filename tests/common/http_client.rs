use reqwest::StatusCode;
use serde::Deserialize;

use factlens::gateway::AnalysisResponse;

#[derive(Debug, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadyComponents {
    pub http: String,
    pub analyzer: String,
    pub classifier_mode: String,
    pub lexicon_version: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadyBody {
    pub status: String,
    pub components: ReadyComponents,
}

impl ReadyBody {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

pub struct TestClient {
    base_url: String,
    client: reqwest::Client,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::builder()
                .no_proxy()
                .build()
                .expect("client build failed"),
        }
    }

    pub async fn health(&self) -> reqwest::Result<HealthBody> {
        self.client
            .get(format!("{}/healthz", self.base_url))
            .send()
            .await?
            .json()
            .await
    }

    pub async fn ready(&self) -> reqwest::Result<(ReadyBody, StatusCode)> {
        let response = self
            .client
            .get(format!("{}/ready", self.base_url))
            .send()
            .await?;
        let status = response.status();
        Ok((response.json().await?, status))
    }

    pub async fn analyze(
        &self,
        body: serde_json::Value,
    ) -> reqwest::Result<(serde_json::Value, StatusCode)> {
        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        Ok((response.json().await?, status))
    }

    pub async fn analyze_ok(&self, body: serde_json::Value) -> AnalysisResponse {
        let (json, status) = self.analyze(body).await.expect("request failed");
        assert_eq!(status, StatusCode::OK, "unexpected body: {json}");
        serde_json::from_value(json).expect("invalid analysis response")
    }

    pub async fn preview(
        &self,
        url: &str,
    ) -> reqwest::Result<(serde_json::Value, StatusCode)> {
        let response = self
            .client
            .get(format!("{}/api/preview-url", self.base_url))
            .query(&[("url", url)])
            .send()
            .await?;
        let status = response.status();
        Ok((response.json().await?, status))
    }
}
