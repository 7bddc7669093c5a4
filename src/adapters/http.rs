use crate::domain::error::ContactError;
use crate::domain::model::{FormState, RawResponse};
use crate::domain::ports::ContactTransport;
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ContactTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, form: &FormState) -> Result<RawResponse, ContactError> {
        tracing::debug!("POST {}", url);

        // `.json()` also sets `Content-Type: application/json`
        let response = self.client.post(url).json(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!("Received {} bytes with status {}", body.len(), status);
        Ok(RawResponse::new(status, body.to_vec()))
    }
}
