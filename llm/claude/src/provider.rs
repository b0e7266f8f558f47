//! The adapter implementation.

use crate::{Claude, Request, Response};
use llm::{
    Adapter, CallError, Completion, ProviderConfig, Usage,
    reqwest::{
        Method,
        header::{self, HeaderMap},
    },
};

impl Adapter for Claude {
    async fn call(
        &self,
        prompt: &str,
        config: &ProviderConfig,
    ) -> Result<Completion, CallError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(header::ACCEPT, "application/json".parse()?);
        headers.insert("x-api-key", config.api_key.parse()?);
        headers.insert("anthropic-version", crate::API_VERSION.parse()?);

        let body = Request::prompt(prompt, config);
        tracing::debug!(
            "request: {}",
            serde_json::to_string(&body).unwrap_or_default()
        );

        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response: {text}");

        if !status.is_success() {
            return Err(CallError::from_status(status, &text));
        }

        let parsed: Response =
            serde_json::from_str(&text).map_err(|e| CallError::Malformed(e.to_string()))?;
        let content = parsed
            .text()
            .ok_or_else(|| CallError::Malformed("no text block in response".into()))?
            .to_owned();

        Ok(Completion {
            text: content,
            model: parsed.model,
            usage: parsed.usage.map(Usage::from),
        })
    }
}
