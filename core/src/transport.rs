//! Blocking `HttpClient` on top of ureq.
//!
//! # Design
//! ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
//! back as data; only failures to get a response at all map to
//! `ApiError::Transport`. Relative request paths are joined onto the
//! configured base URL.

use ureq::Agent;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// `HttpClient` that talks to a real server.
#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: Agent,
    base_url: String,
    authorization: Option<String>,
}

impl UreqClient {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization: config.authorization(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn prepare<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        request: &HttpRequest,
    ) -> ureq::RequestBuilder<B> {
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(authorization) = &self.authorization {
            builder = builder.header("authorization", authorization.as_str());
        }
        builder
    }
}

impl HttpClient for UreqClient {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url(&request.path);
        let body = request.body.as_deref().unwrap_or_default();

        let result = match request.method {
            HttpMethod::Get => self.prepare(self.agent.get(&url), &request).call(),
            HttpMethod::Delete => self.prepare(self.agent.delete(&url), &request).call(),
            HttpMethod::Post => self
                .prepare(self.agent.post(&url), &request)
                .send(body.as_bytes()),
            HttpMethod::Put => self
                .prepare(self.agent.put(&url), &request)
                .send(body.as_bytes()),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
