//! Turns mail options into request descriptions for the transport.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no state between calls.
//! `build_request` reads the endpoint, the method and the populated fields
//! of an option set and produces an `HttpRequest`. POST calls carry the
//! fields as a form-encoded body, GET calls as a query string. The caller
//! executes the request; credentials and response handling live with it.

use tracing::debug;

use crate::error::{OptionsError, Result};
use crate::http::{HttpMethod, HttpRequest, FORM_CONTENT_TYPE};
use crate::options::{MailOptions, OptionsSchema};

/// Stateless request builder for the mail API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_request<S: OptionsSchema>(&self, options: &MailOptions<S>) -> Result<HttpRequest> {
        let populated = options.populated();
        let encoded = serde_urlencoded::to_string(&populated)
            .map_err(|e| OptionsError::Serialization(e.to_string()))?;
        let path = format!(
            "{}/{}",
            self.base_url,
            options.end_point().trim_start_matches('/')
        );

        let request = match options.request_type() {
            HttpMethod::Post => HttpRequest {
                method: HttpMethod::Post,
                path,
                headers: vec![("content-type".to_string(), FORM_CONTENT_TYPE.to_string())],
                body: Some(encoded),
            },
            HttpMethod::Get => HttpRequest {
                method: HttpMethod::Get,
                path: if encoded.is_empty() {
                    path
                } else {
                    format!("{path}?{encoded}")
                },
                headers: Vec::new(),
                body: None,
            },
        };

        debug!(
            method = request.method.as_str(),
            path = %request.path,
            fields = populated.len(),
            "built mail api request"
        );
        Ok(request)
    }
}
