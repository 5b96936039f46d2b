//! HTTP request description handed to the transport.
//!
//! # Design
//! The core never touches the network. `ApiClient` turns a set of mail
//! options into an `HttpRequest` value and the caller executes it with
//! whatever HTTP stack it already has. All fields are owned so a request can
//! be queued or moved across threads without lifetime concerns.

use serde::{Deserialize, Serialize};

/// Content type of a form-encoded POST body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The two request methods the mail API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `ApiClient::build_request`. For `Post` the populated fields are
/// in `body`, form-encoded; for `Get` they are already part of `path` as a
/// query string and `body` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}
