//! Echo server standing in for the mail API in tests.
//!
//! Accepts a form-encoded POST or a GET with a query string at any path and
//! answers with the decoded parameters, in the order they arrived.

use axum::{
    http::{Method, StatusCode, Uri},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, warn};

/// What the server received for one request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub end_point: String,
    pub params: Vec<(String, String)>,
}

pub fn app() -> Router {
    Router::new().fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, body: String) -> Result<Json<Echo>, StatusCode> {
    let encoded = match method {
        Method::GET => uri.query().unwrap_or_default(),
        Method::POST => body.as_str(),
        _ => return Err(StatusCode::METHOD_NOT_ALLOWED),
    };
    let params: Vec<(String, String)> = serde_urlencoded::from_str(encoded).map_err(|e| {
        warn!(error = %e, "undecodable parameters");
        StatusCode::BAD_REQUEST
    })?;
    debug!(%method, path = uri.path(), params = params.len(), "echoing request");
    Ok(Json(Echo {
        method: method.to_string(),
        end_point: uri.path().to_string(),
        params,
    }))
}
