//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! A `Transport` returns every response it receives as data, whatever the
//! status code. Status interpretation belongs to `UserClient::parse_*`, so
//! the only errors a transport reports are failures to get a response at all.

use tracing::trace;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Performs the HTTP round-trip for a request built by `UserClient`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// The agent owns the connection pool; clones share it.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        trace!(method = request.method.as_str(), url = %request.url, "executing request");

        let result = match request.method {
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(map_ureq_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(map_ureq_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Malformed request parts are programming errors; everything else means
/// no usable response came back. Status codes never show up here since the
/// agent returns them as data.
fn map_ureq_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Http(_) | ureq::Error::BadUri(_) => ApiError::unexpected(err),
        ureq::Error::Timeout(_) => ApiError::Transport(Box::new(err)),
        other => ApiError::Transport(Box::new(other)),
    }
}
