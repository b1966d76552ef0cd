//! Create-user client.
//!
//! # Design
//! `UserClient` holds only its configuration and a `Transport` and carries
//! no mutable state between calls. The operation is split into
//! `build_create_user`, which produces an `HttpRequest`, and
//! `parse_create_user`, which consumes an `HttpResponse`. `create_user` runs
//! the two around a single transport round-trip.

use serde::Serialize;
use tracing::{debug, warn};
use validator::Validate;

use crate::config::{ClientConfig, Validation};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateUserRequest, CreateUserResponse};

/// Path of the create-user endpoint, relative to the base URL.
pub const CREATE_USER_PATH: &str = "/v2/user";

/// Blocking, stateless client for the create-user endpoint.
///
/// `&UserClient` can be shared between threads; concurrent calls are
/// independent of each other.
#[derive(Debug, Clone)]
pub struct UserClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl UserClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self { config, transport }
    }
}

impl<T: Transport> UserClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the `POST /v2/user` request for `input`.
    ///
    /// In strict mode the payload is validated first and an invalid one is
    /// returned as `ApiError::InvalidRequest`.
    pub fn build_create_user(&self, input: &CreateUserRequest) -> Result<HttpRequest, ApiError> {
        if self.config.validation == Validation::Strict {
            input.validate()?;
        }
        self.build_post(input)
    }

    /// Build the `POST /v2/user` request for an untyped payload.
    ///
    /// Strict mode checks the payload against the request schema; lenient
    /// mode sends it exactly as given.
    pub fn build_create_user_json(&self, input: &serde_json::Value) -> Result<HttpRequest, ApiError> {
        if self.config.validation == Validation::Strict {
            CreateUserRequest::validate_json(input)?;
        }
        self.build_post(input)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<CreateUserResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(ApiError::unexpected)
    }

    /// Create a user. One outbound call, no retries.
    pub fn create_user(&self, input: &CreateUserRequest) -> Result<CreateUserResponse, ApiError> {
        let request = self.build_create_user(input).inspect_err(|e| {
            warn!(username = %input.username, error = %e, "create user rejected before sending");
        })?;
        self.send(request)
    }

    /// Create a user from an untyped payload. See `build_create_user_json`.
    pub fn create_user_json(&self, input: &serde_json::Value) -> Result<CreateUserResponse, ApiError> {
        let request = self.build_create_user_json(input).inspect_err(|e| {
            warn!(error = %e, "create user rejected before sending");
        })?;
        self.send(request)
    }

    fn build_post(&self, input: &impl Serialize) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::unexpected)?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(
            self.config
                .headers
                .iter()
                .filter(|(name, _)| !name.eq_ignore_ascii_case("content-type"))
                .cloned(),
        );
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{CREATE_USER_PATH}", self.config.base_url),
            headers,
            body: Some(body),
        })
    }

    fn send(&self, request: HttpRequest) -> Result<CreateUserResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending create user");
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.parse_create_user(response));
        match &result {
            Ok(created) => debug!(code = created.code, message = %created.message, "user created"),
            Err(e) => warn!(status = ?e.status(), error = %e, "create user failed"),
        }
        result
    }
}

/// Map non-2xx status codes to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
