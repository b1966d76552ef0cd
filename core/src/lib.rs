//! Schema-validated client for the create-user endpoint (`POST /v2/user`).
//!
//! # Overview
//! `UserClient` builds an `HttpRequest` from a `CreateUserRequest`, hands it
//! to a `Transport` for the round-trip, and parses the `HttpResponse` into a
//! `CreateUserResponse`. Building and parsing never touch the network, so
//! both can be tested without a server.
//!
//! # Design
//! - Configuration is an explicit `ClientConfig`; `ClientConfig::from_env`
//!   reads `API_URL` for callers that want it.
//! - Strict mode (the default) rejects payloads that do not match the request
//!   schema before anything is sent. Lenient mode sends them as given.
//! - Non-2xx responses and network failures surface as transport errors
//!   carrying status and body; any other failure is `ApiError::Unexpected`
//!   with the cause kept as its source.
//! - The DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{UserClient, CREATE_USER_PATH};
pub use config::{ClientConfig, ConfigError, Validation};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateUserRequest, CreateUserResponse};
