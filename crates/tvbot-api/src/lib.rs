//! REST client for the TradingView bot backend.
//!
//! Wraps the backend's plain-JSON HTTP API behind the `TradingApi` trait:
//! account balance and active orders for the dashboard poller, the two-phase
//! credential endpoints, and webhook settings. `BackendClient` is the
//! production implementation.

pub mod client;
pub mod error;
pub mod types;

pub use client::{BackendClient, TradingApi};
pub use error::{ApiError, ApiResult};
pub use types::{CredentialRequest, SecretString, StatusKind, StatusResponse};
