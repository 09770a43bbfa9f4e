//! Integration tests for tvbot-dash.
//!
//! These tests run the real components over HTTP against a mock backend:
//! - Poll/reconcile lifecycle and outage behavior
//! - Credential validate/connect ordering and payloads
//! - Settings load/save round trips

// Each test binary compiles this tree separately and uses a subset of it.
#[allow(dead_code)]
pub mod common;
