//! AWS-oriented adapters and handlers for the profile service.
//!
//! This crate owns runtime integration details (Lambda entry points, queue
//! consumption, and the backend adapter seams) and drives the write
//! orchestration for each operation. Deterministic contracts, validation,
//! and response mapping live in `profile_service_core`.

pub mod adapters;
pub mod handlers;
