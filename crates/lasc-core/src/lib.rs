//! Core library for the lasc scaffolder.
//!
//! Provides the [`scaffold::Scaffolder`] pipeline that materializes a
//! container-image AWS Lambda function project written in Go, along with the
//! pieces it is built from: embedded template rendering, the deployment
//! descriptor materializer, and the external tool gateway.
//!
//! The pipeline is strictly sequential and fail-fast; see [`scaffold`] for
//! the step ordering and idempotence guarantees.

pub mod config;
pub mod error;
pub mod scaffold;
pub mod templates;
pub mod tools;
