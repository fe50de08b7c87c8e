//! # Apiary Backend
//!
//! Conversion service for beekeeping feeding and treatment records.
//!
//! This crate wraps the [`apiary_units`] core with configuration, a service
//! layer and an axum REST API used by the inspection forms. Amounts are stored
//! canonically (millilitres and grams) and rendered in each user's preferred
//! units on the way out.
//!
//! ## Architecture
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`error`]: Service error type shared by all layers
//! - [`services`]: Resolves wire values into typed units and calls the core
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod error;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
