//! HTTP server module for the apiary conversion service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Request parsing and validation                        │
//! │  - JSON serialization/deserialization                    │
//! │  - CORS, compression, error handling                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                               │
//! │  - Resolves symbols, dimensions and preferences          │
//! │  - Applies configured display defaults                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Conversion core (apiary-units)                          │
//! │  - Unit registry, converter, preference resolver         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
