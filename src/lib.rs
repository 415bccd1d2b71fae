//! # Tarot Oracle
//!
//! A small Axum service that draws three tarot "cards" from an image search
//! API, asks a text generation API to interpret them, and also relays a
//! public yes/no oracle.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation throughout:
//!
//! - **Domain Layer** ([`domain`]) - Draw entities, selection, fortune extraction and upstream traits
//! - **Application Layer** ([`application`]) - Services orchestrating a draw or an oracle consultation
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP clients for the external APIs
//! - **API Layer** ([`api`]) - JSON handlers, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Quick Start
//!
//! ```bash
//! export PIXABAY_API_KEY="..."
//! export ANTHROPIC_API_KEY="..."
//!
//! cargo run
//! curl http://localhost:3000/api/tarot
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, DrawError, OracleError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{OracleService, TarotService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{Fortune, ImageRecord, TarotDraw, TarotResult};
    pub use crate::error::{AppError, DrawError, OracleError};
    pub use crate::state::AppState;
}
