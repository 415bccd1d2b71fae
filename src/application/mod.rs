//! Application layer services.
//!
//! Services sequence domain steps and upstream provider calls. They consume
//! the provider traits and give HTTP handlers and the CLI a single call per
//! feature.
//!
//! # Available Services
//!
//! - [`services::tarot_service::TarotService`] - Full tarot draw orchestration
//! - [`services::oracle_service::OracleService`] - Yes/no oracle consultation

pub mod services;
