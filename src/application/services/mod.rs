//! Business logic services for the application layer.

pub mod oracle_service;
pub mod tarot_service;

pub use oracle_service::OracleService;
pub use tarot_service::TarotService;
