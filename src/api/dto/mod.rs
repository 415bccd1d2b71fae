//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization. Field names follow the public
//! contract, not Rust naming.

pub mod health;
pub mod tarot;
pub mod yesno;
