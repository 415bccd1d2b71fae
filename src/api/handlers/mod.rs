//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod tarot;
pub mod yesno;

pub use health::health_handler;
pub use tarot::tarot_handler;
pub use yesno::yesno_handler;
