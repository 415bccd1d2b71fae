//! Infrastructure layer: concrete implementations of the upstream providers.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` clients for the image search, text generation and
//!   yes/no oracle APIs

pub mod http;
