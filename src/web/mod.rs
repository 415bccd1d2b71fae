//! Web layer for the browser UI.
//!
//! Serves the tarot and yes/no pages. Pages are rendered with Askama; the
//! scripts under `static/` call the JSON API and fill them in.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
