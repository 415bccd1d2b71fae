//! Core domain entities for a tarot draw and a yes/no consultation.
//!
//! Every entity here is request-scoped: produced while handling one request
//! and discarded once the response is written.
//!
//! # Entity Types
//!
//! - [`ImageRecord`] - An image returned by the image search API
//! - [`TarotDraw`] - Three images in past/present/future order
//! - [`Fortune`] - The four-field interpretation of a draw
//! - [`TarotResult`] - A draw together with its fortune
//! - [`YesNoAnswer`] - The yes/no oracle's reply

pub mod draw;
pub mod fortune;
pub mod image;
pub mod yes_no;

pub use draw::{CardPosition, DRAW_SIZE, TarotDraw, TarotResult};
pub use fortune::Fortune;
pub use image::ImageRecord;
pub use yes_no::{Answer, ForcedAnswer, YesNoAnswer};
