//! Domain layer containing draw entities and logic.
//!
//! Nothing here performs I/O. The upstream APIs are described by traits in
//! [`providers`] and implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped data structures
//! - [`providers`] - Upstream API trait definitions
//! - [`selection`] - Keyword choice and card selection
//! - [`prompt`] - Prompt construction for the text generation API
//! - [`extractor`] - Fortune extraction from model output
//!
//! # Draw Flow
//!
//! 1. [`selection::pick_keyword`] chooses a search term
//! 2. [`providers::ImageSource`] returns candidate images
//! 3. [`selection::select_three`] assigns past, present and future
//! 4. [`providers::NarrativeGenerator`] produces free-form text
//! 5. [`extractor::extract_fortune`] validates it into a [`entities::Fortune`]

pub mod entities;
pub mod extractor;
pub mod prompt;
pub mod providers;
pub mod selection;
