//! Upstream provider trait definitions for the domain layer.
//!
//! Each external API the service consumes is reached through one of these
//! traits. Concrete HTTP clients live in `crate::infrastructure::http`;
//! mock implementations are auto-generated via `mockall` for testing.
//!
//! # Available Providers
//!
//! - [`ImageSource`] - Image search used to fill a draw
//! - [`NarrativeGenerator`] - Text generation producing the reading
//! - [`YesNoOracle`] - Public yes/no oracle

pub mod image_source;
pub mod narrative_generator;
pub mod yes_no_oracle;

pub use image_source::ImageSource;
pub use narrative_generator::NarrativeGenerator;
pub use yes_no_oracle::YesNoOracle;

#[cfg(test)]
pub use image_source::MockImageSource;
#[cfg(test)]
pub use narrative_generator::MockNarrativeGenerator;
#[cfg(test)]
pub use yes_no_oracle::MockYesNoOracle;
