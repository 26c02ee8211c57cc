//! Geographic markup output for the density aggregator.
//!
//! Straightforward `write!`-based string assembly, no XML DOM or
//! templating dependency — the document's structure is simple and fixed
//! enough that building it by hand is clearer than going through a
//! general-purpose serializer.

mod color;
mod document;
mod error;

pub use color::COLOR_CLASS;
pub use document::write_document;
pub use error::MarkupError;
