//! Domain layer: request descriptors, response envelopes, normalized errors
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod envelope;
pub mod error;

pub use entities::{Method, QueryValue, RequestDescriptor};
pub use envelope::Envelope;
pub use error::{ApiError, ErrorCause};
