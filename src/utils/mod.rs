//! Utility modules for ClubCentral
//!
//! - **error**: Error types and HTTP-facing error helpers
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{ClubError, ErrorResponse, Result};
pub use logging::{LogLevel, init_tracing};
