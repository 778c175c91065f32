//! Error Handling utilities
//!
//! This module provides the crate error type and its HTTP-facing helpers.

pub mod error;

pub use error::*;
