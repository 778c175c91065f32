//! Integration tests for clubcentral
//!
//! These tests exercise the public API the way the HTTP and session layers do.

pub mod cli_tests;
pub mod config_tests;
pub mod gate_tests;
pub mod resolution_tests;
