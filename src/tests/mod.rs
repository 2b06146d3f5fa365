//! Test modules for Hua Dict.
//!
//! This module contains the crate-level test suite:
//! - Unit tests for the dictionary engine through its public API
//! - Property-based tests using proptest
//! - Table-driven tests using test-case
//! - Configuration and error handling tests
