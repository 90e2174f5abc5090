//! Common test utilities for fieldmap integration tests.
//!
//! This module provides:
//! - Fixtures: mappable types and sample values

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
