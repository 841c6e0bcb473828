//! Shared fixtures for integration tests

#![allow(dead_code)]

pub mod builders;
pub mod fixtures;
pub mod harness;
