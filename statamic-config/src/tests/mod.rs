//! Integration tests for the configuration system

pub mod env_integration;
pub mod file_formats;
