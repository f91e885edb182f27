//! Data models for extracted court cases and configuration.

pub mod case;
pub mod config;
