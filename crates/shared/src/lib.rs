//! Shared types and configuration for Cuadre.
//!
//! This crate provides common building blocks used across all other crates:
//! - Fixed-point amount parsing with decimal precision
//! - Typed IDs for type-safe entity references
//! - Configuration management
//! - Bounded retry policy for transient storage failures

pub mod config;
pub mod retry;
pub mod types;

pub use config::AppConfig;
pub use retry::with_retries;
