//! Core business logic for Cuadre.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and derived views
//! live here.
//!
//! # Modules
//!
//! - `chart` - Read-only chart of accounts lookup
//! - `journal` - Double-entry journal validation and posting lifecycle
//! - `reports` - General ledger and trial balance projections

pub mod chart;
pub mod journal;
pub mod reports;
