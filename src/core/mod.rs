//! Core domain logic for luhnkit
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`TemplateLine`, `Record`, `ResultSet`, `NormalizedLine`)
//! - `services/` - Generation and normalization pipelines
//!
//! Generation runs template lines through placeholder discovery, expansion
//! and finalization. Formatting runs free text through extraction and
//! masking.

pub mod models;
pub mod services;
