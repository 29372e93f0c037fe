//! # ArTistLy Common Library
//!
//! Shared code for the ArTistLy booking directory including:
//! - Domain models (artists, categories, submissions, option sets)
//! - The fixed catalog the site is seeded with
//! - Artist directory filtering
//! - Dashboard submission filtering, aggregation and review
//! - Onboarding form validation and submission
//! - Configuration loading

pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod onboarding;
pub mod selection;
pub mod submissions;

pub use error::{Error, Result};
pub use selection::Selection;
