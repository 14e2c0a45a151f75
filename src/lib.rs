//! Neondither - neon image stylization
//!
//! Command-line host around the `neon-stylize` core: configuration,
//! image decode, export and batch rendering.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
