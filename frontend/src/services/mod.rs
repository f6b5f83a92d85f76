//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`predict`] - Image submission to the classification backend

pub mod predict;

pub use predict::*;
