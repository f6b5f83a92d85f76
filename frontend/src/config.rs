//! Application configuration.
//!
//! Centralized configuration for the SnapClass frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The classification server hosting the predict endpoint.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Path of the prediction endpoint on the backend.
pub const PREDICT_PATH: &str = "/predict/";

/// Application name, shown in the hero section.
pub const APP_NAME: &str = "SnapClass";

/// Step size of the cosmetic progress animation (percent).
pub const PROGRESS_STEP_PERCENT: u32 = 10;

/// Delay between progress animation steps (milliseconds).
pub const PROGRESS_STEP_MS: u32 = 50;
