//! UI Components for the SnapClass application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image selection, preview and submission
//! - [`ImagePreview`] - Data-URL preview of the selected image
//! - [`ProgressBar`] - Determinate submission progress indicator
//! - [`ResultsPanel`] - Prediction lines or error message

mod footer;
mod hero;
mod preview;
mod progress;
mod results;
mod upload;

pub use footer::*;
pub use hero::*;
pub use preview::*;
pub use progress::*;
pub use results::*;
pub use upload::*;
