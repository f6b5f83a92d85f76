//! SnapClass - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for classifying images with a CIFAR-100
//! model served by the SnapClass backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection                                          │
//! │  │   ├── ImagePreview (data-URL preview)                    │
//! │  │   ├── ProgressBar (cosmetic submit progress)             │
//! │  │   └── ResultsPanel (predictions or error)                │
//! │  └── Footer                                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Prediction, SubmissionState, etc.)
//! - [`components`] - UI components (Hero, Upload, Results, etc.)
//! - [`services`] - Backend communication (predict)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    Prediction, PredictResponse,
    // Submission
    SubmissionState,
    // Rendering
    ResultLine,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 SnapClass - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadSection/>
        </div>

        <Footer/>
    }
}
