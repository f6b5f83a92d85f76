//! Image upload component.
//!
//! Handles file selection with local preview, submission to the backend,
//! and rendering of the classification outcome.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileReader, FormData, HtmlFormElement, HtmlInputElement};

use crate::components::{ImagePreview, ProgressBar, ResultsPanel};
use crate::config::{BACKEND_URL, PROGRESS_STEP_MS, PROGRESS_STEP_PERCENT};
use crate::services::classify_image;
use crate::types::{prediction_lines, ResultLine, SubmissionState};

#[component]
pub fn UploadSection() -> impl IntoView {
    let (preview_src, set_preview_src) = create_signal(None::<String>);
    let (state, set_state) = create_signal(SubmissionState::default());
    let (lines, set_lines) = create_signal(Vec::<ResultLine>::new());
    let (error, set_error) = create_signal(None::<String>);
    let (progress_visible, set_progress_visible) = create_signal(false);
    let (progress_percent, set_progress_percent) = create_signal(0u32);

    // Handler for file selection: decode a local preview.
    // Overlapping decodes race; the last onload wins.
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                log::debug!("Decoding preview for {}", file.name());
                read_as_data_url(file, move |data_url| {
                    set_preview_src.set(Some(data_url));
                });
            }
        }
    };

    // Handler for form submission: one POST per submit, no retries.
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form: HtmlFormElement = event_target(&ev);

        set_state.set(SubmissionState::InFlight);
        set_lines.set(Vec::new());
        set_error.set(None);
        set_progress_percent.set(0);
        set_progress_visible.set(true);

        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to snapshot form: {:?}", e);
                set_error.set(Some("Failed to read the submitted form.".to_string()));
                set_state.set(SubmissionState::Failed);
                set_progress_visible.set(false);
                return;
            }
        };

        spawn_local(async move {
            // Fixed cosmetic schedule, decoupled from real transfer progress.
            for percent in (0..=100u32).step_by(PROGRESS_STEP_PERCENT as usize) {
                TimeoutFuture::new(PROGRESS_STEP_MS).await;
                set_progress_percent.set(percent);
            }

            match classify_image(form_data, BACKEND_URL).await {
                Ok(response) => {
                    log::info!("Received {} predictions", response.predictions.len());
                    set_lines.set(prediction_lines(&response.predictions));
                    set_state.set(SubmissionState::Succeeded);
                }
                Err(e) => {
                    log::error!("Classification failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_state.set(SubmissionState::Failed);
                }
            }

            // Cleared on every path.
            set_progress_visible.set(false);
        });
    };

    view! {
        <div class="upload-section" id="upload-zone">
            <form id="upload-form" on:submit=on_submit>
                <input
                    type="file"
                    id="file"
                    name="file"
                    accept="image/*"
                    on:change=on_file_change
                />
                <button type="submit" class="upload-button">
                    "Classify Image"
                </button>
            </form>

            <ImagePreview src=preview_src/>

            <Show
                when=move || state.get().is_busy()
                fallback=|| view! { }
            >
                <div class="loading-spinner" id="loading-spinner">
                    "Classifying..."
                </div>
            </Show>

            <ProgressBar visible=progress_visible percent=progress_percent/>

            <ResultsPanel lines=lines error=error/>
        </div>
    }
}

/// Decode a file into a base64 data URL and hand it to the callback.
///
/// Single-shot; never cancelled once started.
fn read_as_data_url(file: File, on_loaded: impl FnOnce(String) + 'static) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("Failed to create FileReader: {:?}", e);
            return;
        }
    };

    let result_reader = reader.clone();
    let onload = Closure::once(move |_: Event| match result_reader.result() {
        Ok(value) => match value.as_string() {
            Some(data_url) => on_loaded(data_url),
            None => log::error!("FileReader returned a non-string result"),
        },
        Err(e) => log::error!("Failed to read file: {:?}", e),
    });

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        log::error!("Failed to start reading file: {:?}", e);
    }
}
