//! Determinate progress bar for the classify submission.
//!
//! The animation follows a fixed cosmetic schedule driven by the upload
//! component; it does not reflect real transfer progress.

use leptos::*;

#[component]
pub fn ProgressBar(visible: ReadSignal<bool>, percent: ReadSignal<u32>) -> impl IntoView {
    view! {
        <Show
            when=move || visible.get()
            fallback=|| view! { }
        >
            <div class="progress-bar" id="progress-bar">
                <div
                    class="progress"
                    style=move || format!("width: {}%;", percent.get())
                ></div>
            </div>
        </Show>
    }
}
