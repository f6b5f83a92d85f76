//! Results panel: prediction lines or a single error message.

use leptos::*;

use crate::types::ResultLine;

/// Renders the outcome of the latest submission.
///
/// An error shows as exactly one red-styled paragraph; a success shows a
/// heading followed by one line per prediction, in response order. Both
/// are cleared by the upload component when a new submission starts.
#[component]
pub fn ResultsPanel(
    lines: ReadSignal<Vec<ResultLine>>,
    error: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="result" id="result">
            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <p class="error-message" style="color: red;">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !lines.get().is_empty()
                fallback=|| view! { }
            >
                <h3>"Top Predictions"</h3>
                <For
                    each=move || lines.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    children=move |(_, line)| {
                        view! {
                            <p class="prediction-line">
                                <strong>{line.label.clone()} ":"</strong>
                                " "
                                {line.value.clone()}
                            </p>
                        }
                    }
                />
            </Show>
        </div>
    }
}
