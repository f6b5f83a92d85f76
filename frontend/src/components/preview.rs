//! Local image preview, rendered from a data URL.

use leptos::*;

/// Preview of the currently selected image.
///
/// Hidden until the first file has been decoded; afterwards the `src`
/// tracks the most recently completed decode.
#[component]
pub fn ImagePreview(src: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show
            when=move || src.get().is_some()
            fallback=|| view! { }
        >
            <img
                id="image-preview"
                class="image-preview"
                alt="Preview of the selected image"
                src=move || src.get().unwrap_or_default()
            />
        </Show>
    }
}
