//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME} " - Image Classifier"</h1>
            <p class="subtitle">
                "Upload a picture and a CIFAR-100 model will guess what it shows. "
                "Predictions are ranked by confidence."
            </p>
        </div>
    }
}
