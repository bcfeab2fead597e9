use leptos::prelude::*;
use tracing::warn;
use trip_core::assets::TRIP_ICON;

use crate::config;

#[component]
pub fn Hero() -> impl IntoView {
    let (icon_failed, set_icon_failed) = signal(false);
    let icon_src = config::asset(TRIP_ICON);

    view! {
        <div class="tt-hero-inner container">
            <div class="tt-brand">
                // A missing icon must not take the page down with it
                <Show when=move || !icon_failed.get()>
                    <img
                        src=icon_src.clone()
                        alt="Trip Tracker icon"
                        class="tt-brand-icon"
                        on:error=move |ev| {
                            let img: web_sys::HtmlImageElement = event_target(&ev);
                            warn!("Brand icon failed to load: {}", img.src());
                            set_icon_failed.set(true);
                        }
                    />
                </Show>
                <h1 class="tt-brand-title">"Trip Tracker"</h1>
            </div>
            <p class="tt-hero-sub">
                "Plan smarter, spend better. \
                 A clean, modern way to track every trip and every dollar."
            </p>
        </div>
    }
}
