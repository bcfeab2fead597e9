use leptos::prelude::*;
use trip_core::{format_trip_date, progress_legend, spend_percentage, Trip};

#[component]
pub fn TripCard(trip: Trip) -> impl IntoView {
    let pct = spend_percentage(&trip);
    let (spent_label, total_label) = progress_legend(&trip);

    view! {
        <article class="tt-card">
            <div class=format!("tt-card-accent {}", trip.color.css_class())></div>
            <div class="tt-card-body">
                <h3 class="tt-card-title">{trip.name.clone()}</h3>
                <div class="tt-card-sub">{trip.location.clone()}</div>
                <div class="tt-dates">
                    <span>{format_trip_date(trip.start)}</span>
                    <span class="dot">"\u{2022}"</span>
                    <span>{format_trip_date(trip.end)}</span>
                </div>

                <div class="tt-progress">
                    <div class="tt-progress-track">
                        <div class="tt-progress-bar" style=format!("width: {}%", pct)></div>
                    </div>
                    <div class="tt-progress-legend">
                        <span>{spent_label}</span>
                        <span>{total_label}</span>
                    </div>
                </div>

                // Placeholders; there is no trip detail or edit view
                <div class="tt-card-footer">
                    <button class="tt-btn tt-btn-light">"View details"</button>
                    <button class="tt-btn tt-btn-ghost">"Edit"</button>
                </div>
            </div>
        </article>
    }
}
