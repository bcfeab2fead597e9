use leptos::prelude::*;
use tracing::info;
use trip_core::{derive_visible_trips, sample_trips, CriteriaEdit, FilterCriteria, BADGES};

use crate::components::hero::Hero;
use crate::components::search_card::SearchCard;
use crate::components::trip_card::TripCard;

/// The whole Trip Tracker page: hero with the search card, then the grid.
///
/// Owns the session's criteria. Children receive a read-only view plus a
/// callback that feeds edits back through [`FilterCriteria::apply`].
#[component]
pub fn TripsPage() -> impl IntoView {
    let trips = sample_trips();
    let criteria = RwSignal::new(FilterCriteria::default());

    let on_edit = Callback::new(move |edit: CriteriaEdit| {
        if matches!(edit, CriteriaEdit::Reset) {
            info!("Resetting trip filters");
        }
        criteria.maybe_update(|c| c.apply(edit));
    });

    let visible = Memo::new(move |_| criteria.with(|c| derive_visible_trips(&trips, c)));

    view! {
        <section class="tt-hero">
            <div class="tt-hero-overlay"></div>
            <Hero />
            <SearchCard criteria=criteria.read_only() on_edit=on_edit />
        </section>

        <section class="tt-results container">
            <div class="tt-section-head">
                <h2 class="tt-section-title">"Upcoming & Planned"</h2>
                <div class="tt-badges">
                    {BADGES
                        .iter()
                        .map(|b| {
                            view! {
                                <span class=format!("tt-badge {}", b.accent.css_class())>
                                    {b.label}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=|| view! { <p class="tt-empty">"No trips match your filters."</p> }
            >
                <div class="tt-grid">
                    <For
                        each=move || visible.get()
                        key=|trip| trip.id
                        children=move |trip| view! { <TripCard trip=trip /> }
                    />
                </div>
            </Show>
        </section>
    }
}
