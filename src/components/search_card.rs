use leptos::prelude::*;
use trip_core::{CriteriaEdit, FilterCriteria};

use crate::components::daily_budget_stepper::DailyBudgetStepper;

/// Floating filter panel under the hero.
///
/// Every input is forwarded as a [`CriteriaEdit`]; the card keeps no state
/// of its own, so Reset is reflected in all fields at once.
#[component]
pub fn SearchCard(
    criteria: ReadSignal<FilterCriteria>,
    #[prop(into)] on_edit: Callback<CriteriaEdit>,
) -> impl IntoView {
    let daily_budget = Signal::derive(move || criteria.with(|c| c.daily_budget));

    view! {
        <div class="tt-search-card container">
            <div class="tt-field">
                <label for="tt-query">"Trip name"</label>
                <input
                    id="tt-query"
                    type="text"
                    placeholder="Search destinations or trip titles"
                    prop:value=move || criteria.with(|c| c.query.clone())
                    on:input=move |ev| on_edit.run(CriteriaEdit::Query(event_target_value(&ev)))
                />
            </div>

            <div class="tt-field">
                <label for="tt-max-budget">"Total budget (max)"</label>
                <div class="tt-number-field">
                    <span class="tt-number-prefix">"$"</span>
                    <input
                        id="tt-max-budget"
                        type="number"
                        min="0"
                        step="100"
                        prop:value=move || criteria.with(|c| c.max_total_budget.to_string())
                        on:input=move |ev| {
                            on_edit.run(CriteriaEdit::MaxTotalBudget(event_target_value(&ev)))
                        }
                    />
                </div>
            </div>

            <div class="tt-field">
                <label>"Daily budget"</label>
                <DailyBudgetStepper
                    value=daily_budget
                    on_step=move |delta: i32| on_edit.run(CriteriaEdit::StepDailyBudget(delta))
                />
            </div>

            <div class="tt-field">
                <label for="tt-start">"Start date"</label>
                <input
                    id="tt-start"
                    type="date"
                    prop:value=move || criteria.with(|c| c.start_date.clone())
                    on:input=move |ev| on_edit.run(CriteriaEdit::StartDate(event_target_value(&ev)))
                />
            </div>
            <div class="tt-field">
                <label for="tt-end">"End date"</label>
                <input
                    id="tt-end"
                    type="date"
                    prop:value=move || criteria.with(|c| c.end_date.clone())
                    on:input=move |ev| on_edit.run(CriteriaEdit::EndDate(event_target_value(&ev)))
                />
            </div>

            <div class="tt-actions">
                <button
                    class="tt-btn tt-btn-primary"
                    on:click=move |_| on_edit.run(CriteriaEdit::Search)
                >
                    "Search"
                </button>
                <button
                    class="tt-btn tt-btn-ghost"
                    on:click=move |_| on_edit.run(CriteriaEdit::Reset)
                >
                    "Reset"
                </button>
            </div>
        </div>
    }
}
