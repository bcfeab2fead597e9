use leptos::prelude::*;
use trip_core::criteria::DAILY_BUDGET_STEP;
use trip_core::format_currency;

/// `−` / `+` control for the daily budget. Clamping happens in the reducer.
#[component]
pub fn DailyBudgetStepper(
    /// Current daily budget in whole currency units.
    value: Signal<u32>,
    /// Called with the signed step to apply.
    #[prop(into)]
    on_step: Callback<i32>,
) -> impl IntoView {
    view! {
        <div class="tt-stepper">
            <button
                class="tt-stepper-btn"
                aria-label="Decrease daily budget"
                on:click=move |_| on_step.run(-DAILY_BUDGET_STEP)
            >
                "\u{2212}"
            </button>
            <div class="tt-stepper-value">
                {move || format_currency(f64::from(value.get()))}
            </div>
            <button
                class="tt-stepper-btn"
                aria-label="Increase daily budget"
                on:click=move |_| on_step.run(DAILY_BUDGET_STEP)
            >
                "+"
            </button>
        </div>
    }
}
