use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="tt-footer">
            <div class="container tt-footer-inner">
                <div class="tt-footer-left">{format!("\u{a9} {} Trip Tracker", year)}</div>
                <div class="tt-footer-right">
                    <a href="#privacy">"Privacy"</a>
                    <a href="#terms">"Terms"</a>
                    <a href="#help">"Help"</a>
                </div>
            </div>
        </footer>
    }
}
