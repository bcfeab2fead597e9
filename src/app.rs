use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::pages::trips::TripsPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="tt-app">
            <TripsPage />
            <Footer />
        </div>
    }
}
