//! Busy indicator shown while requests are in flight.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner" role="status" aria-label="Loading"></span> }
}
