use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-stone-600 border-t-amber-400"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
