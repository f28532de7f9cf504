//! Minimal 404 page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page used as the top-level route fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-stone-700 select-none">"404"</h1>
                <p class="text-2xl font-bold text-stone-200">"Page not found"</p>
                <p class="mt-4 text-stone-400 max-w-sm mx-auto">
                    "The page you requested is missing or you don't have permission to view it."
                </p>
                <div class="mt-6">
                    <A
                        href={paths::HOME}
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-semibold text-stone-900 bg-amber-400 rounded-lg hover:bg-amber-300"
                    >
                        "Go Home"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
