//! Public landing page.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-2xl mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-8 shadow-lg text-center">
                <h1 class="text-4xl text-amber-300 font-semibold mb-6">"Welcome to the Realm!"</h1>
                <p class="text-lg text-stone-300 mb-4">
                    "Manage your game account with ease."
                </p>
                <p class="text-stone-400">
                    "Please "
                    <a href=paths::LOGIN class="text-amber-300 hover:underline font-semibold">"Login"</a>
                    " or "
                    <a href=paths::REGISTER class="text-amber-300 hover:underline font-semibold">"Register"</a>
                    " to continue."
                </p>
            </div>
        </AppShell>
    }
}
