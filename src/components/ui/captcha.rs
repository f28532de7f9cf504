//! Shared CAPTCHA block for the anonymous forms. The parent owns the
//! challenge resource and the solution signal; this component only displays
//! the question and lets the user type or refresh. The answer is forwarded to
//! the server untouched.

use crate::app_lib::AppError;
use crate::components::ui::Spinner;
use crate::features::captcha::types::CaptchaChallenge;
use leptos::prelude::*;

#[component]
pub fn CaptchaField(
    challenge: LocalResource<Result<CaptchaChallenge, AppError>>,
    solution: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <div class="flex items-center justify-between mb-2">
                <label class="block text-sm font-medium text-stone-200" for="captcha_solution">
                    "Security question"
                </label>
                <button
                    type="button"
                    class="text-xs text-amber-300 hover:underline"
                    on:click=move |_| {
                        solution.set(String::new());
                        challenge.refetch();
                    }
                >
                    "New question"
                </button>
            </div>
            {move || match challenge.get() {
                Some(Ok(data)) => view! {
                    <p class="mb-2 rounded-lg border border-stone-600 bg-stone-800/60 px-3 py-2 text-sm text-amber-100">
                        {data.question}
                    </p>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <p class="mb-2 text-sm text-red-300">
                        {format!("Could not load the security question: {err}")}
                    </p>
                }
                .into_any(),
                None => view! { <div class="mb-2"><Spinner /></div> }.into_any(),
            }}
            <input
                id="captcha_solution"
                type="text"
                class="w-full rounded-lg border border-stone-600 bg-stone-800 px-3 py-2.5 text-sm text-stone-100 focus:border-amber-400 focus:ring-2 focus:ring-amber-300/30"
                autocomplete="off"
                placeholder="Your answer"
                required
                prop:value=move || solution.get()
                on:input=move |event| solution.set(event_target_value(&event))
            />
        </div>
    }
}
