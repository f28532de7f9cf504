//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! Navigation remains client-side; the API enforces real access control.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

const NAV_LINK: &str =
    "block py-2 px-3 text-stone-200 rounded hover:bg-stone-700 md:hover:bg-transparent md:p-0 md:hover:text-amber-300";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let navigate = use_navigate();
    let is_authenticated = auth.is_authenticated;
    let is_admin = auth.is_admin;
    let username = move || {
        auth.profile()
            .map(|profile| profile.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        auth.logout();
        set_menu_open.set(false);
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-stone-900">
            <header class="border-b-2 border-amber-700/60 bg-stone-800">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="Realmgate" />
                        <span class="font-semibold text-amber-300 whitespace-nowrap text-xl">
                            "Realmgate"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-stone-400 rounded-lg md:hidden hover:bg-stone-700 focus:outline-none focus:ring-2 focus:ring-stone-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 rounded-lg bg-stone-800 md:flex-row md:items-center md:space-x-6 md:mt-0">
                            <Show when=move || is_authenticated.get()>
                                <li class="py-2 px-3 md:p-0 text-amber-100">
                                    {move || format!("Welcome, {}!", username())}
                                </li>
                                <li>
                                    <A
                                        href={paths::DASHBOARD}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Dashboard"
                                    </A>
                                </li>
                                <Show when=move || is_admin.get()>
                                    <li>
                                        <A
                                            href={paths::ADMIN_USERS}
                                            {..}
                                            class="block py-2 px-3 text-amber-300 rounded hover:bg-stone-700 md:hover:bg-transparent md:p-0 md:hover:text-amber-200"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            "Admin Panel"
                                        </A>
                                    </li>
                                </Show>
                                <li>
                                    <A
                                        href={paths::CHANGE_PASSWORD}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Change Password"
                                    </A>
                                </li>
                            </Show>
                            <Show when=move || !is_authenticated.get()>
                                <li>
                                    <A
                                        href={paths::LOGIN}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Login"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::REGISTER}
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Register"
                                    </A>
                                </li>
                            </Show>
                            <li>
                                <A
                                    href={paths::DOWNLOADS}
                                    {..}
                                    class=NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Client Downloads"
                                </A>
                            </li>
                            <Show when=move || is_authenticated.get()>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=on_logout.clone()>
                                        "Logout"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <footer class="bg-stone-800 text-center p-4 text-stone-400 text-sm border-t border-stone-700">
                {format!(
                    "Realmgate v{} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::git_commit_hash()
                )}
            </footer>
        </div>
    }
}
