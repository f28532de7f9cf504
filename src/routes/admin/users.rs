//! Admin user-management table. Every moderation action is followed by a full
//! list refresh rather than a local patch, so the table always reflects the
//! backend's view. Self-targeting controls are disabled client-side; the API
//! enforces the same rules authoritatively.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::admin::{
    client::{self, UserAction},
    rules,
};
use crate::features::auth::RequireAdmin;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::UserProfile;
use leptos::prelude::*;

const TH: &str = "py-3 px-6 text-left text-xs font-medium text-amber-200 uppercase tracking-wider";
const TD: &str = "py-3 px-6 whitespace-nowrap text-sm text-stone-200";
const ACTION_BUTTON: &str =
    "px-2 py-1 text-xs rounded border border-stone-600 hover:bg-stone-700 disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn UserListPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAdmin>
                <UserTable />
            </RequireAdmin>
        </AppShell>
    }
}

fn yes_no(value: bool) -> impl IntoView {
    if value {
        view! { <span class="text-emerald-400">"Yes"</span> }
    } else {
        view! { <span class="text-red-400">"No"</span> }
    }
}

#[component]
fn UserTable() -> impl IntoView {
    let auth = use_auth();
    let (action_message, set_action_message) = signal::<Option<(bool, String)>>(None);

    let users = LocalResource::new(move || async move {
        match auth.token() {
            Some(token) => client::list_users(&token).await,
            None => Err(crate::app_lib::AppError::Validation(
                "Your session has expired. Log in again.".to_string(),
            )),
        }
    });

    let moderate_action = Action::new_local(move |input: &(UserAction, u32)| {
        let (action, user_id) = *input;
        async move {
            let Some(token) = auth.token() else {
                return Err("Your session has expired. Log in again.".to_string());
            };
            match client::apply_user_action(action, user_id, &token).await {
                Ok(_updated) => Ok(action.success_message().to_string()),
                Err(err) => Err(format!("{}: {err}", action.failure_label())),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = moderate_action.value().get() {
            match result {
                Ok(message) => {
                    set_action_message.set(Some((true, message)));
                    users.refetch();
                }
                Err(message) => set_action_message.set(Some((false, message))),
            }
        }
    });

    let busy = moderate_action.pending();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl text-amber-300 font-semibold text-center">
                "Admin - User Management"
            </h1>

            {move || {
                action_message
                    .get()
                    .map(|(succeeded, text)| {
                        let kind = if succeeded { AlertKind::Success } else { AlertKind::Error };
                        view! { <Alert kind=kind message=text /> }
                    })
            }}

            <div class="overflow-x-auto rounded-lg border border-stone-700 bg-stone-800/70 shadow-md">
                <table class="min-w-full table-auto text-left">
                    <thead class="bg-stone-900/70">
                        <tr>
                            <th scope="col" class=TH>"ID"</th>
                            <th scope="col" class=TH>"Username"</th>
                            <th scope="col" class=TH>"Email"</th>
                            <th scope="col" class=TH>"Admin"</th>
                            <th scope="col" class=TH>"Locked"</th>
                            <th scope="col" class=TH>"Email Verified"</th>
                            <th scope="col" class=TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-stone-700">
                        {move || match users.get() {
                            Some(Ok(list)) if list.is_empty() => view! {
                                <tr>
                                    <td colspan="7" class="py-6 px-6 text-center text-sm text-stone-400">
                                        "No users found."
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            Some(Ok(list)) => view! {
                                <For
                                    each=move || list.clone()
                                    key=|user| user.id
                                    children=move |user| view! {
                                        <UserRow
                                            user=user
                                            busy=busy.into()
                                            on_action=Callback::new(move |input| {
                                                set_action_message.set(None);
                                                moderate_action.dispatch(input);
                                            })
                                        />
                                    }
                                />
                            }
                            .into_any(),
                            Some(Err(err)) => view! {
                                <tr>
                                    <td colspan="7" class="py-4 px-6">
                                        <Alert kind=AlertKind::Error message=err.to_string() />
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            None => view! {
                                <tr>
                                    <td colspan="7" class="py-10 px-6 text-center">
                                        <Spinner />
                                    </td>
                                </tr>
                            }
                            .into_any(),
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn UserRow(
    user: UserProfile,
    busy: Signal<bool>,
    on_action: Callback<(UserAction, u32)>,
) -> impl IntoView {
    let auth = use_auth();
    let user_id = user.id;
    let target = user.clone();

    // Ban/unban and promote/demote each collapse to the one verb that applies
    // to the row's current state.
    let lock_action = if user.locked {
        UserAction::Unban
    } else {
        UserAction::Ban
    };
    let rank_action = if user.is_admin {
        UserAction::Demote
    } else {
        UserAction::Promote
    };

    let lock_target = target.clone();
    let lock_allowed = Signal::derive(move || {
        auth.profile()
            .is_some_and(|actor| rules::action_allowed(lock_action, &actor, &lock_target))
    });
    let lock_reason_target = target.clone();
    let lock_reason = Signal::derive(move || {
        auth.profile()
            .and_then(|actor| rules::disabled_reason(lock_action, &actor, &lock_reason_target))
            .unwrap_or("")
    });
    let rank_target = target.clone();
    let rank_allowed = Signal::derive(move || {
        auth.profile()
            .is_some_and(|actor| rules::action_allowed(rank_action, &actor, &rank_target))
    });
    let rank_reason_target = target.clone();
    let rank_reason = Signal::derive(move || {
        auth.profile()
            .and_then(|actor| rules::disabled_reason(rank_action, &actor, &rank_reason_target))
            .unwrap_or("")
    });

    let lock_label = match lock_action {
        UserAction::Unban => "Unban",
        _ => "Ban",
    };
    let lock_class = match lock_action {
        UserAction::Unban => "text-emerald-400 hover:text-emerald-300",
        _ => "text-red-400 hover:text-red-300",
    };
    let rank_label = match rank_action {
        UserAction::Demote => "Demote",
        _ => "Promote",
    };
    let rank_class = match rank_action {
        UserAction::Demote => "text-yellow-400 hover:text-yellow-300",
        _ => "text-sky-400 hover:text-sky-300",
    };

    view! {
        <tr class="hover:bg-stone-700/40 transition-colors">
            <td class=TD>{user.id}</td>
            <td class="py-3 px-6 whitespace-nowrap text-sm font-medium text-stone-100">
                {user.username.clone()}
            </td>
            <td class=TD>{user.email.clone()}</td>
            <td class=TD>{yes_no(user.is_admin)}</td>
            <td class=TD>{yes_no(user.locked)}</td>
            <td class=TD>{yes_no(user.email_verified)}</td>
            <td class="py-3 px-6 whitespace-nowrap text-sm">
                <div class="flex items-center space-x-2">
                    <button
                        type="button"
                        class=format!("{ACTION_BUTTON} {lock_class}")
                        disabled=move || busy.get() || !lock_allowed.get()
                        title=move || lock_reason.get()
                        on:click=move |_| on_action.run((lock_action, user_id))
                    >
                        {lock_label}
                    </button>
                    <button
                        type="button"
                        class=format!("{ACTION_BUTTON} {rank_class}")
                        disabled=move || busy.get() || !rank_allowed.get()
                        title=move || rank_reason.get()
                        on:click=move |_| on_action.run((rank_action, user_id))
                    >
                        {rank_label}
                    </button>
                </div>
            </td>
        </tr>
    }
}
