//! Game-client download page. The server decides which mirrors this client
//! may see; the page only renders what it is given.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::downloads::{
    client,
    types::{ClientDownloadInfo, file_name_from_url},
};
use leptos::prelude::*;

#[component]
pub fn DownloadsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth>
                <DownloadsContent />
            </RequireAuth>
        </AppShell>
    }
}

#[component]
fn DownloadsContent() -> impl IntoView {
    let auth = use_auth();
    let info = LocalResource::new(move || async move {
        match auth.token() {
            Some(token) => client::client_info(&token).await,
            None => Err(AppError::Validation(
                "You must be logged in to view download links.".to_string(),
            )),
        }
    });

    view! {
        <div class="max-w-2xl mx-auto rounded-xl border border-stone-700 bg-stone-900/80 p-6 md:p-8 shadow-lg">
            <h1 class="text-3xl text-amber-300 font-semibold mb-8 text-center">
                "Game Client Downloads"
            </h1>
            {move || match info.get() {
                Some(Ok(data)) if data.has_any_url() => view! {
                    <DownloadPanels info=data />
                }
                .into_any(),
                Some(Ok(_)) => view! {
                    <p class="text-lg text-stone-300 text-center">
                        "Client download links are not currently configured. Please contact an administrator."
                    </p>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                None => view! {
                    <div class="text-center py-8"><Spinner /></div>
                }
                .into_any(),
            }}
            <div class="mt-8 text-center text-xs text-stone-500">
                <p>"Ensure you have enough disk space before downloading. Client versions must match the server."</p>
                <p>"Contact server administrators for connection details (realmlist)."</p>
            </div>
        </div>
    }
}

#[component]
fn DownloadPanels(info: ClientDownloadInfo) -> impl IntoView {
    let lan_panel = info.lan_available.then_some(()).and(info.lan_download_url);
    let public_panel = info.public_download_url;
    let lan_missing = lan_panel.is_none();

    view! {
        {lan_panel
            .map(|url| {
                let file_name = file_name_from_url(&url);
                view! {
                    <div class="mb-8 p-6 bg-stone-800/70 rounded-lg shadow-lg border border-amber-700/60">
                        <h2 class="text-2xl text-amber-200 mb-3">"LAN Download"</h2>
                        <p class="text-sm text-stone-300 mb-4">
                            "You appear to be on the server's local network. Use this link for faster downloads."
                        </p>
                        <a
                            href=url
                            class="inline-block w-full md:w-auto text-center text-lg py-3 px-6 rounded-lg bg-amber-400 text-stone-900 font-semibold hover:bg-amber-300"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {format!("Download from LAN ({file_name})")}
                        </a>
                    </div>
                }
            })}
        {public_panel
            .map(|url| {
                let file_name = file_name_from_url(&url);
                view! {
                    <div class="mb-6 p-6 bg-stone-800/70 rounded-lg shadow-lg border border-stone-700">
                        <h2 class="text-2xl text-stone-200 mb-3">"Public Download"</h2>
                        {lan_missing
                            .then_some(view! {
                                <p class="text-sm text-stone-300 mb-4">
                                    "If you are on the same local network as the server, a LAN download may be offered instead."
                                </p>
                            })}
                        <a
                            href=url
                            class="inline-block w-full md:w-auto text-center text-lg py-3 px-6 rounded-lg border border-amber-400 text-amber-300 font-semibold hover:bg-stone-700"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {format!("Download from Internet ({file_name})")}
                        </a>
                    </div>
                }
            })}
    }
}
