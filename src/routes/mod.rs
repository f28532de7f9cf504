mod admin;
mod change_password;
mod dashboard;
mod downloads;
mod home;
mod login;
mod not_found;
mod register;
mod reset_password;
mod two_factor;
mod verify_email;

pub(crate) use admin::UserListPage;
pub(crate) use change_password::ChangePasswordPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use downloads::DownloadsPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use two_factor::TwoFactorPage;
pub(crate) use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths, shared by the router table, the navbar, and the guards.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const CHANGE_PASSWORD: &str = "/change-password";
    pub const RESET_PASSWORD: &str = "/reset-password";
    pub const VERIFY_EMAIL: &str = "/verify-email";
    pub const TWO_FACTOR: &str = "/two-factor";
    pub const DOWNLOADS: &str = "/downloads";
    pub const ADMIN_USERS: &str = "/admin/users";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/change-password") view=ChangePasswordPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/two-factor") view=TwoFactorPage />
            <Route path=path!("/downloads") view=DownloadsPage />
            <Route path=path!("/admin/users") view=UserListPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
