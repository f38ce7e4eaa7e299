use ghoshna_core::Page;
use leptos::prelude::*;

use crate::browser::dom;
use crate::components::auth_page::AuthPage;
use crate::components::dashboard_page::DashboardPage;
use crate::components::translate_page::TranslatePage;

/// The server serves the same bundle on every page; the path picks the view.
#[component]
pub fn App() -> impl IntoView {
    let page = Page::from_path(&dom::pathname());
    log::debug!("mounting {page:?} page");

    match page {
        Page::Auth => view! { <AuthPage /> }.into_any(),
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::Translate => view! { <TranslatePage /> }.into_any(),
    }
}
