use std::rc::Rc;

use ghoshna_core::announcements::{shortcut_for_key, Modifiers, Shortcut, ANNOUNCEMENTS};
use ghoshna_core::controllers::DashboardController;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::browser::fetch::FetchTransport;
use crate::browser::storage::BrowserStorage;
use crate::browser::{client_config, dom};
use crate::components::header::Header;
use crate::components::notice_banner::NoticeBanner;
use crate::state::DashboardState;

type Controller = DashboardController<DashboardState, BrowserStorage, FetchTransport>;
type SharedController = StoredValue<Rc<Controller>, LocalStorage>;

fn generate(ctrl: SharedController, id: u8) {
    spawn_local(async move {
        let ctrl = ctrl.get_value();
        if let Err(e) = ctrl.generate(id).await {
            log::debug!("announcement {id} not generated: {e}");
        }
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = DashboardState::new();
    let config = client_config();
    let ctrl: SharedController = StoredValue::new_local(Rc::new(DashboardController::new(
        state,
        BrowserStorage,
        FetchTransport::new(&config),
        config,
    )));
    provide_context(state);
    provide_context(ctrl);

    spawn_local(async move {
        let ctrl = ctrl.get_value();
        if let Err(e) = ctrl.init().await {
            log::warn!("dashboard initialization incomplete: {e}");
        }
    });

    // Digits 1-5 trigger announcements, Escape closes the audio panel
    let keydown_handler = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let modifiers = Modifiers {
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            alt: event.alt_key(),
        };
        match shortcut_for_key(&event.key(), modifiers) {
            Some(Shortcut::Announce(id)) => generate(ctrl, id),
            Some(Shortcut::Dismiss) => ctrl.with_value(|c| c.dismiss()),
            None => {}
        }
    }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    if let Some(window) = web_sys::window() {
        if let Err(e) = window
            .add_event_listener_with_callback("keydown", keydown_handler.as_ref().unchecked_ref())
        {
            log::error!("failed to bind keyboard shortcuts: {e:?}");
        }
    }
    keydown_handler.forget();

    let on_logout = Callback::new(move |_: ()| ctrl.with_value(|c| c.logout()));

    view! {
        <div class="min-h-screen flex flex-col">
            <Header link=("/translate", "Translate") welcome=state.welcome on_logout=on_logout />

            <main class="flex-1 max-w-7xl mx-auto w-full px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <NoticeBanner slot=state.notice />
                <LanguagePicker />
                <AnnouncementGrid />

                {move || {
                    if state.loading.get() {
                        Some(view! {
                            <div class="card flex items-center justify-center gap-3">
                                <span class="animate-spin">"\u{23F3}"</span>
                                <span class="text-sm">"Generating announcement\u{2026}"</span>
                            </div>
                        })
                    } else {
                        None
                    }
                }}

                <AudioPanel />
            </main>

            <footer class="text-center py-4 text-xs text-gray-500 dark:text-gray-600">
                <kbd class="px-1.5 py-0.5 bg-gray-200 dark:bg-gray-800 rounded text-xs">"1"</kbd>
                "\u{2013}"
                <kbd class="px-1.5 py-0.5 bg-gray-200 dark:bg-gray-800 rounded text-xs">"5"</kbd>
                " to announce, "
                <kbd class="px-1.5 py-0.5 bg-gray-200 dark:bg-gray-800 rounded text-xs">"Esc"</kbd>
                " to close."
            </footer>
        </div>
    }
}

#[component]
fn LanguagePicker() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let ctrl = expect_context::<SharedController>();

    let on_change = move |ev: ev::Event| {
        let code = event_target_value(&ev);
        state.selected_language.set(code.clone());
        ctrl.with_value(|c| c.select_language(&code));
    };

    view! {
        <div class="card">
            <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                "Announcement Language"
            </label>
            <select
                id="targetLanguages"
                class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                on:change=on_change
            >
                <option value="">"Select announcement language..."</option>
                {move || {
                    state.languages.get().into_iter().map(|(code, name)| {
                        let label = format!("{name} ({code})");
                        let value = code.clone();
                        view! {
                            <option value=value prop:selected=move || state.selected_language.get() == code>
                                {label}
                            </option>
                        }
                    }).collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}

#[component]
fn AnnouncementGrid() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let ctrl = expect_context::<SharedController>();

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {ANNOUNCEMENTS.iter().map(|announcement| {
                let id = announcement.id;
                let card_class = move || {
                    if state.active.get() == Some(id) {
                        "card announcement-card active"
                    } else {
                        "card announcement-card"
                    }
                };
                view! {
                    <div class=card_class data-announcement=id.to_string()>
                        <div class="flex items-center justify-between mb-2">
                            <h3 class="font-semibold">
                                {format!("{} {}", announcement.icon, announcement.title)}
                            </h3>
                            <kbd class="text-xs text-gray-500">{id.to_string()}</kbd>
                        </div>
                        <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">{announcement.text}</p>
                        <button
                            class="btn-primary w-full text-sm announcement-btn"
                            on:click=move |_| generate(ctrl, id)
                        >
                            "Generate"
                        </button>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn AudioPanel() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let ctrl = expect_context::<SharedController>();

    let audio = state.audio;
    let field = move |f: fn(&ghoshna_core::controllers::AnnouncementAudio) -> String| {
        move || audio.with(|a| a.as_ref().map(f).unwrap_or_default())
    };

    view! {
        <div
            node_ref=state.audio_section
            class="card space-y-3"
            style:display=move || if audio.with(Option::is_some) { "block" } else { "none" }
        >
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold">"Announcement Audio"</h2>
                <span class="badge-ready">{field(|a| a.language_name.clone())}</span>
            </div>
            <p class="text-panel">{field(|a| a.text.clone())}</p>
            <audio class="w-full" controls=true src=field(|a| a.audio_url.clone())></audio>
            <div class="flex items-center gap-2">
                <button
                    class="btn-primary text-sm"
                    on:click=move |_| ctrl.with_value(|c| c.download(dom::now_millis()))
                >
                    "Download"
                </button>
                <button
                    class="btn-secondary text-sm"
                    on:click=move |_| ctrl.with_value(|c| c.new_announcement())
                >
                    "New Announcement"
                </button>
            </div>
        </div>
    }
}
