use std::rc::Rc;

use ghoshna_core::controllers::translate::submit_label;
use ghoshna_core::controllers::{TranslateController, TranslateForm};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::fetch::FetchTransport;
use crate::browser::storage::BrowserStorage;
use crate::browser::{client_config, dom};
use crate::components::header::Header;
use crate::components::language_selector::LanguageSelector;
use crate::components::notice_banner::NoticeBanner;
use crate::state::TranslateState;

type Controller = TranslateController<TranslateState, BrowserStorage, FetchTransport>;
type SharedController = StoredValue<Rc<Controller>, LocalStorage>;

#[component]
pub fn TranslatePage() -> impl IntoView {
    let state = TranslateState::new();
    let config = client_config();
    let ctrl: SharedController = StoredValue::new_local(Rc::new(TranslateController::new(
        state,
        BrowserStorage,
        FetchTransport::new(&config),
        config,
    )));
    provide_context(state);
    provide_context(ctrl);

    if let Err(e) = ctrl.with_value(|c| c.init()) {
        log::info!("translate page not initialized: {e}");
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = TranslateForm {
            text: state.input.get_untracked(),
            source: state.source_language.get_untracked(),
            target: state.target_language.get_untracked(),
        };
        spawn_local(async move {
            let ctrl = ctrl.get_value();
            if let Err(e) = ctrl.submit(&form).await {
                log::debug!("translation not shown: {e}");
            }
        });
    };

    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        if let Some(input) = state.input_ref.get_untracked() {
            dom::fit_height(&input, true);
        }
        ctrl.with_value(|c| c.input_changed(&text));
        state.input.set(text);
    };

    let on_swap = Callback::new(move |_: ()| {
        let source = state.source_language.get_untracked();
        let target = state.target_language.get_untracked();
        if let Err(e) = ctrl.with_value(|c| c.swap(&source, &target)) {
            log::debug!("swap rejected: {e}");
        }
    });

    let on_logout = Callback::new(move |_: ()| ctrl.with_value(|c| c.logout()));

    let counter_label = move || state.counter.get().map(|c| c.label()).unwrap_or_default();
    let counter_color = move || state.counter.get().map(|c| c.color()).unwrap_or("#666");

    view! {
        <div class="min-h-screen flex flex-col">
            <Header link=("/dashboard", "Dashboard") on_logout=on_logout />

            <main class="flex-1 max-w-4xl mx-auto w-full px-4 sm:px-6 lg:px-8 py-8 space-y-6">
                <form class="card space-y-4" on:submit=on_submit>
                    <LanguageSelector on_swap=on_swap />

                    <textarea
                        id="inputText"
                        node_ref=state.input_ref
                        class="w-full min-h-32 px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm resize-none"
                        placeholder="Enter text to translate\u{2026}"
                        prop:value=move || state.input.get()
                        on:input=on_input
                    ></textarea>

                    <div class="flex items-center justify-between">
                        <span class="text-xs" style:color=counter_color>
                            <span id="charCount">{counter_label}</span>
                            " / 5000"
                        </span>
                        <div class="flex items-center gap-2">
                            <button
                                type="button"
                                class="btn-secondary text-sm"
                                on:click=move |_| ctrl.with_value(|c| c.clear())
                            >
                                "Clear"
                            </button>
                            <button
                                id="translateBtn"
                                type="submit"
                                class="btn-primary text-sm"
                                disabled=move || state.translating.get()
                            >
                                {move || submit_label(state.translating.get())}
                            </button>
                        </div>
                    </div>
                </form>

                {move || {
                    if state.translating.get() {
                        Some(view! {
                            <div class="flex justify-center">
                                <span class="animate-spin text-2xl">"\u{23F3}"</span>
                            </div>
                        })
                    } else {
                        None
                    }
                }}

                <NoticeBanner slot=state.error />
                <ResultPanel />
            </main>
        </div>
    }
}

#[component]
fn ResultPanel() -> impl IntoView {
    let state = expect_context::<TranslateState>();
    let ctrl = expect_context::<SharedController>();

    let result = state.result;
    let field = move |f: fn(&ghoshna_core::controllers::TranslationDisplay) -> String| {
        move || result.with(|r| r.as_ref().map(f).unwrap_or_default())
    };
    let has_audio = move || result.with(|r| r.as_ref().is_some_and(|r| r.audio_url.is_some()));
    let audio_display = move || if has_audio() { "block" } else { "none" };

    let play = move |_| {
        let Some(audio) = state.audio_ref.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = dom::play(&audio).await {
                ctrl.with_value(|c| c.playback_failed(&e));
            }
        });
    };

    view! {
        <div
            node_ref=state.result_section
            class="grid grid-cols-1 lg:grid-cols-2 gap-6"
            style:display=move || if result.with(Option::is_some) { "grid" } else { "none" }
        >
            <div class="card space-y-3">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold">"Original"</h2>
                    <span class="text-xs text-gray-500 dark:text-gray-400">
                        {field(|r| r.original_language.clone())}
                    </span>
                </div>
                <div class="text-panel">{field(|r| r.original_text.clone())}</div>
            </div>

            <div class="card space-y-3">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold">"Translation"</h2>
                    <span class="text-xs text-gray-500 dark:text-gray-400">
                        {field(|r| r.translated_language.clone())}
                    </span>
                </div>
                <div id="translatedText" class="text-panel">{field(|r| r.translated_text.clone())}</div>
                <button
                    type="button"
                    class="btn-primary text-sm"
                    style:display=move || if has_audio() { "inline-block" } else { "none" }
                    on:click=play
                >
                    "\u{1F50A} Play Audio"
                </button>
                <audio
                    node_ref=state.audio_ref
                    class="w-full"
                    controls=true
                    style:display=audio_display
                    src=move || result.with(|r| r.as_ref().and_then(|r| r.audio_url.clone()))
                ></audio>
            </div>
        </div>
    }
}
