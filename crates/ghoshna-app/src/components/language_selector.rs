use ghoshna_core::languages::{target_languages, LANGUAGES};
use leptos::ev;
use leptos::prelude::*;

use crate::state::TranslateState;

/// Source and target pickers with a swap button between them.
#[component]
pub fn LanguageSelector(on_swap: Callback<()>) -> impl IntoView {
    let state = expect_context::<TranslateState>();

    let on_source_change = move |ev: ev::Event| {
        state.source_language.set(event_target_value(&ev));
    };

    let on_target_change = move |ev: ev::Event| {
        state.target_language.set(event_target_value(&ev));
    };

    view! {
        <div class="flex flex-col sm:flex-row items-center gap-4">
            <div class="flex-1 w-full">
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    "Source Language"
                </label>
                <select
                    id="sourceLanguage"
                    class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                    on:change=on_source_change
                >
                    {LANGUAGES.iter().map(|(code, name)| {
                        let code = *code;
                        let name = *name;
                        view! {
                            <option value=code prop:selected=move || state.source_language.get() == code>
                                {name}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
            </div>

            <div class="flex items-center pt-6">
                <button
                    type="button"
                    class="btn-secondary text-xl"
                    title="Swap languages"
                    on:click=move |_| on_swap.run(())
                >
                    "\u{21C4}"
                </button>
            </div>

            <div class="flex-1 w-full">
                <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                    "Target Language"
                </label>
                <select
                    id="targetLanguage"
                    class="w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent"
                    on:change=on_target_change
                >
                    {target_languages().iter().map(|(code, name)| {
                        let code = *code;
                        let name = *name;
                        view! {
                            <option value=code prop:selected=move || state.target_language.get() == code>
                                {name}
                            </option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}
