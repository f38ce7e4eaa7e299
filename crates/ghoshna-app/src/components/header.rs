use leptos::prelude::*;

#[component]
pub fn Header(
    /// Link to the other signed-in page, as `(href, label)`.
    link: (&'static str, &'static str),
    #[prop(optional)] welcome: Option<RwSignal<String>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let toggle_dark = move |_| {
        let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = html.class_list().toggle("dark");
    };

    let (href, label) = link;

    view! {
        <header class="border-b border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <h1 class="text-2xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                        "Ghoshna"
                    </h1>
                    {welcome.map(|welcome| view! {
                        <span class="text-sm text-gray-500 dark:text-gray-400 hidden sm:inline">
                            {move || welcome.get()}
                        </span>
                    })}
                </div>

                <div class="flex items-center gap-3">
                    <a class="btn-secondary text-sm" href=href>{label}</a>
                    <button class="btn-secondary text-sm" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                    <button
                        class="p-2 rounded-lg bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=toggle_dark
                        title="Toggle dark mode"
                    >
                        <span class="text-sm">{"\u{263E}"}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}
