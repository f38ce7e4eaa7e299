use std::rc::Rc;

use ghoshna_core::controllers::{AuthController, AuthForm};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::browser::fetch::FetchTransport;
use crate::browser::storage::BrowserStorage;
use crate::browser::{client_config, dom};
use crate::components::notice_banner::NoticeBanner;
use crate::state::AuthState;

type Controller = AuthController<AuthState, BrowserStorage, FetchTransport>;
type SharedController = StoredValue<Rc<Controller>, LocalStorage>;

#[component]
pub fn AuthPage() -> impl IntoView {
    let state = AuthState::new();
    let config = client_config();
    let ctrl: SharedController = StoredValue::new_local(Rc::new(AuthController::new(
        state,
        BrowserStorage,
        FetchTransport::new(&config),
        config,
    )));
    provide_context(state);
    provide_context(ctrl);

    spawn_local(async move {
        let ctrl = ctrl.get_value();
        ctrl.check_existing_session(&dom::pathname()).await;
    });

    view! {
        <main class="min-h-screen flex items-center justify-center px-4">
            <div class="card w-full max-w-md space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                        "Ghoshna"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Translation & announcement studio"
                    </p>
                </div>

                <NoticeBanner slot=state.notice />

                {move || match state.form.get() {
                    AuthForm::Login => view! { <LoginForm /> }.into_any(),
                    AuthForm::Signup => view! { <SignupForm /> }.into_any(),
                }}
            </div>
        </main>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = expect_context::<AuthState>();
    let ctrl = expect_context::<SharedController>();

    let busy = move || state.submitting.get() == Some(AuthForm::Login);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let username = state.login_username.get_untracked();
        let password = state.login_password.get_untracked();
        spawn_local(async move {
            let ctrl = ctrl.get_value();
            if let Err(e) = ctrl.submit_login(&username, &password).await {
                log::debug!("login rejected: {e}");
            }
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <h2 class="text-lg font-semibold">"Login"</h2>
            <input
                id="loginUsername"
                class="input"
                type="text"
                placeholder="Username"
                prop:value=move || state.login_username.get()
                on:input=move |ev| state.login_username.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="password"
                placeholder="Password"
                prop:value=move || state.login_password.get()
                on:input=move |ev| state.login_password.set(event_target_value(&ev))
            />
            <button class="btn-primary w-full" type="submit" disabled=busy>
                {move || AuthForm::Login.submit_label(busy())}
            </button>
            <p class="text-sm text-center text-gray-500 dark:text-gray-400">
                "Don't have an account? "
                <a
                    href="#"
                    class="text-indigo-600"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        ctrl.with_value(|c| c.show_signup());
                    }
                >
                    "Sign up"
                </a>
            </p>
        </form>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let state = expect_context::<AuthState>();
    let ctrl = expect_context::<SharedController>();

    let busy = move || state.submitting.get() == Some(AuthForm::Signup);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let username = state.signup_username.get_untracked();
        let password = state.signup_password.get_untracked();
        let confirm = state.signup_confirm.get_untracked();
        spawn_local(async move {
            let ctrl = ctrl.get_value();
            if let Err(e) = ctrl.submit_signup(&username, &password, &confirm).await {
                log::debug!("signup rejected: {e}");
            }
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <h2 class="text-lg font-semibold">"Sign Up"</h2>
            <input
                class="input"
                type="text"
                placeholder="Username"
                prop:value=move || state.signup_username.get()
                on:input=move |ev| state.signup_username.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="password"
                placeholder="Password"
                prop:value=move || state.signup_password.get()
                on:input=move |ev| state.signup_password.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="password"
                placeholder="Confirm password"
                prop:value=move || state.signup_confirm.get()
                on:input=move |ev| state.signup_confirm.set(event_target_value(&ev))
            />
            <button class="btn-primary w-full" type="submit" disabled=busy>
                {move || AuthForm::Signup.submit_label(busy())}
            </button>
            <p class="text-sm text-center text-gray-500 dark:text-gray-400">
                "Already have an account? "
                <a
                    href="#"
                    class="text-indigo-600"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        ctrl.with_value(|c| c.show_login());
                    }
                >
                    "Login"
                </a>
            </p>
        </form>
    }
}
