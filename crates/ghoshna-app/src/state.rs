use std::time::Duration;

use ghoshna_core::api::LanguageCatalog;
use ghoshna_core::controllers::{
    AnnouncementAudio, AuthForm, AuthView, DashboardView, TranslateView, TranslationDisplay,
};
use ghoshna_core::validation::CharCounter;
use ghoshna_core::Notice;
use leptos::html;
use leptos::prelude::*;

use crate::browser::dom;

/// The message area of a page. A notice with a ttl hides itself unless a
/// newer one replaced it first.
#[derive(Clone, Copy)]
pub struct NoticeSlot {
    pub current: RwSignal<Option<Notice>>,
    pub container: NodeRef<html::Div>,
    serial: RwSignal<u64>,
    scroll: bool,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            container: NodeRef::new(),
            serial: RwSignal::new(0),
            scroll: false,
        }
    }

    /// A slot that scrolls each new notice into view.
    pub fn scrolling() -> Self {
        Self {
            scroll: true,
            ..Self::new()
        }
    }

    pub fn show(&self, notice: Notice) {
        let serial = self.bump();
        let ttl = notice.ttl;
        self.current.set(Some(notice));
        if self.scroll {
            if let Some(container) = self.container.get_untracked() {
                dom::scroll_into_view(&container);
            }
        }
        if let Some(ttl) = ttl {
            let slot = *self;
            set_timeout(
                move || {
                    if slot.serial.get_untracked() == serial {
                        slot.current.set(None);
                    }
                },
                ttl,
            );
        }
    }

    pub fn clear(&self) {
        self.bump();
        self.current.set(None);
    }

    fn bump(&self) -> u64 {
        self.serial.update(|s| *s += 1);
        self.serial.get_untracked()
    }
}

#[derive(Clone, Copy)]
pub struct AuthState {
    pub form: RwSignal<AuthForm>,
    pub login_username: RwSignal<String>,
    pub login_password: RwSignal<String>,
    pub signup_username: RwSignal<String>,
    pub signup_password: RwSignal<String>,
    pub signup_confirm: RwSignal<String>,
    pub submitting: RwSignal<Option<AuthForm>>,
    pub notice: NoticeSlot,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AuthForm::Login),
            login_username: RwSignal::new(String::new()),
            login_password: RwSignal::new(String::new()),
            signup_username: RwSignal::new(String::new()),
            signup_password: RwSignal::new(String::new()),
            signup_confirm: RwSignal::new(String::new()),
            submitting: RwSignal::new(None),
            notice: NoticeSlot::new(),
        }
    }
}

impl AuthView for AuthState {
    fn show_form(&self, form: AuthForm) {
        self.form.set(form);
    }

    fn show_notice(&self, notice: Notice) {
        self.notice.show(notice);
    }

    fn clear_notice(&self) {
        self.notice.clear();
    }

    fn set_submitting(&self, form: AuthForm, submitting: bool) {
        self.submitting.set(submitting.then_some(form));
    }

    fn switch_to_login_after(&self, username: &str, delay: Duration) {
        let state = *self;
        let username = username.to_string();
        set_timeout(
            move || {
                state.show_form(AuthForm::Login);
                state.clear_notice();
                state.login_username.set(username);
            },
            delay,
        );
    }

    fn navigate(&self, path: &str, delay: Duration) {
        dom::navigate(path, delay);
    }
}

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub welcome: RwSignal<String>,
    pub languages: RwSignal<Vec<(String, String)>>,
    pub selected_language: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub active: RwSignal<Option<u8>>,
    pub audio: RwSignal<Option<AnnouncementAudio>>,
    pub audio_section: NodeRef<html::Div>,
    pub notice: NoticeSlot,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            welcome: RwSignal::new("Welcome!".to_string()),
            languages: RwSignal::new(Vec::new()),
            selected_language: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            active: RwSignal::new(None),
            audio: RwSignal::new(None),
            audio_section: NodeRef::new(),
            notice: NoticeSlot::scrolling(),
        }
    }
}

impl DashboardView for DashboardState {
    fn show_welcome(&self, username: &str) {
        self.welcome.set(format!("Welcome, {username}!"));
    }

    fn populate_languages(&self, catalog: &LanguageCatalog) {
        self.languages.set(
            catalog
                .entries()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        );
    }

    fn select_language(&self, code: &str) {
        self.selected_language.set(code.to_string());
    }

    fn show_notice(&self, notice: Notice) {
        self.notice.show(notice);
    }

    fn clear_notice(&self) {
        self.notice.clear();
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_active(&self, id: Option<u8>) {
        self.active.set(id);
    }

    fn show_audio(&self, audio: &AnnouncementAudio) {
        self.audio.set(Some(audio.clone()));
        if let Some(section) = self.audio_section.get_untracked() {
            dom::scroll_into_view(&section);
        }
    }

    fn hide_audio(&self) {
        self.audio.set(None);
    }

    fn download(&self, url: &str, filename: &str) {
        if let Err(e) = dom::download(url, filename) {
            log::error!("download failed: {e}");
        }
    }

    fn navigate(&self, path: &str, delay: Duration) {
        dom::navigate(path, delay);
    }
}

#[derive(Clone, Copy)]
pub struct TranslateState {
    pub input: RwSignal<String>,
    pub source_language: RwSignal<String>,
    pub target_language: RwSignal<String>,
    pub counter: RwSignal<Option<CharCounter>>,
    pub translating: RwSignal<bool>,
    pub result: RwSignal<Option<TranslationDisplay>>,
    pub input_ref: NodeRef<html::Textarea>,
    pub audio_ref: NodeRef<html::Audio>,
    pub result_section: NodeRef<html::Div>,
    pub error: NoticeSlot,
}

impl TranslateState {
    pub fn new() -> Self {
        Self {
            input: RwSignal::new(String::new()),
            source_language: RwSignal::new(String::new()),
            target_language: RwSignal::new(String::new()),
            counter: RwSignal::new(None),
            translating: RwSignal::new(false),
            result: RwSignal::new(None),
            input_ref: NodeRef::new(),
            audio_ref: NodeRef::new(),
            result_section: NodeRef::new(),
            error: NoticeSlot::new(),
        }
    }
}

impl TranslateView for TranslateState {
    fn set_languages(&self, source: &str, target: &str) {
        self.source_language.set(source.to_string());
        self.target_language.set(target.to_string());
    }

    fn clear_input(&self) {
        self.input.set(String::new());
    }

    fn set_counter(&self, counter: CharCounter) {
        self.counter.set(Some(counter));
    }

    fn set_translating(&self, translating: bool) {
        self.translating.set(translating);
    }

    fn show_error(&self, message: &str, ttl: Duration) {
        self.error.show(Notice {
            ttl: Some(ttl),
            ..Notice::error(message)
        });
    }

    fn hide_error(&self) {
        self.error.clear();
    }

    fn show_result(&self, display: &TranslationDisplay) {
        self.result.set(Some(display.clone()));
        if let Some(section) = self.result_section.get_untracked() {
            dom::scroll_into_view(&section);
        }
    }

    fn hide_result(&self) {
        self.result.set(None);
    }

    fn reset_input_height(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            dom::fit_height(&input, false);
        }
    }

    fn navigate(&self, path: &str, delay: Duration) {
        dom::navigate(path, delay);
    }
}
