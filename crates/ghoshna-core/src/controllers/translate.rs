//! Free-text translation with speech on `/translate`.

use std::cell::RefCell;
use std::time::Duration;

use crate::api::{ApiClient, TranslateRequest, Transport};
use crate::busy::BusyGuard;
use crate::config::ClientConfig;
use crate::error::{PageError, ValidationError};
use crate::languages::{language_name, AUTO_DETECT, DEFAULT_TARGET};
use crate::page::ROOT_PATH;
use crate::session::{KeyValueStore, Session};
use crate::validation::{swap_languages, text_length, validate_translation, CharCounter};

const TRANSLATE_FAILED: &str = "Failed to translate text. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateForm {
    pub text: String,
    pub source: String,
    pub target: String,
}

/// What the result panel shows for one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDisplay {
    pub original_text: String,
    pub original_language: String,
    pub translated_text: String,
    pub translated_language: String,
    /// Playback controls are only revealed when this is set.
    pub audio_url: Option<String>,
}

pub trait TranslateView {
    fn set_languages(&self, source: &str, target: &str);
    fn clear_input(&self);
    fn set_counter(&self, counter: CharCounter);
    /// Shows the spinner and disables the submit control, or the reverse.
    fn set_translating(&self, translating: bool);
    fn show_error(&self, message: &str, ttl: Duration);
    fn hide_error(&self);
    fn show_result(&self, display: &TranslationDisplay);
    fn hide_result(&self);
    fn reset_input_height(&self);
    fn navigate(&self, path: &str, delay: Duration);
}

pub fn submit_label(translating: bool) -> &'static str {
    if translating {
        "\u{23F3} Translating..."
    } else {
        "\u{1F310} Translate & Speak"
    }
}

pub struct TranslateController<V, S, T> {
    view: V,
    session: Session<S>,
    api: ApiClient<T>,
    config: ClientConfig,
    result: RefCell<Option<TranslationDisplay>>,
}

impl<V: TranslateView, S: KeyValueStore, T: Transport> TranslateController<V, S, T> {
    pub fn new(view: V, store: S, transport: T, config: ClientConfig) -> Self {
        Self {
            view,
            session: Session::new(store),
            api: ApiClient::new(transport),
            config,
            result: RefCell::new(None),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn result(&self) -> Option<TranslationDisplay> {
        self.result.borrow().clone()
    }

    pub fn init(&self) -> Result<(), PageError> {
        log::info!("initializing translate page");
        if !self.session.is_authenticated() {
            log::info!("no token found, redirecting to login");
            self.view.navigate(ROOT_PATH, Duration::ZERO);
            return Err(PageError::NoSession);
        }
        self.view.set_languages(AUTO_DETECT, DEFAULT_TARGET);
        self.view.set_counter(self.counter(0));
        Ok(())
    }

    pub async fn submit(&self, form: &TranslateForm) -> Result<(), PageError> {
        let text = validate_translation(&form.text, &form.source, &form.target)
            .map_err(|err| self.reject(err))?;
        let Some(token) = self.session.token() else {
            self.logout();
            return Err(PageError::NoSession);
        };

        let request = TranslateRequest {
            text: text.to_string(),
            target_languages: vec![form.target.clone()],
            source_language: form.source.clone(),
        };

        let _busy = BusyGuard::acquire(|b| self.view.set_translating(b));
        self.view.hide_error();
        self.view.hide_result();

        let response = match self.api.translate_and_speak(&token, &request).await {
            Ok(response) => response,
            Err(err) if err.is_unauthorized() => {
                self.logout();
                return Err(err.into());
            }
            Err(err) => {
                log::error!("translation error: {err}");
                self.show_error(TRANSLATE_FAILED);
                return Err(err.into());
            }
        };

        let Some(first) = response.results.into_iter().next() else {
            log::error!("translation error: no results received");
            self.show_error(TRANSLATE_FAILED);
            return Err(PageError::EmptyResult);
        };

        let display = TranslationDisplay {
            original_text: text.to_string(),
            original_language: format!("Language: {}", language_name(&form.source)),
            translated_text: first.translated_text,
            translated_language: format!("Language: {}", language_name(&form.target)),
            audio_url: first.audio_url.filter(|url| !url.is_empty()),
        };
        self.view.show_result(&display);
        *self.result.borrow_mut() = Some(display);
        Ok(())
    }

    pub fn swap(&self, source: &str, target: &str) -> Result<(), PageError> {
        let (source, target) = swap_languages(source, target).map_err(|err| self.reject(err))?;
        self.view.set_languages(&source, &target);
        Ok(())
    }

    pub fn clear(&self) {
        self.view.clear_input();
        self.view.set_languages(AUTO_DETECT, DEFAULT_TARGET);
        self.view.set_counter(self.counter(0));
        self.view.hide_result();
        self.view.hide_error();
        self.view.reset_input_height();
        *self.result.borrow_mut() = None;
    }

    pub fn input_changed(&self, text: &str) {
        self.view.set_counter(self.counter(text_length(text)));
    }

    pub fn playback_failed(&self, reason: &str) {
        log::error!("error playing audio: {reason}");
        self.show_error("Failed to play audio");
    }

    pub fn logout(&self) {
        log::info!("logging out from translate page");
        self.session.clear();
        self.view.navigate(ROOT_PATH, Duration::ZERO);
    }

    fn counter(&self, count: usize) -> CharCounter {
        CharCounter::new(
            count,
            self.config.counter_warn_above,
            self.config.counter_error_above,
        )
    }

    fn show_error(&self, message: &str) {
        self.view
            .show_error(message, self.config.translate_error_ttl);
    }

    fn reject(&self, err: ValidationError) -> PageError {
        self.show_error(&err.to_string());
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::session::{LANGUAGE_KEY, TOKEN_KEY};
    use crate::testing::{FakeTransport, MemoryStore};
    use crate::validation::CounterLevel;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Languages(String, String),
        ClearInput,
        Counter(CharCounter),
        Translating(bool),
        Error(String),
        HideError,
        Result(TranslationDisplay),
        HideResult,
        ResetHeight,
        Navigate(String, Duration),
    }

    #[derive(Default)]
    struct RecordingView {
        events: RefCell<Vec<Event>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn push(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }

        fn errors(&self) -> Vec<String> {
            self.events
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    Event::Error(m) => Some(m.clone()),
                    _ => None,
                })
                .collect()
        }
    }

    impl TranslateView for RecordingView {
        fn set_languages(&self, source: &str, target: &str) {
            self.push(Event::Languages(source.to_string(), target.to_string()));
        }
        fn clear_input(&self) {
            self.push(Event::ClearInput);
        }
        fn set_counter(&self, counter: CharCounter) {
            self.push(Event::Counter(counter));
        }
        fn set_translating(&self, translating: bool) {
            self.push(Event::Translating(translating));
        }
        fn show_error(&self, message: &str, _ttl: Duration) {
            self.push(Event::Error(message.to_string()));
        }
        fn hide_error(&self) {
            self.push(Event::HideError);
        }
        fn show_result(&self, display: &TranslationDisplay) {
            self.push(Event::Result(display.clone()));
        }
        fn hide_result(&self) {
            self.push(Event::HideResult);
        }
        fn reset_input_height(&self) {
            self.push(Event::ResetHeight);
        }
        fn navigate(&self, path: &str, delay: Duration) {
            self.push(Event::Navigate(path.to_string(), delay));
        }
    }

    type Controller = TranslateController<RecordingView, MemoryStore, FakeTransport>;

    fn controller(store: &MemoryStore, transport: &FakeTransport) -> Controller {
        TranslateController::new(
            RecordingView::default(),
            store.clone(),
            transport.clone(),
            ClientConfig::default(),
        )
    }

    fn signed_in() -> MemoryStore {
        MemoryStore::with(&[(TOKEN_KEY, "tok123"), (LANGUAGE_KEY, "hi")])
    }

    fn form(text: &str, source: &str, target: &str) -> TranslateForm {
        TranslateForm {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    #[test]
    fn test_init_requires_token() {
        let ctrl = controller(&MemoryStore::new(), &FakeTransport::new());
        assert_eq!(ctrl.init(), Err(PageError::NoSession));
        assert_eq!(
            ctrl.view().events(),
            [Event::Navigate("/".into(), Duration::ZERO)]
        );
    }

    #[test]
    fn test_init_defaults_to_tamil() {
        let ctrl = controller(&signed_in(), &FakeTransport::new());
        ctrl.init().unwrap();
        assert_eq!(
            ctrl.view().events()[0],
            Event::Languages("auto".into(), "ta".into())
        );
    }

    #[tokio::test]
    async fn test_translate_without_audio() {
        let store = signed_in();
        let transport = FakeTransport::new();
        transport.respond(200, json!({"results": [{"translated_text": "வணக்கம்"}]}));
        let ctrl = controller(&store, &transport);

        ctrl.submit(&form("Hello", "auto", "ta")).await.unwrap();

        assert_eq!(transport.paths(), ["/translate-and-speak"]);
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("tok123"));
        assert_eq!(
            transport.body_json(0),
            json!({"text": "Hello", "target_languages": ["ta"], "source_language": "auto"})
        );
        let display = TranslationDisplay {
            original_text: "Hello".into(),
            original_language: "Language: Auto-detect".into(),
            translated_text: "வணக்கம்".into(),
            translated_language: "Language: Tamil".into(),
            audio_url: None,
        };
        assert_eq!(
            ctrl.view().events(),
            [
                Event::Translating(true),
                Event::HideError,
                Event::HideResult,
                Event::Result(display.clone()),
                Event::Translating(false),
            ]
        );
        assert_eq!(ctrl.result(), Some(display));
    }

    #[tokio::test]
    async fn test_translate_with_audio_trims_text() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            json!({"results": [{"language": "hi", "translated_text": "नमस्ते", "audio_url": "/static/audio/voice_9.mp3"}]}),
        );
        let ctrl = controller(&signed_in(), &transport);

        ctrl.submit(&form("  Hello  ", "en", "hi")).await.unwrap();

        assert_eq!(transport.body_json(0)["text"], "Hello");
        let result = ctrl.result().unwrap();
        assert_eq!(result.audio_url.as_deref(), Some("/static/audio/voice_9.mp3"));
        assert_eq!(result.original_language, "Language: English");
        assert_eq!(result.translated_language, "Language: Hindi");
    }

    #[tokio::test]
    async fn test_validation_blocks_request() {
        let transport = FakeTransport::new();
        let ctrl = controller(&signed_in(), &transport);

        assert!(ctrl.submit(&form("   ", "auto", "ta")).await.is_err());
        assert!(ctrl.submit(&form("Hello", "ta", "ta")).await.is_err());

        assert!(transport.requests().is_empty());
        assert_eq!(
            ctrl.view().errors(),
            [
                "Please enter text to translate",
                "Source and target languages cannot be the same",
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_results_and_failures_are_generic() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"results": []}));
        transport.respond(500, json!({"detail": "Failed to translate text: quota"}));
        transport.fail("Failed to fetch");
        let ctrl = controller(&signed_in(), &transport);

        assert_eq!(
            ctrl.submit(&form("Hello", "auto", "ta")).await,
            Err(PageError::EmptyResult)
        );
        assert!(ctrl.submit(&form("Hello", "auto", "ta")).await.is_err());
        assert!(ctrl.submit(&form("Hello", "auto", "ta")).await.is_err());

        assert_eq!(ctrl.view().errors(), vec![TRANSLATE_FAILED; 3]);
        assert_eq!(ctrl.result(), None);
        assert_eq!(ctrl.view().events().last(), Some(&Event::Translating(false)));
    }

    #[tokio::test]
    async fn test_unauthorized_logs_out() {
        let store = signed_in();
        let transport = FakeTransport::new();
        transport.respond(401, json!({"detail": "Token expired"}));
        let ctrl = controller(&store, &transport);

        let err = ctrl.submit(&form("Hello", "auto", "ta")).await.unwrap_err();

        assert!(matches!(err, PageError::Api(ApiError::Unauthorized { .. })));
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(LANGUAGE_KEY), None);
        assert!(ctrl
            .view()
            .events()
            .contains(&Event::Navigate("/".into(), Duration::ZERO)));
        assert!(ctrl.view().errors().is_empty());
    }

    #[test]
    fn test_swap() {
        let ctrl = controller(&signed_in(), &FakeTransport::new());

        ctrl.swap("en", "ta").unwrap();
        assert_eq!(
            ctrl.view().events(),
            [Event::Languages("ta".into(), "en".into())]
        );

        assert!(ctrl.swap("auto", "ta").is_err());
        assert_eq!(
            ctrl.view().errors(),
            ["Cannot swap when source language is auto-detect"]
        );
        assert_eq!(ctrl.view().events().len(), 2);
    }

    #[test]
    fn test_double_swap_restores_pair() {
        let ctrl = controller(&signed_in(), &FakeTransport::new());

        ctrl.swap("en", "ta").unwrap();
        ctrl.swap("ta", "en").unwrap();

        assert_eq!(
            ctrl.view().events(),
            [
                Event::Languages("ta".into(), "en".into()),
                Event::Languages("en".into(), "ta".into()),
            ]
        );
    }

    #[test]
    fn test_clear_resets_form() {
        let ctrl = controller(&signed_in(), &FakeTransport::new());
        ctrl.clear();
        assert_eq!(
            ctrl.view().events(),
            [
                Event::ClearInput,
                Event::Languages("auto".into(), "ta".into()),
                Event::Counter(CharCounter::new(0, 4500, 5000)),
                Event::HideResult,
                Event::HideError,
                Event::ResetHeight,
            ]
        );
    }

    #[test]
    fn test_counter_tracks_input() {
        let ctrl = controller(&signed_in(), &FakeTransport::new());
        ctrl.input_changed(&"a".repeat(4600));
        ctrl.input_changed(&"a".repeat(5200));
        let levels: Vec<(usize, CounterLevel)> = ctrl
            .view()
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Counter(c) => Some((c.count, c.level)),
                _ => None,
            })
            .collect();
        assert_eq!(
            levels,
            [(4600, CounterLevel::Warning), (5200, CounterLevel::Error)]
        );
    }

    #[test]
    fn test_playback_failure_and_logout() {
        let store = signed_in();
        let ctrl = controller(&store, &FakeTransport::new());

        ctrl.playback_failed("NotAllowedError");
        ctrl.logout();

        assert_eq!(ctrl.view().errors(), ["Failed to play audio"]);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(
            ctrl.view().events().last(),
            Some(&Event::Navigate("/".into(), Duration::ZERO))
        );
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(true), "\u{23F3} Translating...");
        assert_eq!(submit_label(false), "\u{1F310} Translate & Speak");
    }
}
