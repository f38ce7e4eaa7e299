//! Announcement generation on `/dashboard`.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::announcements::{announcement, download_filename};
use crate::api::{ApiClient, CurrentUser, GenerateAudioRequest, LanguageCatalog, Transport};
use crate::busy::{BusyGuard, ReentryGuard};
use crate::config::ClientConfig;
use crate::error::{ApiError, PageError};
use crate::notice::Notice;
use crate::page::ROOT_PATH;
use crate::session::{KeyValueStore, Session};

/// Audio generated for one announcement, shown until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementAudio {
    pub announcement_id: u8,
    pub language: String,
    pub language_name: String,
    pub text: String,
    pub audio_url: String,
}

pub trait DashboardView {
    fn show_welcome(&self, username: &str);
    /// Replaces the language selector options with `catalog`.
    fn populate_languages(&self, catalog: &LanguageCatalog);
    fn select_language(&self, code: &str);
    fn show_notice(&self, notice: Notice);
    fn clear_notice(&self);
    fn set_loading(&self, loading: bool);
    /// Marks one announcement card as active, or none.
    fn set_active(&self, id: Option<u8>);
    fn show_audio(&self, audio: &AnnouncementAudio);
    fn hide_audio(&self);
    fn download(&self, url: &str, filename: &str);
    fn navigate(&self, path: &str, delay: Duration);
}

pub struct DashboardController<V, S, T> {
    view: V,
    session: Session<S>,
    api: ApiClient<T>,
    config: ClientConfig,
    user: RefCell<Option<CurrentUser>>,
    catalog: RefCell<LanguageCatalog>,
    selected: RefCell<Option<String>>,
    audio: RefCell<Option<AnnouncementAudio>>,
    initializing: Cell<bool>,
    // Sequence number of the most recent generation request.
    latest_request: Cell<u64>,
}

impl<V: DashboardView, S: KeyValueStore, T: Transport> DashboardController<V, S, T> {
    pub fn new(view: V, store: S, transport: T, config: ClientConfig) -> Self {
        Self {
            view,
            session: Session::new(store),
            api: ApiClient::new(transport),
            config,
            user: RefCell::new(None),
            catalog: RefCell::new(LanguageCatalog::default()),
            selected: RefCell::new(None),
            audio: RefCell::new(None),
            initializing: Cell::new(false),
            latest_request: Cell::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.borrow().clone()
    }

    pub fn selected_language(&self) -> Option<String> {
        self.selected.borrow().clone()
    }

    pub fn language_name(&self, code: &str) -> String {
        self.catalog.borrow().name_or_code(code).to_string()
    }

    /// Loads the user, the language catalog and the saved language. A call
    /// made while another is still running does nothing.
    pub async fn init(&self) -> Result<(), PageError> {
        let Some(_guard) = ReentryGuard::try_enter(&self.initializing) else {
            log::debug!("dashboard already initializing, skipping");
            return Ok(());
        };
        log::info!("initializing dashboard");

        if !self.session.is_authenticated() {
            log::info!("no token found, redirecting to login");
            self.view.navigate(ROOT_PATH, Duration::ZERO);
            return Err(PageError::NoSession);
        }

        let mut first_error = None;

        match self.load_current_user().await {
            Ok(()) => {}
            Err(PageError::NoSession) => return Err(PageError::NoSession),
            Err(err) => first_error = Some(err),
        }

        if let Err(err) = self.load_languages().await {
            first_error.get_or_insert(err);
        }
        self.restore_language();

        match first_error {
            Some(err) => Err(err),
            None => {
                log::info!("dashboard initialized");
                Ok(())
            }
        }
    }

    async fn load_current_user(&self) -> Result<(), PageError> {
        let Some(token) = self.session.token() else {
            self.view.navigate(ROOT_PATH, Duration::ZERO);
            return Err(PageError::NoSession);
        };

        match self.api.me(&token).await {
            Ok(user) => {
                log::info!("authenticated as {}", user.username);
                self.view.show_welcome(&user.username);
                *self.user.borrow_mut() = Some(user);
                Ok(())
            }
            Err(err) if err.is_unauthorized() => {
                log::info!("token expired or invalid, redirecting to login");
                self.session.clear();
                self.view.navigate(ROOT_PATH, Duration::ZERO);
                Err(PageError::NoSession)
            }
            Err(err) => {
                log::error!("failed to load current user: {err}");
                self.view.show_notice(Notice::error(
                    "Network error. Please check your connection and refresh.",
                ));
                Err(err.into())
            }
        }
    }

    async fn load_languages(&self) -> Result<(), PageError> {
        match self.api.supported_languages().await {
            Ok(catalog) => {
                self.view.populate_languages(&catalog);
                *self.catalog.borrow_mut() = catalog;
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load languages: {err}");
                self.view
                    .show_notice(Notice::error("Failed to load supported languages"));
                Err(err.into())
            }
        }
    }

    fn restore_language(&self) {
        let Some(saved) = self.session.selected_language() else {
            return;
        };
        if self.catalog.borrow().contains(&saved) {
            self.view.select_language(&saved);
            let name = self.language_name(&saved);
            *self.selected.borrow_mut() = Some(saved);
            self.view
                .show_notice(Notice::info(format!("Welcome back! Language set to {name}")));
        } else {
            log::debug!("saved language {saved} no longer offered, removing");
            self.session.forget_language();
        }
    }

    pub fn select_language(&self, code: &str) {
        if code.is_empty() {
            return;
        }
        self.session.store_language(code);
        *self.selected.borrow_mut() = Some(code.to_string());
        let name = self.language_name(code);
        self.view.show_notice(Notice::success(
            format!("Language set to {name}"),
            self.config.dashboard_notice_ttl,
        ));
    }

    /// Requests audio for announcement `id` in the selected language.
    ///
    /// Requests may overlap; only the most recent one updates the page when
    /// it completes.
    pub async fn generate(&self, id: u8) -> Result<(), PageError> {
        let Some(preset) = announcement(id) else {
            log::warn!("unknown announcement {id}");
            return Ok(());
        };
        let Some(language) = self.selected_language() else {
            self.view
                .show_notice(Notice::error("Please select a language first"));
            return Err(PageError::NoLanguageSelected);
        };

        self.view.set_active(Some(id));
        self.view.clear_notice();

        let Some(token) = self.session.token() else {
            self.view.navigate(ROOT_PATH, Duration::ZERO);
            return Err(PageError::NoSession);
        };

        let ticket = self.latest_request.get() + 1;
        self.latest_request.set(ticket);

        let request = GenerateAudioRequest {
            text: preset.text.to_string(),
            language: language.clone(),
        };
        let _loading = BusyGuard::acquire(move |b| {
            if b || self.is_latest(ticket) {
                self.view.set_loading(b);
            }
        });
        let result = self.api.generate_audio(&token, &request).await;

        if !self.is_latest(ticket) {
            log::debug!("announcement {id} superseded by a newer request");
            return Ok(());
        }

        match result {
            Ok(response) => {
                let audio = AnnouncementAudio {
                    announcement_id: id,
                    language_name: self.language_name(&language),
                    language,
                    text: preset.text.to_string(),
                    audio_url: response.audio_url,
                };
                self.view.show_audio(&audio);
                *self.audio.borrow_mut() = Some(audio);
                self.view.show_notice(Notice::success(
                    "Announcement generated successfully!",
                    self.config.dashboard_notice_ttl,
                ));
                Ok(())
            }
            Err(err) => {
                log::error!("announcement generation failed: {err}");
                let reason = match &err {
                    ApiError::Transport(_) => "Network error. Please check your connection.",
                    _ => err.detail().unwrap_or("Failed to generate announcement"),
                };
                self.view.show_notice(Notice::error(format!("Error: {reason}")));
                self.view.set_active(None);
                Err(err.into())
            }
        }
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest_request.get() == ticket
    }

    /// Saves the current audio, named after `epoch_millis`.
    pub fn download(&self, epoch_millis: u64) {
        if let Some(audio) = self.audio.borrow().as_ref() {
            self.view
                .download(&audio.audio_url, &download_filename(epoch_millis));
        }
    }

    pub fn new_announcement(&self) {
        self.close_audio();
        self.view
            .show_notice(Notice::info("Select another train announcement"));
    }

    pub fn dismiss(&self) {
        self.close_audio();
        self.view.clear_notice();
    }

    fn close_audio(&self) {
        self.view.hide_audio();
        self.view.set_active(None);
    }

    pub fn logout(&self) {
        log::info!("logging out from dashboard");
        self.session.clear();
        self.view.show_notice(Notice::success(
            "Logged out successfully",
            self.config.dashboard_notice_ttl,
        ));
        self.view
            .navigate(ROOT_PATH, self.config.logout_redirect_delay);
    }
}
