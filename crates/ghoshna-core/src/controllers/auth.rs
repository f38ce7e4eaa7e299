//! Login and signup on the root page.

use std::time::Duration;

use crate::api::{ApiClient, Credentials, Transport};
use crate::busy::BusyGuard;
use crate::config::ClientConfig;
use crate::error::{ApiError, PageError};
use crate::notice::Notice;
use crate::page::{is_login_path, DASHBOARD_PATH};
use crate::session::{KeyValueStore, Session};
use crate::validation::validate_credentials;

const NETWORK_ERROR: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Signup,
}

impl AuthForm {
    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Signup, false) => "Sign Up",
            (Self::Signup, true) => "Creating Account...",
        }
    }

    fn fallback_error(&self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Signup => "Signup failed",
        }
    }
}

pub trait AuthView {
    fn show_form(&self, form: AuthForm);
    fn show_notice(&self, notice: Notice);
    fn clear_notice(&self);
    /// Disables or re-enables the form's submit control.
    fn set_submitting(&self, form: AuthForm, submitting: bool);
    /// After `delay`, shows the login form with `username` filled in.
    fn switch_to_login_after(&self, username: &str, delay: Duration);
    fn navigate(&self, path: &str, delay: Duration);
}

pub struct AuthController<V, S, T> {
    view: V,
    session: Session<S>,
    api: ApiClient<T>,
    config: ClientConfig,
}

impl<V: AuthView, S: KeyValueStore, T: Transport> AuthController<V, S, T> {
    pub fn new(view: V, store: S, transport: T, config: ClientConfig) -> Self {
        Self {
            view,
            session: Session::new(store),
            api: ApiClient::new(transport),
            config,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn show_login(&self) {
        self.view.show_form(AuthForm::Login);
        self.view.clear_notice();
    }

    pub fn show_signup(&self) {
        self.view.show_form(AuthForm::Signup);
        self.view.clear_notice();
    }

    pub async fn submit_login(&self, username: &str, password: &str) -> Result<(), PageError> {
        self.view.clear_notice();
        self.validate(username, password, None)?;

        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = {
            let _busy = BusyGuard::acquire(|b| self.view.set_submitting(AuthForm::Login, b));
            self.api.login(&credentials).await
        };

        match result {
            Ok(response) => {
                self.session.store_token(&response.access_token);
                log::info!("logged in as {username}");
                self.view.show_notice(Notice::success(
                    "Login successful! Redirecting...",
                    self.config.auth_notice_ttl,
                ));
                self.view
                    .navigate(DASHBOARD_PATH, self.config.login_redirect_delay);
                Ok(())
            }
            Err(err) => Err(self.report(AuthForm::Login, err)),
        }
    }

    pub async fn submit_signup(
        &self,
        username: &str,
        password: &str,
        confirm: &str,
    ) -> Result<(), PageError> {
        self.view.clear_notice();
        self.validate(username, password, Some(confirm))?;

        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let result = {
            let _busy = BusyGuard::acquire(|b| self.view.set_submitting(AuthForm::Signup, b));
            self.api.signup(&credentials).await
        };

        match result {
            Ok(_) => {
                log::info!("account created for {username}");
                self.view.show_notice(Notice::success(
                    "Account created successfully! Please login.",
                    self.config.auth_notice_ttl,
                ));
                self.view
                    .switch_to_login_after(username, self.config.signup_switch_delay);
                Ok(())
            }
            Err(err) => Err(self.report(AuthForm::Signup, err)),
        }
    }

    /// On the login page, skips ahead to the dashboard when the stored token
    /// is still accepted, and silently drops it otherwise. Returns whether a
    /// redirect was issued.
    pub async fn check_existing_session(&self, path: &str) -> bool {
        if !is_login_path(path) {
            return false;
        }
        let Some(token) = self.session.token() else {
            return false;
        };

        match self.api.me(&token).await {
            Ok(_) => {
                log::info!("token valid, redirecting to dashboard");
                self.view.navigate(DASHBOARD_PATH, Duration::ZERO);
                true
            }
            Err(err) => {
                log::info!("stored token rejected ({err}), removing");
                self.session.clear();
                false
            }
        }
    }

    fn validate(
        &self,
        username: &str,
        password: &str,
        confirm: Option<&str>,
    ) -> Result<(), PageError> {
        validate_credentials(username, password, confirm).map_err(|err| {
            self.view.show_notice(Notice::error(err.to_string()));
            PageError::from(err)
        })
    }

    fn report(&self, form: AuthForm, err: ApiError) -> PageError {
        let message = if err.is_server_reported() {
            err.detail().unwrap_or(form.fallback_error()).to_string()
        } else {
            log::error!("{form:?} error: {err}");
            NETWORK_ERROR.to_string()
        };
        self.view.show_notice(Notice::error(message));
        err.into()
    }
}
