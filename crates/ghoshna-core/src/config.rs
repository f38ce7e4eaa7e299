use std::time::Duration;

/// Tunables for the page controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix joined in front of every API path. Empty means same origin.
    pub api_base: String,
    /// Delay between a successful login and the dashboard redirect.
    pub login_redirect_delay: Duration,
    /// Delay between a successful signup and the switch to the login form.
    pub signup_switch_delay: Duration,
    /// Delay between the dashboard logout notice and the redirect.
    pub logout_redirect_delay: Duration,
    pub auth_notice_ttl: Duration,
    pub dashboard_notice_ttl: Duration,
    pub translate_error_ttl: Duration,
    /// Character count above which the counter turns to the warning color.
    pub counter_warn_above: usize,
    /// Character count above which the counter turns to the error color.
    pub counter_error_above: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_redirect_delay: Duration::from_millis(1000),
            signup_switch_delay: Duration::from_millis(1500),
            logout_redirect_delay: Duration::from_millis(1000),
            auth_notice_ttl: Duration::from_secs(3),
            dashboard_notice_ttl: Duration::from_secs(5),
            translate_error_ttl: Duration::from_secs(5),
            counter_warn_above: 4500,
            counter_error_above: 5000,
        }
    }
}

impl ClientConfig {
    /// Default config pointed at `api_base`. Trailing slashes are dropped.
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
