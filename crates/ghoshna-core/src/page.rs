/// Which page the bundle is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Auth,
    Dashboard,
    Translate,
}

pub const ROOT_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const TRANSLATE_PATH: &str = "/translate";

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            DASHBOARD_PATH => Self::Dashboard,
            TRANSLATE_PATH => Self::Translate,
            _ => Self::Auth,
        }
    }
}

/// Paths on which the stored token is checked and, if valid, skipped past.
pub fn is_login_path(path: &str) -> bool {
    path == ROOT_PATH || path == "/index.html"
}
