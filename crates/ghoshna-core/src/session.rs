//! Credentials and preferences persisted in client storage.

pub const TOKEN_KEY: &str = "access_token";
pub const LANGUAGE_KEY: &str = "selectedLanguage";

/// String key/value storage that outlives a page load.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The stored bearer token and selected language.
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token; an empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn selected_language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY).filter(|l| !l.is_empty())
    }

    pub fn store_language(&self, code: &str) {
        self.store.set(LANGUAGE_KEY, code);
    }

    pub fn forget_language(&self) {
        self.store.remove(LANGUAGE_KEY);
    }

    /// Drops both the token and the selected language.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(LANGUAGE_KEY);
    }
}
