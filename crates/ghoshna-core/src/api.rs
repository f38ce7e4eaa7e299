//! Wire types and the HTTP client for the backend endpoints.
//!
//! The client only knows how to build requests and interpret responses; the
//! actual I/O goes through a [`Transport`], which the browser bundle
//! implements with `fetch`.

use std::fmt;

use async_trait::async_trait;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// JSON body; sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for its response. An `Err` means no response
/// was received at all.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateAudioRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateAudioResponse {
    pub audio_url: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_languages: Vec<String>,
    pub source_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationResult {
    #[serde(default)]
    pub language: Option<String>,
    pub translated_text: String,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslateResponse {
    #[serde(default)]
    pub results: Vec<TranslationResult>,
}

/// Language code to display name, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog(Vec<(String, String)>);

impl LanguageCatalog {
    pub fn name(&self, code: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, name)| name.as_str())
    }

    /// Display name for `code`, or the code itself when unknown.
    pub fn name_or_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.name(code).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

impl<'de> Deserialize<'de> for LanguageCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = LanguageCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language code to display name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((code, name)) = map.next_entry::<String, String>()? {
                    entries.push((code, name));
                }
                Ok(LanguageCatalog(entries))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupportedLanguages {
    pub languages: LanguageCatalog,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Typed access to the backend endpoints.
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post("/login", None, credentials).await
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<SignupResponse, ApiError> {
        self.post("/signup", None, credentials).await
    }

    pub async fn me(&self, token: &str) -> Result<CurrentUser, ApiError> {
        self.get("/me", Some(token)).await
    }

    pub async fn supported_languages(&self) -> Result<LanguageCatalog, ApiError> {
        let body: SupportedLanguages = self.get("/supported-languages", None).await?;
        Ok(body.languages)
    }

    pub async fn generate_audio(
        &self,
        token: &str,
        request: &GenerateAudioRequest,
    ) -> Result<GenerateAudioResponse, ApiError> {
        self.post("/generate-audio", Some(token), request).await
    }

    pub async fn translate_and_speak(
        &self,
        token: &str,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, ApiError> {
        self.post("/translate-and-speak", Some(token), request).await
    }

    async fn get<R: DeserializeOwned>(&self, path: &str, bearer: Option<&str>) -> Result<R, ApiError> {
        self.execute(HttpRequest {
            method: Method::Get,
            path: path.to_string(),
            bearer: bearer.map(str::to_string),
            body: None,
        })
        .await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(HttpRequest {
            method: Method::Post,
            path: path.to_string(),
            bearer: bearer.map(str::to_string),
            body: Some(body),
        })
        .await
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        log::debug!("{} {path}", method.as_str());

        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Transport)?;

        if !response.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|b| b.detail);
            log::warn!("{} {path} failed with HTTP {}", method.as_str(), response.status);
            return Err(if response.status == 401 {
                ApiError::Unauthorized { detail }
            } else {
                ApiError::Status {
                    status: response.status,
                    detail,
                }
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::FakeTransport;

    #[test]
    fn test_catalog_keeps_server_order() {
        let body = r#"{"languages": {"ta": "Tamil", "en": "English", "hi": "Hindi"}}"#;
        let parsed: SupportedLanguages = serde_json::from_str(body).unwrap();
        let codes: Vec<&str> = parsed.languages.entries().map(|(c, _)| c).collect();
        assert_eq!(codes, ["ta", "en", "hi"]);
        assert_eq!(parsed.languages.name_or_code("hi"), "Hindi");
        assert_eq!(parsed.languages.name_or_code("xx"), "xx");
    }

    #[test]
    fn test_translate_result_without_audio() {
        let body = r#"{"results": [{"translated_text": "வணக்கம்"}]}"#;
        let parsed: TranslateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].translated_text, "வணக்கம்");
        assert!(parsed.results[0].audio_url.is_none());
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"access_token": "tok123", "token_type": "bearer"}));
        let client = ApiClient::new(transport.clone());

        let response = client
            .login(&Credentials {
                username: "bob".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.access_token, "tok123");
        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/login");
        assert_eq!(sent[0].bearer, None);
        assert_eq!(
            transport.body_json(0),
            json!({"username": "bob", "password": "secret1"})
        );
    }

    #[tokio::test]
    async fn test_me_uses_bearer() {
        let transport = FakeTransport::new();
        transport.respond(200, json!({"username": "bob"}));
        let client = ApiClient::new(transport.clone());

        let user = client.me("tok123").await.unwrap();

        assert_eq!(user.username, "bob");
        assert_eq!(transport.requests()[0].method, Method::Get);
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("tok123"));
    }

    #[tokio::test]
    async fn test_status_errors_carry_detail() {
        let transport = FakeTransport::new();
        transport.respond(401, json!({"detail": "Token expired"}));
        transport.respond(400, json!({"detail": "Username already exists"}));
        transport.respond_raw(500, "Internal Server Error");
        let client = ApiClient::new(transport.clone());

        let err = client.me("stale").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Token expired"));

        let creds = Credentials {
            username: "bob".into(),
            password: "secret1".into(),
        };
        let err = client.signup(&creds).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: Some("Username already exists".into())
            }
        );

        let err = client.login(&creds).await.unwrap_err();
        assert_eq!(err.detail(), None);
        assert!(err.is_server_reported());
    }

    #[tokio::test]
    async fn test_transport_and_decode_errors() {
        let transport = FakeTransport::new();
        transport.fail("Failed to fetch");
        transport.respond_raw(200, "<html>");
        let client = ApiClient::new(transport.clone());

        let err = client.supported_languages().await.unwrap_err();
        assert_eq!(err, ApiError::Transport("Failed to fetch".into()));

        let err = client.supported_languages().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
