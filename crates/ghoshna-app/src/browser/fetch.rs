use async_trait::async_trait;
use ghoshna_core::api::{HttpRequest, HttpResponse, Transport};
use ghoshna_core::ClientConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// [`Transport`] over the browser `fetch` API.
pub struct FetchTransport {
    config: ClientConfig,
}

impl FetchTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        let window = web_sys::window().ok_or("No window")?;

        let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
        if let Some(token) = &request.bearer {
            headers
                .set("Authorization", &format!("Bearer {token}"))
                .map_err(|e| format!("{e:?}"))?;
        }

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| format!("{e:?}"))?;
            init.set_body(&JsValue::from_str(body));
        }
        init.set_headers(&headers.into());

        let url = self.config.url(&request.path);
        let req = Request::new_with_str_and_init(&url, &init).map_err(|e| format!("{e:?}"))?;

        let resp_js = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| format!("Fetch failed: {e:?}"))?;
        let response: Response = resp_js.dyn_into().map_err(|_| "Not a Response")?;

        let text = JsFuture::from(response.text().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("Read failed: {e:?}"))?;

        Ok(HttpResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
