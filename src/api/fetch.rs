//! Browser Transport
//!
//! `HttpTransport` backed by `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(network_error)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value).map_err(network_error)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(network_error)?;
        let response: Response = value.dyn_into().map_err(network_error)?;

        let location = response.headers().get("location").ok().flatten();
        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;

        Ok(HttpResponse {
            status: response.status(),
            location,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

/// fetch rejects with a `TypeError` on transport failure
fn network_error(err: JsValue) -> ApiError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", err));
    ApiError::Network(message)
}
