//! Multipart POST to the analysis endpoint via `fetch`

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::error::ClientError;
use crate::render::AnalysisResult;

/// POST `body` to `endpoint` and decode the JSON reply.
///
/// Any HTTP status is accepted as long as the body is JSON; server-side
/// failures arrive as an `error` field and are rendered, not raised.
pub async fn post_form(endpoint: &str, body: &FormData) -> Result<AnalysisResult, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(body.as_ref());

    let request = Request::new_with_str_and_init(endpoint, &init)
        .map_err(ClientError::network)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ClientError::network)?
        .dyn_into()
        .map_err(ClientError::network)?;

    let text = JsFuture::from(response.text().map_err(ClientError::network)?)
        .await
        .map_err(ClientError::network)?
        .as_string()
        .ok_or_else(|| {
            ClientError::Decode(format!("HTTP {} body is not text", response.status()))
        })?;

    AnalysisResult::from_json(&text)
}
