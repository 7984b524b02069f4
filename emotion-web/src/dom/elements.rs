//! Page element lookup - done once at startup

use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlVideoElement,
};

use crate::config::ElementIds;
use crate::error::ClientError;

/// Every element the client reads or writes
pub struct PageElements {
    pub document: Document,
    pub upload_form: HtmlFormElement,
    pub status: HtmlElement,
    pub emotion_badge: HtmlElement,
    pub breakdown: HtmlElement,
    pub preview_image: HtmlImageElement,
    pub video: HtmlVideoElement,
    pub capture_button: HtmlButtonElement,
    pub camera_toggle: HtmlButtonElement,
    /// Off-screen raster surface for snapshots
    pub canvas: HtmlCanvasElement,
}

impl PageElements {
    pub fn lookup(document: &Document, ids: &ElementIds) -> Result<Self, ClientError> {
        let canvas = document
            .create_element("canvas")
            .map_err(ClientError::dom)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ClientError::Dom("created element is not a canvas".to_string()))?;

        Ok(Self {
            document: document.clone(),
            upload_form: find(document, &ids.upload_form, "HtmlFormElement")?,
            status: find(document, &ids.status, "HtmlElement")?,
            emotion_badge: find(document, &ids.emotion_badge, "HtmlElement")?,
            breakdown: find(document, &ids.breakdown, "HtmlElement")?,
            preview_image: find(document, &ids.preview_image, "HtmlImageElement")?,
            video: find(document, &ids.video, "HtmlVideoElement")?,
            capture_button: find(document, &ids.capture_button, "HtmlButtonElement")?,
            camera_toggle: find(document, &ids.camera_toggle, "HtmlButtonElement")?,
            canvas,
        })
    }
}

fn find<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, ClientError> {
    let missing = || ClientError::MissingElement {
        id: id.to_string(),
        expected,
    };
    document
        .get_element_by_id(id)
        .ok_or_else(missing)?
        .dyn_into::<T>()
        .map_err(|_| missing())
}
