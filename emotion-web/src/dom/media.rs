//! Camera access and frame capture through the browser media APIs

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, FormData, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use crate::camera::StreamHandle;
use crate::error::ClientError;

const SNAPSHOT_MIME: &str = "image/jpeg";

impl StreamHandle for MediaStream {
    fn stop_tracks(&self) -> usize {
        let mut stopped = 0;
        for track in self.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
                stopped += 1;
            }
        }
        stopped
    }
}

/// Ask for a video-only stream; rejects on denial or when no device exists
pub async fn request_camera() -> Result<MediaStream, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(ClientError::camera)?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(ClientError::camera)?;
    JsFuture::from(promise)
        .await
        .map_err(ClientError::camera)?
        .dyn_into::<MediaStream>()
        .map_err(ClientError::camera)
}

/// Start playback; a rejected `play()` promise is logged, not raised
pub fn play(video: &HtmlVideoElement) {
    let promise = match video.play() {
        Ok(promise) => promise,
        Err(err) => {
            web_sys::console::warn_2(&"Video playback failed".into(), &err);
            return;
        }
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            web_sys::console::warn_2(&"Video playback failed".into(), &err);
        }
    });
}

/// Draw the current video frame at native resolution and encode it as JPEG
pub async fn capture_frame(
    canvas: &HtmlCanvasElement,
    video: &HtmlVideoElement,
    quality: f64,
) -> Result<Blob, ClientError> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let context = canvas
        .get_context("2d")
        .map_err(ClientError::capture)?
        .ok_or_else(|| ClientError::Capture("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ClientError::Capture("2d context has an unexpected type".to_string()))?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(ClientError::capture)?;

    // toBlob is callback based; bridge it into a promise
    let encoded = js_sys::Promise::new(&mut |resolve, reject| {
        let callback = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        let requested = canvas.to_blob_with_type_and_encoder_options(
            callback.unchecked_ref(),
            SNAPSHOT_MIME,
            &JsValue::from_f64(quality),
        );
        if let Err(err) = requested {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });

    let blob = JsFuture::from(encoded).await.map_err(ClientError::capture)?;
    if blob.is_null() || blob.is_undefined() {
        return Err(ClientError::Capture("canvas produced no image".to_string()));
    }
    blob.dyn_into::<Blob>().map_err(ClientError::capture)
}

/// Multipart body with the snapshot as its only field
pub fn snapshot_form(blob: &Blob, field: &str, filename: &str) -> Result<FormData, ClientError> {
    let form = FormData::new().map_err(ClientError::dom)?;
    form.append_with_blob_and_filename(field, blob, filename)
        .map_err(ClientError::dom)?;
    Ok(form)
}
