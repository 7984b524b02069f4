//! Page event wiring and the async flows behind each control

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget, FormData};

use super::session::ClientSession;
use crate::camera::{Acquisition, ToggleAction};
use crate::config::ClientConfig;
use crate::dom;
use crate::error::ClientError;
use crate::render::{AnalysisResult, ResultView};
use crate::submit::{self, AnalysisRequest, Completion, SubmissionKind};

/// Build the session, set the initial controls and wire every handler
pub fn launch(config: ClientConfig) -> Result<(), ClientError> {
    let session = Rc::new(ClientSession::new(config)?);
    session.camera.borrow().reset_controls(&mut session.view());
    register(&session)?;

    if session.config.auto_start_camera {
        schedule_auto_start(&session)?;
    }
    Ok(())
}

/// Attach `handler` for `event`; the closure lives as long as the page
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(ClientError::dom)?;
    closure.forget();
    Ok(())
}

fn register(session: &Rc<ClientSession>) -> Result<(), ClientError> {
    let elements = &session.elements;

    let s = Rc::clone(session);
    listen(&elements.camera_toggle, "click", move |_| {
        let s = Rc::clone(&s);
        spawn_local(async move { toggle_camera(&s).await });
    })?;

    let s = Rc::clone(session);
    listen(&elements.capture_button, "click", move |_| {
        let s = Rc::clone(&s);
        spawn_local(async move { submit_snapshot(&s).await });
    })?;

    let s = Rc::clone(session);
    listen(&elements.upload_form, "submit", move |event| {
        event.prevent_default();
        // Read the form now, before the user can change the selection
        let body = FormData::new_with_form(&s.elements.upload_form)
            .map_err(ClientError::dom);
        let s = Rc::clone(&s);
        spawn_local(async move { submit_upload(&s, body).await });
    })?;

    let video = elements.video.clone();
    listen(&elements.video, "loadedmetadata", move |_| dom::play(&video))?;

    Ok(())
}

/// Request the camera once the page has finished loading
fn schedule_auto_start(session: &Rc<ClientSession>) -> Result<(), ClientError> {
    if session.elements.document.ready_state() == "complete" {
        let s = Rc::clone(session);
        spawn_local(async move { enable_camera(&s).await });
        return Ok(());
    }

    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let s = Rc::clone(session);
    listen(&window, "load", move |_| {
        let s = Rc::clone(&s);
        spawn_local(async move { enable_camera(&s).await });
    })
}

// ============================================================================
// CAMERA
// ============================================================================

async fn toggle_camera(session: &ClientSession) {
    let action = session.camera.borrow().toggle_action();
    match action {
        ToggleAction::Enable => enable_camera(session).await,
        ToggleAction::Disable => disable_camera(session),
    }
}

async fn enable_camera(session: &ClientSession) {
    match dom::request_camera().await {
        Ok(stream) => {
            let acquisition = session
                .camera
                .borrow_mut()
                .acquired(stream, &mut session.view());
            match acquisition {
                Acquisition::Attached => {
                    console_log!("📷 Camera {}", session.camera.borrow().state().as_str());
                }
                Acquisition::Surplus { stopped_tracks } => web_sys::console::warn_1(
                    &format!(
                        "Camera already active, released {} surplus track(s)",
                        stopped_tracks
                    )
                    .into(),
                ),
            }
        }
        Err(err) => {
            web_sys::console::error_1(&format!("Camera access failed: {}", err).into());
            session.camera.borrow_mut().denied(&mut session.view());
            console_log!("📷 Camera {}", session.camera.borrow().state().as_str());
        }
    }
}

fn disable_camera(session: &ClientSession) {
    let stopped = session.camera.borrow_mut().disable(&mut session.view());
    console_log!("📷 Camera off ({} track(s) stopped)", stopped);
}

// ============================================================================
// SUBMISSION
// ============================================================================

async fn submit_upload(session: &ClientSession, body: Result<FormData, ClientError>) {
    let sequence = session.sequence.borrow_mut().issue();
    match body {
        Ok(body) => {
            let request = AnalysisRequest::new(sequence, SubmissionKind::Upload, body);
            send(session, request).await
        }
        Err(err) => finish(session, sequence, SubmissionKind::Upload, Err(err)),
    }
}

async fn submit_snapshot(session: &ClientSession) {
    let ready = {
        let camera = session.camera.borrow();
        submit::ensure_camera(&*camera, &mut session.view())
    };
    if !ready {
        return;
    }

    let sequence = session.sequence.borrow_mut().issue();
    let config = &session.config;
    let elements = &session.elements;
    let body = dom::capture_frame(&elements.canvas, &elements.video, config.jpeg_quality)
        .await
        .and_then(|blob| {
            dom::snapshot_form(&blob, &config.snapshot_field, &config.snapshot_filename)
        });

    match body {
        Ok(body) => {
            let request = AnalysisRequest::new(sequence, SubmissionKind::Snapshot, body);
            send(session, request).await
        }
        Err(err) => finish(session, sequence, SubmissionKind::Snapshot, Err(err)),
    }
}

async fn send(session: &ClientSession, request: AnalysisRequest<FormData>) {
    console_log!("📤 Analysis #{} ({})", request.sequence, request.kind.as_str());
    session.view().show_busy(request.kind.busy_text());

    let outcome = submit::post_form(&session.config.endpoint, &request.body).await;
    finish(session, request.sequence, request.kind, outcome);
}

fn finish(
    session: &ClientSession,
    sequence: u64,
    kind: SubmissionKind,
    outcome: Result<AnalysisResult, ClientError>,
) {
    let completion = submit::complete(
        &mut session.view(),
        &mut session.sequence.borrow_mut(),
        sequence,
        outcome,
        &session.config.uploads_prefix,
    );

    match completion {
        Completion::Rendered => {
            console_log!("📥 Analysis #{} ({}) rendered", sequence, kind.as_str())
        }
        Completion::Failed => web_sys::console::warn_1(
            &format!("Analysis #{} ({}) failed", sequence, kind.as_str()).into(),
        ),
        Completion::Stale => web_sys::console::warn_1(
            &format!(
                "Dropped stale response #{} ({}), a newer one is shown",
                sequence,
                kind.as_str()
            )
            .into(),
        ),
    }
}
