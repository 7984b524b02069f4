//! Client session - everything the page handlers share
//!
//! Built once at startup and captured by each handler closure. All access
//! happens on the main thread; `RefCell` borrows are never held across an
//! `.await`.

use std::cell::RefCell;

use web_sys::MediaStream;

use crate::camera::CameraSession;
use crate::config::ClientConfig;
use crate::dom::{DomView, PageElements};
use crate::error::ClientError;
use crate::submit::SubmissionSequence;

pub struct ClientSession {
    pub config: ClientConfig,
    pub elements: PageElements,
    pub camera: RefCell<CameraSession<MediaStream>>,
    pub sequence: RefCell<SubmissionSequence>,
}

impl ClientSession {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;
        let document = window.document().ok_or(ClientError::NoDocument)?;
        let elements = PageElements::lookup(&document, &config.element_ids)?;

        Ok(Self {
            config,
            elements,
            camera: RefCell::new(CameraSession::new()),
            sequence: RefCell::new(SubmissionSequence::new()),
        })
    }

    pub fn view(&self) -> DomView<'_> {
        DomView::new(&self.elements)
    }
}
