//! DOM-backed implementations of the view traits
//!
//! Labels and category names come from the server and are written as text
//! nodes only.

use web_sys::{Element, HtmlElement, MediaStream};

use super::elements::PageElements;
use crate::camera::CameraControls;
use crate::render::{BreakdownLine, ResultView};

/// Classes for one breakdown row
const BREAKDOWN_ROW_CLASS: &str = "p-2 my-1 bg-light border rounded";

/// Borrowed view over the page's elements
pub struct DomView<'a> {
    elements: &'a PageElements,
}

impl<'a> DomView<'a> {
    pub fn new(elements: &'a PageElements) -> Self {
        Self { elements }
    }

    fn create(&self, tag: &str) -> Option<Element> {
        match self.elements.document.create_element(tag) {
            Ok(element) => Some(element),
            Err(err) => {
                web_sys::console::warn_2(&format!("Failed to create <{}>", tag).into(), &err);
                None
            }
        }
    }

    fn append(parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            web_sys::console::warn_2(&"Failed to append element".into(), &err);
        }
    }

    fn set_display(element: &HtmlElement, value: &str) {
        if let Err(err) = element.style().set_property("display", value) {
            web_sys::console::warn_2(&"Failed to set display".into(), &err);
        }
    }
}

impl ResultView for DomView<'_> {
    fn show_status(&mut self, text: &str) {
        self.elements.status.set_text_content(Some(text));
    }

    fn show_busy(&mut self, text: &str) {
        let status = &self.elements.status;
        status.set_inner_html("");

        let (Some(loader), Some(label)) = (self.create("div"), self.create("span")) else {
            status.set_text_content(Some(text));
            return;
        };
        loader.set_class_name("loader");
        label.set_class_name("muted");
        label.set_text_content(Some(text));
        Self::append(status, &loader);
        Self::append(status, &label);
    }

    fn show_badge(&mut self, emoji: &str, label: &str) {
        let badge = &self.elements.emotion_badge;
        badge.set_inner_html("");

        let Some(heading) = self.create("h3") else {
            badge.set_text_content(Some(&format!("{} {}", emoji, label)));
            return;
        };
        if let Err(err) = heading.set_attribute("style", "color:black;") {
            web_sys::console::warn_2(&"Failed to style badge".into(), &err);
        }
        heading.set_text_content(Some(&format!("{} {}", emoji, label)));
        Self::append(badge, &heading);
    }

    fn clear_badge(&mut self) {
        self.elements.emotion_badge.set_inner_html("");
    }

    fn show_breakdown(&mut self, lines: &[BreakdownLine]) {
        let breakdown = &self.elements.breakdown;
        breakdown.set_inner_html("");

        for line in lines {
            let (Some(row), Some(score)) = (self.create("div"), self.create("strong")) else {
                continue;
            };
            row.set_class_name(BREAKDOWN_ROW_CLASS);
            if let Err(err) = row.set_attribute("style", "color:black;") {
                web_sys::console::warn_2(&"Failed to style breakdown row".into(), &err);
            }
            row.set_text_content(Some(&format!("{}: ", line.category)));
            score.set_text_content(Some(&line.score_text()));
            Self::append(&row, &score);
            Self::append(breakdown, &row);
        }
    }

    fn clear_breakdown(&mut self) {
        self.elements.breakdown.set_inner_html("");
    }

    fn show_preview(&mut self, src: &str) {
        let preview = &self.elements.preview_image;
        preview.set_src(src);
        Self::set_display(preview, "block");
    }
}

impl CameraControls<MediaStream> for DomView<'_> {
    fn set_capture_enabled(&mut self, enabled: bool) {
        self.elements.capture_button.set_disabled(!enabled);
    }

    fn set_toggle_label(&mut self, label: &str) {
        let toggle = &self.elements.camera_toggle;
        toggle.set_text_content(Some(label));
        Self::set_display(toggle, "inline-block");
    }

    fn show_camera_status(&mut self, text: &str) {
        self.elements.status.set_text_content(Some(text));
    }

    fn attach_stream(&mut self, stream: Option<&MediaStream>) {
        self.elements.video.set_src_object(stream);
    }
}
