//! Hover preview panel mounted next to the cards.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::style;
use crate::SharedSection;
use floor_core::section::PreviewFrame;
use floor_core::{Project, ProjectId, ToolIcons};
use web_sys as web;

pub struct PreviewView {
    id: ProjectId,
    el: web::HtmlElement,
    icons: Vec<(web::HtmlElement, String)>,
    _listeners: Vec<Listener>,
}

impl PreviewView {
    pub fn build(
        document: &web::Document,
        layer: &web::HtmlElement,
        project: &Project,
        tool_icons: &ToolIcons,
        section: &SharedSection,
    ) -> Option<Self> {
        let el = dom::create(document, "div", PREVIEW_CLASS)?;
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "box-shadow", &format!("0 30px 80px {}55", project.glow_color()));
        let glow = dom::create(document, "div", PREVIEW_GLOW_CLASS)?;
        dom::append(&el, &glow);

        let heading = dom::create(document, "div", "")?;
        let dot = dom::create(document, "span", PREVIEW_DOT_CLASS)?;
        dom::set_style(&dot, "background", &project.color);
        dom::append(&heading, &dot);
        let label = dom::create_text(document, "span", "", &format!("{} · {}", project.label, project.year))?;
        dom::append(&heading, &label);
        dom::append(&el, &heading);
        dom::append(&el, &dom::create_text(document, "h3", "", &project.title)?);
        dom::append(&el, &dom::create_text(document, "p", "", &project.description)?);

        let mut icons = Vec::with_capacity(project.tools.len());
        for tool in &project.tools {
            let icon = dom::create(document, "div", TOOL_ICON_CLASS)?;
            _ = icon.set_attribute("title", tool);
            dom::append(&el, &icon);
            icons.push((icon, tool_icons.url(tool).to_string()));
        }
        dom::append(layer, &el);

        let id = project.id;
        let enter = section.clone();
        let leave = section.clone();
        let click = section.clone();
        let panel = el.clone();
        let glow_color = project.glow_color().to_string();
        let glow_target = glow.clone();
        let listeners = [
            Listener::new(&el, "mouseenter", move |_: web::MouseEvent| {
                if let Ok(mut s) = enter.try_borrow_mut() {
                    s.on_preview_enter(id);
                }
            }),
            Listener::new(&el, "mouseleave", move |_: web::MouseEvent| {
                if let Ok(mut s) = leave.try_borrow_mut() {
                    s.on_preview_leave(id);
                }
            }),
            Listener::new(&el, "click", move |_: web::MouseEvent| {
                if let Ok(mut s) = click.try_borrow_mut() {
                    s.on_preview_click(id);
                }
            }),
            Listener::new(&el, "pointermove", move |ev: web::PointerEvent| {
                // Child elements would skew offsetX/Y, so measure against the panel.
                let rect = panel.get_bounding_client_rect();
                let (x, y) = style::local_point(
                    ev.client_x() as f32,
                    ev.client_y() as f32,
                    rect.left() as f32,
                    rect.top() as f32,
                );
                let bg = style::glow_background(&glow_color, x, y, GLOW_RADIUS_PX);
                dom::set_style(&glow_target, "background", &bg);
            }),
        ]
        .into_iter()
        .flatten()
        .collect();

        log::debug!("[preview] mounted {}", id);
        Some(Self {
            id,
            el,
            icons,
            _listeners: listeners,
        })
    }

    pub fn apply(&self, frame: &PreviewFrame) {
        if frame.project != self.id {
            return;
        }
        let v = &frame.visual;
        dom::set_style(&self.el, "transform", &style::preview_transform(v));
        dom::set_style(&self.el, "opacity", &format!("{:.4}", v.opacity));
        dom::set_style(&self.el, "filter", &style::preview_filter(v));
        dom::set_style(
            &self.el,
            "pointer-events",
            if frame.interactive { "auto" } else { "none" },
        );
        for ((icon, url), visual) in self.icons.iter().zip(&frame.tool_icons) {
            _ = icon.set_attribute("style", &style::tool_icon_style(visual, url));
        }
    }
}

impl Drop for PreviewView {
    fn drop(&mut self) {
        dom::remove(&self.el);
        log::debug!("[preview] unmounted {}", self.id);
    }
}
