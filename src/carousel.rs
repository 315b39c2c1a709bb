//! DOM side of the 3D carousel: canvas, labels and the async GPU setup.

use crate::constants::*;
use crate::dom;
use crate::render::GpuState;
use floor_core::{CarouselFrame, ModelDescriptor};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct CarouselView {
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    labels: Vec<web::HtmlElement>,
    gpu: Rc<RefCell<Option<GpuState>>>,
}

impl CarouselView {
    pub fn build(
        document: &web::Document,
        parent: &web::HtmlElement,
        models: &[ModelDescriptor],
    ) -> Option<Self> {
        let container = dom::create(document, "div", CAROUSEL_CLASS)?;
        let canvas = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        canvas.set_class_name(CAROUSEL_CANVAS_CLASS);
        dom::append(&container, &canvas);

        let mut labels = Vec::with_capacity(models.len());
        for model in models {
            let label = dom::create_text(document, "div", CAROUSEL_LABEL_CLASS, &model.label)?;
            dom::set_style(&label, "color", &model.color);
            dom::append(&container, &label);
            labels.push(label);
        }
        let hint = dom::create_text(document, "div", CAROUSEL_LABEL_CLASS, CAROUSEL_HINT_TEXT)?;
        dom::set_style(&hint, "left", "50%");
        dom::set_style(&hint, "bottom", "32px");
        dom::set_style(&hint, "opacity", "0.6");
        dom::append(&container, &hint);
        dom::append(parent, &container);
        dom::sync_canvas_backing_size(&canvas);

        let gpu = Rc::new(RefCell::new(None));
        let slot = Rc::downgrade(&gpu);
        let target = canvas.clone();
        spawn_local(async move {
            match GpuState::new(target).await {
                // A closed modal drops the view, and with it the slot.
                Ok(state) => match slot.upgrade() {
                    Some(slot) => {
                        log::info!("[carousel] WebGPU ready");
                        *slot.borrow_mut() = Some(state);
                    }
                    None => log::info!("[carousel] discarding GPU state for a closed modal"),
                },
                Err(e) => log::error!("[carousel] WebGPU init error: {:?}", e),
            }
        });

        Some(Self {
            container,
            canvas,
            labels,
            gpu,
        })
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn aspect(&self) -> f32 {
        let (w, h) = (self.canvas.width().max(1), self.canvas.height().max(1));
        w as f32 / h as f32
    }

    pub fn render(&mut self, frame: &CarouselFrame) {
        dom::sync_canvas_backing_size(&self.canvas);
        let rect = self.canvas.get_bounding_client_rect();
        let (css_w, css_h) = (rect.width() as f32, rect.height() as f32);
        for (label, anchor) in self.labels.iter().zip(&frame.label_anchors) {
            match frame.camera.project(*anchor, css_w, css_h) {
                Some(p) => {
                    dom::set_style(label, "display", "block");
                    dom::set_style(label, "left", &format!("{:.1}px", p.x));
                    dom::set_style(label, "top", &format!("{:.1}px", p.y));
                }
                None => dom::set_style(label, "display", "none"),
            }
        }

        let Ok(mut slot) = self.gpu.try_borrow_mut() else {
            return;
        };
        if let Some(gpu) = slot.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = gpu.render(&frame.camera, &frame.poses) {
                log::error!("[carousel] render error: {:?}", e);
            }
        }
    }
}
