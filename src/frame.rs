use crate::floor::FloorView;
use crate::modal::ModalView;
use crate::preview::PreviewView;
use crate::SharedSection;
use floor_core::constants::MAX_FRAME_DT_SEC;
use floor_core::{PresenceEvent, ProjectId, SectionEvent, SectionFrame, ToolIcons};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub section: SharedSection,
    pub document: web::Document,
    pub floor: FloorView,
    pub icons: ToolIcons,
    pub preview: Option<PreviewView>,
    pub modal: Option<ModalView>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let frame = {
            let Ok(mut section) = self.section.try_borrow_mut() else {
                return;
            };
            if let Some(aspect) = self.modal.as_ref().and_then(ModalView::carousel_aspect) {
                section.set_carousel_aspect(aspect);
            }
            section.tick(dt_sec)
        };

        for ev in &frame.events {
            self.handle(*ev);
        }
        self.apply(&frame);
    }

    fn handle(&mut self, ev: SectionEvent) {
        match ev {
            SectionEvent::Preview(PresenceEvent::Mounted(id)) => {
                self.preview = self.project(id).and_then(|project| {
                    PreviewView::build(
                        &self.document,
                        self.floor.preview_layer(),
                        &project,
                        &self.icons,
                        &self.section,
                    )
                });
            }
            SectionEvent::Preview(PresenceEvent::Unmounted(_)) => self.preview = None,
            SectionEvent::Modal(PresenceEvent::Mounted(id)) => {
                // Drop first so the old view restores body scrolling before
                // the new one locks it.
                self.modal = None;
                self.modal = self
                    .project(id)
                    .and_then(|project| ModalView::build(&self.document, &project, &self.section));
                log::info!("[modal] mounted {}", id);
            }
            SectionEvent::Modal(PresenceEvent::Unmounted(id)) => {
                if self.modal.as_ref().map(ModalView::project) == Some(id) {
                    self.modal = None;
                }
            }
            SectionEvent::Preview(_) | SectionEvent::Modal(_) => {}
        }
    }

    fn project(&self, id: ProjectId) -> Option<floor_core::Project> {
        self.section.try_borrow().ok()?.catalog().get(id).cloned()
    }

    fn apply(&mut self, frame: &SectionFrame) {
        self.floor.apply(frame);
        if let (Some(view), Some(p)) = (&self.preview, &frame.preview) {
            view.apply(p);
        }
        if let (Some(view), Some(m)) = (&mut self.modal, &frame.modal) {
            view.apply(m, &frame.overlays, frame.readout, frame.carousel.as_ref());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
