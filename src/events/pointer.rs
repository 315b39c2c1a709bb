use crate::dom;
use crate::SharedSection;
use web_sys as web;

/// Feed window-level pointer moves into the tilt tracker.
pub fn wire_pointer_tracking(window: &web::Window, section: SharedSection) {
    dom::listen_forever(window, "pointermove", move |ev: web::PointerEvent| {
        let (vw, vh) = dom::viewport_size();
        if let Ok(mut s) = section.try_borrow_mut() {
            s.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
        }
    });
}
