use crate::dom;
use crate::SharedSection;
use web_sys as web;

#[inline]
pub fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Escape closes the project modal.
pub fn wire_escape(window: &web::Window, section: SharedSection) {
    dom::listen_forever(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || !is_close_key(&ev.key()) {
            return;
        }
        if let Ok(mut s) = section.try_borrow_mut() {
            if let Some(id) = s.close() {
                log::info!("[modal] closed {} via keyboard", id);
            }
        }
    });
}
