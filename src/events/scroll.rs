use crate::dom;
use crate::SharedSection;
use floor_core::scroll::intersects_viewport;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub window: web::Window,
    pub section: SharedSection,
    /// The tall section element whose rect drives scroll progress.
    pub container: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
}

pub fn wire_scroll(w: ScrollWiring) {
    sync_scroll(&w);
    let target = w.window.clone();
    let on_resize = w.clone();
    dom::listen_forever(&target, "scroll", move |_: web::Event| sync_scroll(&w));
    dom::listen_forever(&target, "resize", move |_: web::Event| sync_scroll(&on_resize));
}

/// Recompute progress and reveal any card that has entered the viewport.
fn sync_scroll(w: &ScrollWiring) {
    let (_, vh) = dom::viewport_size();
    let rect = w.container.get_bounding_client_rect();
    let Ok(mut s) = w.section.try_borrow_mut() else {
        return;
    };
    s.on_scroll(rect.top() as f32, rect.height() as f32, vh);
    for (i, card) in w.cards.iter().enumerate() {
        let r = card.get_bounding_client_rect();
        if intersects_viewport(r.top() as f32, r.bottom() as f32, vh) && s.reveal_card(i) {
            log::debug!("[floor] card {} revealed", i);
        }
    }
}
