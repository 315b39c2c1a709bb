use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inner size of the window in CSS pixels.
pub fn viewport_size() -> (f32, f32) {
    web::window()
        .map(|w| {
            let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
            };
            (px(w.inner_width()), px(w.inner_height()))
        })
        .unwrap_or((0.0, 0.0))
}

pub fn create(document: &web::Document, tag: &str, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>().ok()
}

pub fn create_text(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Option<web::HtmlElement> {
    let el = create(document, tag, class)?;
    el.set_text_content(Some(text));
    Some(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) {
    _ = parent.append_child(child);
}

#[inline]
pub fn remove(el: &web::Element) {
    el.remove();
}

/// Mount point for the section, falling back to `<body>`.
pub fn mount_root(document: &web::Document, id: &str) -> Option<web::Element> {
    document
        .get_element_by_id(id)
        .or_else(|| document.body().map(web::Element::from))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    _closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        Self::build(target, event, handler, None)
    }

    /// Non-passive listener so the handler may call `prevent_default`.
    pub fn active<E, F>(target: &web::EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        Self::build(target, event, handler, Some(opts))
    }

    fn build<E, F>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: F,
        options: Option<web::AddEventListenerOptions>,
    ) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let added = match &options {
            Some(opts) => target.add_event_listener_with_callback_and_add_event_listener_options(
                event, &callback, opts,
            ),
            None => target.add_event_listener_with_callback(event, &callback),
        };
        if let Err(e) = added {
            log::warn!("[dom] failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
            _closure: closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}

/// Listener that lives as long as the page.
pub fn listen_forever<E, F>(target: &web::EventTarget, event: &'static str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
