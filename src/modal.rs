//! Full-screen project modal with its three content renderers.

use crate::carousel::CarouselView;
use crate::constants::*;
use crate::dom::{self, Listener};
use crate::style;
use crate::SharedSection;
use floor_core::gallery::{GalleryOverlay, GalleryReadout, OverlayVisual};
use floor_core::modal::{client_label, content_for, CloseButtonTheme, ModalContent};
use floor_core::section::ModalFrame;
use floor_core::{CarouselFrame, ClickTarget, Project, ProjectId};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ModalView {
    id: ProjectId,
    document: web::Document,
    backdrop: web::HtmlElement,
    modal: web::HtmlElement,
    overlays: Vec<(web::HtmlElement, &'static GalleryOverlay)>,
    readout: Option<web::HtmlElement>,
    carousel: Option<CarouselView>,
    _listeners: Vec<Listener>,
}

impl ModalView {
    pub fn build(
        document: &web::Document,
        project: &Project,
        section: &SharedSection,
    ) -> Option<Self> {
        let body = document.body()?;
        let backdrop = dom::create(document, "div", BACKDROP_CLASS)?;
        let modal = dom::create(document, "div", MODAL_CLASS)?;
        dom::set_style(&backdrop, "opacity", "0");
        dom::set_style(&modal, "opacity", "0");

        let theme = match CloseButtonTheme::for_layout(project.layout.kind()) {
            CloseButtonTheme::Light => CLOSE_LIGHT_CLASS,
            CloseButtonTheme::Dark => CLOSE_DARK_CLASS,
        };
        let close = dom::create_text(document, "button", &format!("{CLOSE_CLASS} {theme}"), "✕")?;
        _ = close.set_attribute("aria-label", "Close");
        dom::append(&modal, &close);

        let mut listeners = Vec::new();
        listeners.extend(click_listener(&backdrop, ClickTarget::Backdrop, section));
        listeners.extend(click_listener(&close, ClickTarget::CloseButton, section));
        listeners.extend(click_listener(&modal, ClickTarget::Content, section));

        let mut view = Self {
            id: project.id,
            document: document.clone(),
            backdrop,
            modal,
            overlays: Vec::new(),
            readout: None,
            carousel: None,
            _listeners: Vec::new(),
        };
        let mut gallery_scroll = None;
        match content_for(project) {
            ModalContent::Default(project) => view.build_default(project)?,
            ModalContent::Gallery {
                project,
                images,
                overlays,
            } => {
                let scroll = view.build_gallery(project, images, overlays)?;
                listeners.extend(gallery_listeners(&scroll, &view.modal, section));
                gallery_scroll = Some(scroll);
            }
            ModalContent::ThreeD { models, .. } => {
                let carousel = CarouselView::build(document, &view.modal, models)?;
                listeners.extend(wheel_listener(carousel.container(), section));
                view.carousel = Some(carousel);
            }
        }
        view._listeners = listeners;

        dom::append(&body, &view.backdrop);
        dom::append(&body, &view.modal);
        dom::set_style(&body, "overflow", "hidden");
        // Overlays already on screen reveal without waiting for a scroll.
        if let Some(scroll) = &gallery_scroll {
            sync_gallery_scroll(scroll, section);
        }
        Some(view)
    }

    fn build_default(&mut self, project: &Project) -> Option<()> {
        let doc = &self.document;
        let scroll = dom::create(doc, "div", MODAL_SCROLL_CLASS)?;
        let hero = dom::create(doc, "div", HERO_CLASS)?;
        if project.image_url.is_empty() {
            hero.set_text_content(Some(HERO_PLACEHOLDER_TEXT));
        } else {
            dom::set_style(&hero, "background-image", &format!("url('{}')", project.image_url));
        }
        dom::append(&scroll, &hero);

        let article = dom::create(doc, "article", "")?;
        dom::set_style(&article, "padding", "48px 6vw");
        dom::append(&article, &dom::create_text(doc, "h1", "", &project.title)?);
        let meta = dom::create(doc, "div", "")?;
        let pill = dom::create_text(doc, "span", "", &project.year)?;
        dom::set_style(&pill, "border", &format!("1px solid {}", project.color));
        dom::set_style(&pill, "border-radius", "999px");
        dom::set_style(&pill, "padding", "2px 10px");
        dom::set_style(&pill, "margin-right", "12px");
        dom::append(&meta, &pill);
        dom::append(&meta, &dom::create_text(doc, "span", "", client_label(project))?);
        dom::append(&article, &meta);
        dom::append(&article, &dom::create_text(doc, "p", "", &project.label)?);
        dom::append(&article, &dom::create_text(doc, "h2", "", OVERVIEW_HEADING)?);
        dom::append(&article, &dom::create_text(doc, "p", "", &project.description)?);
        dom::append(&article, &dom::create_text(doc, "h2", "", TOOLS_HEADING)?);
        let tools = dom::create(doc, "ul", "")?;
        for tool in &project.tools {
            dom::append(&tools, &dom::create_text(doc, "li", "", tool)?);
        }
        dom::append(&article, &tools);
        dom::append(&scroll, &article);
        dom::append(&self.modal, &scroll);
        Some(())
    }

    fn build_gallery(
        &mut self,
        project: &Project,
        images: &[String],
        overlays: &'static [GalleryOverlay],
    ) -> Option<web::HtmlElement> {
        let doc = self.document.clone();
        let scroll = dom::create(&doc, "div", MODAL_SCROLL_CLASS)?;
        let gallery = dom::create(&doc, "div", GALLERY_CLASS)?;
        for url in images {
            let img = doc
                .create_element("img")
                .ok()?
                .dyn_into::<web::HtmlImageElement>()
                .ok()?;
            img.set_class_name(GALLERY_IMAGE_CLASS);
            img.set_src(url);
            img.set_alt(&project.title);
            _ = img.set_attribute("loading", "lazy");
            dom::append(&gallery, &img);
        }
        for overlay in overlays {
            let el = dom::create_text(&doc, "div", GALLERY_OVERLAY_CLASS, overlay.text)?;
            dom::set_style(&el, "opacity", "0");
            dom::append(&gallery, &el);
            self.overlays.push((el, overlay));
        }
        let footer = dom::create_text(&doc, "div", "", GALLERY_FOOTER_TEXT)?;
        dom::set_style(&footer, "padding", "64px 0");
        dom::set_style(&footer, "text-align", "center");
        dom::set_style(&footer, "color", "#fff");
        dom::append(&gallery, &footer);
        dom::append(&scroll, &gallery);
        dom::append(&self.modal, &scroll);

        if cfg!(feature = "gallery-readout") {
            let readout = dom::create(&doc, "div", READOUT_CLASS)?;
            dom::append(&self.modal, &readout);
            self.readout = Some(readout);
        }
        Some(scroll)
    }

    pub fn project(&self) -> ProjectId {
        self.id
    }

    /// Drawing-buffer aspect of the 3D view, when there is one.
    pub fn carousel_aspect(&self) -> Option<f32> {
        self.carousel.as_ref().map(CarouselView::aspect)
    }

    pub fn apply(
        &mut self,
        frame: &ModalFrame,
        overlays: &[OverlayVisual],
        readout: Option<GalleryReadout>,
        carousel: Option<&CarouselFrame>,
    ) {
        if frame.project != self.id {
            return;
        }
        let v = &frame.visual;
        _ = self
            .backdrop
            .set_attribute("style", &style::backdrop_style(v));
        dom::set_style(&self.modal, "transform", &style::modal_transform(v));
        dom::set_style(&self.modal, "opacity", &format!("{:.4}", v.opacity));
        let pointer = if frame.interactive { "auto" } else { "none" };
        dom::set_style(&self.backdrop, "pointer-events", pointer);
        dom::set_style(&self.modal, "pointer-events", pointer);

        for ((el, overlay), visual) in self.overlays.iter().zip(overlays) {
            let css = format!(
                "{}transform:{};opacity:{:.4};",
                style::overlay_placement(overlay, visual),
                style::overlay_transform(visual),
                visual.opacity
            );
            _ = el.set_attribute("style", &css);
        }
        if let (Some(el), Some(r)) = (&self.readout, readout) {
            el.set_text_content(Some(&format!("SCROLL Y: {} | MOUSE X: {}", r.scroll_y, r.mouse_x)));
        }
        if let (Some(view), Some(c)) = (&mut self.carousel, carousel) {
            view.render(c);
        }
    }
}

impl Drop for ModalView {
    fn drop(&mut self) {
        dom::remove(&self.modal);
        dom::remove(&self.backdrop);
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "overflow", "");
        }
        log::info!("[modal] unmounted {}", self.id);
    }
}

fn click_listener(
    el: &web::HtmlElement,
    target: ClickTarget,
    section: &SharedSection,
) -> Option<Listener> {
    let section = section.clone();
    Listener::new(el, "click", move |ev: web::MouseEvent| {
        if target != ClickTarget::Backdrop {
            ev.stop_propagation();
        }
        if let Ok(mut s) = section.try_borrow_mut() {
            if s.on_modal_click(target) {
                log::info!("[modal] closed via {:?}", target);
            }
        }
    })
}

fn gallery_listeners(
    scroll: &web::HtmlElement,
    modal: &web::HtmlElement,
    section: &SharedSection,
) -> Vec<Listener> {
    let on_scroll = section.clone();
    let on_pointer = section.clone();
    let container = scroll.clone();
    [
        Listener::new(scroll, "scroll", move |_: web::Event| {
            sync_gallery_scroll(&container, &on_scroll);
        }),
        Listener::new(modal, "pointermove", move |ev: web::PointerEvent| {
            if let Ok(mut s) = on_pointer.try_borrow_mut() {
                s.on_gallery_pointer(ev.client_x() as f32);
            }
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn sync_gallery_scroll(scroll: &web::HtmlElement, section: &SharedSection) {
    if let Ok(mut s) = section.try_borrow_mut() {
        let started = s.on_gallery_scroll(
            scroll.scroll_top() as f32,
            scroll.client_width() as f32,
            scroll.client_height() as f32,
        );
        if !started.is_empty() {
            log::debug!("[gallery] reveal {:?}", started.as_slice());
        }
    }
}

fn wheel_listener(container: &web::HtmlElement, section: &SharedSection) -> Option<Listener> {
    let section = section.clone();
    Listener::active(container, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        if let Ok(mut s) = section.try_borrow_mut() {
            s.on_wheel(ev.delta_y() as f32);
        }
    })
}
