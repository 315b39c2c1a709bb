//! The sticky 3D stage: floor plane, marquee band and record cards.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::style;
use crate::SharedSection;
use floor_core::constants::MARQUEE_TEXT;
use floor_core::depth::Layer;
use floor_core::marquee::Marquee;
use floor_core::{ProjectId, SectionFrame};
use web_sys as web;

struct CardView {
    id: ProjectId,
    el: web::HtmlElement,
}

pub struct FloorView {
    container: web::HtmlElement,
    stage: web::HtmlElement,
    floor: web::HtmlElement,
    marquee: web::HtmlElement,
    marquee_track: web::HtmlElement,
    cards_layer: web::HtmlElement,
    preview_layer: web::HtmlElement,
    cards: Vec<CardView>,
    _listeners: Vec<Listener>,
}

impl FloorView {
    pub fn build(
        document: &web::Document,
        root: &web::Element,
        section: &SharedSection,
    ) -> Option<Self> {
        let container = dom::create(document, "section", SECTION_CLASS)?;
        let sticky = dom::create(document, "div", STICKY_CLASS)?;
        let stage = dom::create(document, "div", STAGE_CLASS)?;
        let floor = dom::create(document, "div", FLOOR_CLASS)?;
        let marquee = dom::create(document, "div", MARQUEE_CLASS)?;
        let marquee_track = dom::create(document, "div", MARQUEE_TRACK_CLASS)?;
        let cards_layer = dom::create(document, "div", CARDS_CLASS)?;
        let preview_layer = dom::create(document, "div", PREVIEW_LAYER_CLASS)?;

        for text in Marquee::track_items(MARQUEE_TEXT) {
            let item = dom::create_text(document, "span", "", &text)?;
            dom::append(&marquee_track, &item);
        }

        let mut cards = Vec::new();
        let mut listeners = Vec::new();
        {
            let s = section.borrow();
            for (project, position) in s.catalog().cards() {
                let el = dom::create(document, "div", CARD_CLASS)?;
                _ = el.set_attribute("style", &style::card_placement(position));
                dom::set_style(&el, "opacity", "0");
                let sleeve = dom::create(document, "div", CARD_SLEEVE_CLASS)?;
                dom::set_style(
                    &sleeve,
                    "background-image",
                    &format!("url('{}')", project.image_url),
                );
                dom::set_style(
                    &sleeve,
                    "box-shadow",
                    &format!("0 24px 48px {}66", project.glow_color()),
                );
                dom::set_style(&sleeve, "background-color", &project.color);
                let label = dom::create_text(document, "div", CARD_LABEL_CLASS, &project.title)?;
                dom::append(&el, &sleeve);
                dom::append(&el, &label);
                dom::append(&cards_layer, &el);
                listeners.extend(card_listeners(&el, project.id, section));
                cards.push(CardView { id: project.id, el });
            }
        }

        dom::append(&marquee, &marquee_track);
        dom::append(&stage, &floor);
        dom::append(&stage, &marquee);
        dom::append(&stage, &cards_layer);
        dom::append(&stage, &preview_layer);
        dom::append(&sticky, &stage);
        dom::append(&container, &sticky);
        dom::append(root, &container);

        Some(Self {
            container,
            stage,
            floor,
            marquee,
            marquee_track,
            cards_layer,
            preview_layer,
            cards,
            _listeners: listeners,
        })
    }

    pub fn container(&self) -> web::HtmlElement {
        self.container.clone()
    }

    pub fn card_elements(&self) -> Vec<web::HtmlElement> {
        self.cards.iter().map(|c| c.el.clone()).collect()
    }

    pub fn preview_layer(&self) -> &web::HtmlElement {
        &self.preview_layer
    }

    pub fn apply(&self, frame: &SectionFrame) {
        dom::set_style(&self.stage, "transform", &style::stage_transform(&frame.stage));
        dom::set_style(
            &self.floor,
            "transform",
            &style::layer_transform(Layer::Floor, frame.scroll.floor_y_pct),
        );
        dom::set_style(
            &self.marquee,
            "transform",
            &style::layer_transform(Layer::Marquee, frame.scroll.marquee_y_pct),
        );
        dom::set_style(
            &self.marquee_track,
            "transform",
            &style::marquee_track_transform(frame.marquee_offset_pct),
        );
        dom::set_style(
            &self.cards_layer,
            "transform",
            &style::layer_transform(Layer::Cards, frame.scroll.floor_y_pct),
        );
        for (view, card) in self.cards.iter().zip(&frame.cards) {
            debug_assert_eq!(view.id, card.id);
            dom::set_style(&view.el, "transform", &style::card_transform(&card.visual));
            dom::set_style(&view.el, "opacity", &format!("{:.4}", card.visual.opacity));
        }
    }
}

fn card_listeners(el: &web::HtmlElement, id: ProjectId, section: &SharedSection) -> Vec<Listener> {
    let enter = section.clone();
    let leave = section.clone();
    let click = section.clone();
    [
        Listener::new(el, "mouseenter", move |_: web::MouseEvent| {
            if let Ok(mut s) = enter.try_borrow_mut() {
                s.on_card_enter(id);
            }
        }),
        Listener::new(el, "mouseleave", move |_: web::MouseEvent| {
            if let Ok(mut s) = leave.try_borrow_mut() {
                s.on_card_leave();
            }
        }),
        Listener::new(el, "click", move |_: web::MouseEvent| {
            if let Ok(mut s) = click.try_borrow_mut() {
                if s.on_click(id) {
                    log::info!("[modal] open {}", id);
                }
            }
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}
