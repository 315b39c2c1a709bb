#![cfg(target_arch = "wasm32")]
use floor_core::Section;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod carousel;
mod constants;
mod dom;
mod events;
mod floor;
mod frame;
mod modal;
mod preview;
mod render;
mod style;

/// Section state shared between event callbacks and the frame loop.
pub(crate) type SharedSection = Rc<RefCell<Section>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("floor-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn install_style_sheet(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(constants::STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_id(constants::STYLE_ID);
    style.set_text_content(Some(constants::STYLE_SHEET));
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    install_style_sheet(&document)?;

    let root = dom::mount_root(&document, constants::ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", constants::ROOT_ID))?;

    let section: SharedSection = Rc::new(RefCell::new(Section::default()));
    let floor = floor::FloorView::build(&document, &root, &section)
        .ok_or_else(|| anyhow::anyhow!("failed to build floor"))?;
    log::info!(
        "[floor] mounted {} cards",
        section.borrow().catalog().len()
    );

    events::wire_pointer_tracking(&window, section.clone());
    events::wire_escape(&window, section.clone());
    events::wire_scroll(events::ScrollWiring {
        window: window.clone(),
        section: section.clone(),
        container: floor.container(),
        cards: floor.card_elements(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        section,
        document,
        floor,
        icons: floor_core::ToolIcons::builtin(),
        preview: None,
        modal: None,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
