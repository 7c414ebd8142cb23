#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod decor;
mod dom;
mod entities;
mod events;
mod frame;
mod input;
mod modal;
mod session;

use config::BoardConfig;
use constants::{KNOWN_PARTICLES_LIST_ID, SIMULATION_AREA_ID};
use session::Session;

fn read_board_config(area: &web::HtmlElement) -> BoardConfig {
    BoardConfig::from_attributes(
        area.get_attribute("data-population-limit").as_deref(),
        area.get_attribute("data-selection").as_deref(),
        area.get_attribute("data-merge-distance").as_deref(),
    )
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("quark-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let area = dom::html_element_by_id(&document, SIMULATION_AREA_ID)?;

    let config = read_board_config(&area);
    log::info!(
        "[config] population_limit={:?} selection={:?} merge_distance={}",
        config.rules.population_limit,
        config.strategy,
        config.merge_distance
    );

    let session = Session::new(config, document.clone(), area).shared();
    modal::fill_known_particles(&document, KNOWN_PARTICLES_LIST_ID, session.borrow().board.registry());

    events::wire_buttons(&document, &session);
    events::wire_drag_handlers(&session);

    // Sparkles are decoration only; a page without the container still works.
    match frame::FrameContext::new(document) {
        Ok(ctx) => frame::start_loop(Rc::new(RefCell::new(ctx))),
        Err(e) => log::warn!("sparkles disabled: {:?}", e),
    }
    Ok(())
}
