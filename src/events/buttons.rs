use crate::constants::{KNOWN_PARTICLES_MODAL_ID, MERGE_MODAL_ID, SPARKLES_INFO_MODAL_ID};
use crate::dom;
use crate::entities;
use crate::modal;
use crate::session::SharedSession;
use quark_core::Label;
use web_sys as web;

pub fn wire_buttons(document: &web::Document, session: &SharedSession) {
    wire_spawn_buttons(document, session);
    wire_merge_dialog(document, session);
    wire_clear(document, session);
    wire_info_modal(document, "knownParticlesButton", "closeKnownParticles", KNOWN_PARTICLES_MODAL_ID);
    wire_info_modal(document, "sparklesInfoButton", "closeSparklesInfo", SPARKLES_INFO_MODAL_ID);
}

fn wire_spawn_buttons(document: &web::Document, session: &SharedSession) {
    for btn in dom::query_all(document, ".create-quark") {
        let Some(raw) = btn.get_attribute("data-type") else {
            continue;
        };
        let label = match raw.parse::<Label>() {
            Ok(l) => l,
            Err(e) => {
                log::warn!("[ui] spawn button skipped: {}", e);
                continue;
            }
        };
        let session = session.clone();
        dom::add_element_click_listener(&btn, move || {
            if let Err(e) = entities::spawn_quark(&session, label) {
                log::error!("spawn error: {:?}", e);
            }
        });
    }
}

fn wire_merge_dialog(document: &web::Document, session: &SharedSession) {
    let s_yes = session.clone();
    let doc_yes = document.clone();
    dom::add_click_listener(document, "mergeYes", move || {
        modal::hide(&doc_yes, MERGE_MODAL_ID);
        if let Err(e) = entities::confirm_merge(&s_yes) {
            log::error!("merge error: {:?}", e);
        }
    });

    let s_cancel = session.clone();
    let doc_cancel = document.clone();
    dom::add_click_listener(document, "mergeCancel", move || {
        modal::hide(&doc_cancel, MERGE_MODAL_ID);
        entities::cancel_merge(&s_cancel);
    });
}

fn wire_clear(document: &web::Document, session: &SharedSession) {
    let session = session.clone();
    dom::add_click_listener(document, "clearButton", move || {
        entities::clear_board(&session);
    });
}

fn wire_info_modal(document: &web::Document, open_id: &str, close_id: &str, modal_id: &'static str) {
    let doc_open = document.clone();
    dom::add_click_listener(document, open_id, move || modal::show(&doc_open, modal_id));
    let doc_close = document.clone();
    dom::add_click_listener(document, close_id, move || modal::hide(&doc_close, modal_id));
}
