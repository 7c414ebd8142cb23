//! DOM rendering of board entities: quark chips and merged particles.

use crate::constants::{MERGE_MODAL_ID, SPAWN_MARGIN};
use crate::decor::wobble_delay;
use crate::dom;
use crate::events::attach_drag;
use crate::input::{random_spawn_position, top_left_for_center};
use crate::modal;
use crate::session::SharedSession;
use glam::Vec2;
use quark_core::{find_partner, midpoint, EntityId, Label, MergeOutcome};
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_div(document: &web::Document, classes: &[&str], text: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let cl = el.class_list();
    for c in classes {
        _ = cl.add_1(c);
    }
    el.set_text_content(Some(text));
    Ok(el)
}

/// Adds a single quark at a random spot inside the simulation area.
pub fn spawn_quark(session: &SharedSession, label: Label) -> anyhow::Result<EntityId> {
    let (document, area) = {
        let s = session.borrow();
        (s.document.clone(), s.area.clone())
    };
    let el = create_div(&document, &["draggable", "quark"], &label.to_string())?;
    let mut rng = rand::thread_rng();
    let pos = random_spawn_position(&mut rng, dom::client_size(&area), SPAWN_MARGIN);
    dom::set_position(&el, pos);
    _ = el
        .style()
        .set_property("animation-delay", &format!("{:.2}s", wobble_delay(&mut rng)));

    let id = session.borrow_mut().board.spawn_constituent(label);
    _ = el.dataset().set("type", &label.to_string());
    _ = el.dataset().set("composition", &label.to_string());
    _ = el.dataset().set("entityId", &id.raw().to_string());
    area.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    attach_drag(session, id, &el);
    session.borrow_mut().elements.insert(id, el);
    log::info!("[board] spawned {} {}", label, id);
    Ok(id)
}

fn place_particle(
    session: &SharedSession,
    id: EntityId,
    outcome: &MergeOutcome,
    center_client: Vec2,
) -> anyhow::Result<()> {
    let (document, area) = {
        let s = session.borrow();
        (s.document.clone(), s.area.clone())
    };
    let mut classes = vec!["draggable", "particle"];
    if let Some(style) = outcome.style_tag {
        classes.push(style);
    }
    let el = create_div(&document, &classes, &outcome.label_text())?;
    _ = el.dataset().set("composition", &outcome.composition.to_string());
    _ = el.dataset().set("entityId", &id.raw().to_string());
    area.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // size is only known once attached
    let top_left = top_left_for_center(center_client, dom::client_origin(&area), dom::client_size(&el));
    dom::set_position(&el, top_left);
    attach_drag(session, id, &el);
    session.borrow_mut().elements.insert(id, el);
    Ok(())
}

/// Looks for a partner near the released entity and opens the merge dialog.
pub fn check_for_merge(session: &SharedSession, released: EntityId) {
    let mut s = session.borrow_mut();
    if !modal::is_hidden(&s.document, MERGE_MODAL_ID) {
        return;
    }
    let Some(released_el) = s.elements.get(&released) else {
        return;
    };
    let released_center = dom::client_center(released_el);
    let candidates = s
        .board
        .ids()
        .filter_map(|id| s.elements.get(&id).map(|el| (id, dom::client_center(el))))
        .collect::<Vec<_>>();
    if let Some(partner) = find_partner(
        released,
        released_center,
        candidates,
        s.merge_distance,
        s.strategy,
    ) {
        log::info!("[merge] offer {} + {}", released, partner);
        s.pending = Some((released, partner));
        modal::show(&s.document, MERGE_MODAL_ID);
    }
}

/// Applies the pending merge, or alerts the user if the board refuses it.
pub fn confirm_merge(session: &SharedSession) -> anyhow::Result<()> {
    let Some((a, b)) = session.borrow_mut().pending.take() else {
        return Ok(());
    };
    let centers = {
        let s = session.borrow();
        match (s.elements.get(&a), s.elements.get(&b)) {
            (Some(ea), Some(eb)) => (dom::client_center(ea), dom::client_center(eb)),
            _ => anyhow::bail!("merge candidates {} / {} have no element", a, b),
        }
    };

    let result = session.borrow_mut().board.merge(a, b);
    match result {
        Ok((id, outcome)) => {
            {
                let mut s = session.borrow_mut();
                for old in [a, b] {
                    if let Some(el) = s.elements.remove(&old) {
                        el.remove();
                    }
                }
            }
            place_particle(session, id, &outcome, midpoint(centers.0, centers.1))?;
            log::info!("[merge] {} -> {}", id, outcome.label_text());
        }
        Err(e) => {
            log::info!("[merge] refused: {}", e);
            dom::alert(&e.to_string());
        }
    }
    Ok(())
}

pub fn cancel_merge(session: &SharedSession) {
    if let Some((a, b)) = session.borrow_mut().pending.take() {
        log::info!("[merge] cancelled {} + {}", a, b);
    }
}

/// Removes every entity from the board and the page.
pub fn clear_board(session: &SharedSession) {
    let mut s = session.borrow_mut();
    s.board.clear_all();
    for (_, el) in s.elements.drain() {
        el.remove();
    }
    s.pending = None;
    s.drag.cancel();
    modal::hide(&s.document, MERGE_MODAL_ID);
}
