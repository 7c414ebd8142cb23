use crate::constants::DRAG_Z_INDEX;
use crate::dom;
use crate::entities;
use crate::input::drag_position;
use crate::session::SharedSession;
use glam::Vec2;
use quark_core::EntityId;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Starts a drag when the pointer goes down on an entity element.
pub fn attach_drag(session: &SharedSession, id: EntityId, el: &web::HtmlElement) {
    let session = session.clone();
    let target = el.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let grab_offset = client - dom::client_origin(&target);
        session.borrow_mut().drag.begin(id, grab_offset);
        _ = target.style().set_property("z-index", DRAG_Z_INDEX);
        _ = target.set_pointer_capture(ev.pointer_id());
        log::debug!("[drag] begin {}", id);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_drag_handlers(session: &SharedSession) {
    wire_pointermove(session);
    wire_pointerup(session);
    wire_pointercancel(session);
}

fn wire_pointermove(session: &SharedSession) {
    let session = session.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let s = session.borrow();
        let Some(id) = s.drag.entity else {
            return;
        };
        let Some(el) = s.elements.get(&id) else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let pos = drag_position(client, dom::client_origin(&s.area), s.drag.grab_offset);
        dom::set_position(el, pos);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(session: &SharedSession) {
    let session = session.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let released = session.borrow_mut().drag.release();
        if let Some(id) = released {
            log::debug!("[drag] release {}", id);
            entities::check_for_merge(&session, id);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointercancel(session: &SharedSession) {
    let session = session.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut s = session.borrow_mut();
        if let Some(id) = s.drag.entity {
            log::debug!("[drag] cancel {}", id);
            s.drag.cancel();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
