use crate::constants::HIDDEN_CLASS;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// A missing dialog counts as hidden.
#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

/// Fill the reference list of recognised particles.
pub fn fill_known_particles(document: &web::Document, list_id: &str, registry: &quark_core::Registry) {
    let Some(el) = document.get_element_by_id(list_id) else {
        return;
    };
    let mut html = String::new();
    for p in registry.entries() {
        html.push_str(&format!(
            "<li class='{}'><strong>{}</strong> : {}</li>",
            p.style, p.name, p.key
        ));
    }
    el.set_inner_html(&html);
}
