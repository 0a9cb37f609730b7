use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position relative to `el`'s top-left corner, in CSS pixels.
/// Pointer and wheel events both deref to `MouseEvent`.
#[inline]
pub fn pointer_element_px(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let x = ev.client_x() as f32 - rect.left() as f32;
    let y = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x, y)
}

/// Keys with a modifier held belong to the browser (zoom, tab switching).
#[inline]
pub fn has_command_modifier(ev: &web::KeyboardEvent) -> bool {
    ev.ctrl_key() || ev.meta_key() || ev.alt_key()
}

// ---------------- Delegated click targets ----------------

/// Walks up from the event target to the nearest element carrying `attr`
/// and returns that attribute's value.
pub fn delegated_attr(ev: &web::Event, attr: &str) -> Option<String> {
    use wasm_bindgen::JsCast;
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let selector = format!("[{}]", attr);
    let hit = target.closest(&selector).ok()??;
    hit.get_attribute(attr)
}
