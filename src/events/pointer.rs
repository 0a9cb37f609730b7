use crate::constants::PRIMARY_BUTTON;
use crate::dom;
use crate::input;
use crate::SharedApp;
use explorer_core::PointerInput;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level move/up listeners held for the duration of one drag.
///
/// Dropping the guard removes the listeners, so ending a drag (or a scene
/// change cutting it short) releases them without extra bookkeeping.
pub struct DragListeners {
    window: web::Window,
    on_move: js_sys::Function,
    on_up: js_sys::Function,
}

impl DragListeners {
    fn attach(window: web::Window, on_move: js_sys::Function, on_up: js_sys::Function) -> Self {
        _ = window.add_event_listener_with_callback("pointermove", &on_move);
        _ = window.add_event_listener_with_callback("pointerup", &on_up);
        _ = window.add_event_listener_with_callback("pointercancel", &on_up);
        Self {
            window,
            on_move,
            on_up,
        }
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("pointermove", &self.on_move);
        _ = self
            .window
            .remove_event_listener_with_callback("pointerup", &self.on_up);
        _ = self
            .window
            .remove_event_listener_with_callback("pointercancel", &self.on_up);
    }
}

pub fn wire_pointer_handlers(viewport: web::HtmlElement, app: SharedApp) {
    let Some(window) = web::window() else {
        return;
    };
    let on_move = drag_move_callback(&viewport, &app);
    let on_up = drag_up_callback(&app);
    wire_pointerdown(&viewport, &window, &app, on_move, on_up);
    wire_wheel(&viewport, &app);
}

// The move/up closures live for the page; only their registration on
// `window` is scoped to a drag.
fn drag_move_callback(viewport: &web::HtmlElement, app: &SharedApp) -> js_sys::Function {
    let viewport = viewport.clone();
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_element_px(&ev, &viewport);
        let mut guard = app.borrow_mut();
        let state = &mut *guard;
        if state
            .router
            .handle_pointer(&mut state.viewer, PointerInput::Move(pos), Instant::now())
        {
            state.drag_moved = true;
        }
        // A scene change mid-drag resets the transform and ends the drag
        if !state.viewer.transform().is_dragging() {
            state.drag = None;
        }
    }) as Box<dyn FnMut(_)>);
    let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    function
}

fn drag_up_callback(app: &SharedApp) -> js_sys::Function {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut guard = app.borrow_mut();
        let state = &mut *guard;
        state
            .router
            .handle_pointer(&mut state.viewer, PointerInput::Up, Instant::now());
        state.suppress_click = state.drag_moved;
        state.drag = None;
        log::debug!("[mouse] end drag");
    }) as Box<dyn FnMut(_)>);
    let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    closure.forget();
    function
}

fn wire_pointerdown(
    viewport: &web::HtmlElement,
    window: &web::Window,
    app: &SharedApp,
    on_move: js_sys::Function,
    on_up: js_sys::Function,
) {
    let target = viewport.clone();
    let window = window.clone();
    let app = app.clone();
    dom::listen(viewport, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        let pos = input::pointer_element_px(&ev, &target);
        let mut guard = app.borrow_mut();
        let state = &mut *guard;
        state.suppress_click = false;
        state.drag_moved = false;
        if state
            .router
            .handle_pointer(&mut state.viewer, PointerInput::Down(pos), Instant::now())
        {
            state.drag = Some(DragListeners::attach(
                window.clone(),
                on_move.clone(),
                on_up.clone(),
            ));
            log::debug!("[mouse] begin drag at ({:.0},{:.0})", pos.x, pos.y);
            ev.prevent_default();
        }
    });
}

fn wire_wheel(viewport: &web::HtmlElement, app: &SharedApp) {
    let target = viewport.clone();
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let at = input::pointer_element_px(&ev, &target);
        let mut guard = app.borrow_mut();
        let state = &mut *guard;
        let wheel = PointerInput::Wheel {
            delta_y: ev.delta_y() as f32,
            at,
        };
        state
            .router
            .handle_pointer(&mut state.viewer, wheel, Instant::now());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // Non-passive so prevent_default can stop the page from scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = viewport.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
