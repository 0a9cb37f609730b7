use crate::dom;
use crate::input;
use crate::SharedApp;
use instant::Instant;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &SharedApp) {
    if input::has_command_modifier(ev) {
        return;
    }
    let key = ev.key();
    let mut app = app.borrow_mut();
    let app = &mut *app;
    if app.router.handle_key(&mut app.viewer, &key, Instant::now()) {
        log::debug!("[keys] {}", key);
        ev.prevent_default();
    }
    app.release_finished_drag();
}

pub fn wire_global_keydown(app: SharedApp) {
    if let Some(window) = web::window() {
        dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &app);
        });
    }
}

// The platform owns fullscreen state; resync on every change, including exits
// the page did not ask for.
pub fn wire_fullscreen_change(document: &web::Document, app: SharedApp) {
    dom::listen(document, "fullscreenchange", move |_: web::Event| {
        app.borrow_mut().router.on_fullscreen_change();
    });
}
