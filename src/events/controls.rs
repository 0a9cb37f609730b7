use crate::constants::*;
use crate::dom;
use crate::input;
use crate::SharedApp;
use explorer_core::Command;
use instant::Instant;
use web_sys as web;

fn run(app: &SharedApp, cmd: Command) {
    let mut app = app.borrow_mut();
    let app = &mut *app;
    app.router.execute(&mut app.viewer, cmd, Instant::now());
    app.release_finished_drag();
}

/// Buttons, thumbnails and hotspots. Thumbnails and hotspots are rebuilt by
/// the surface, so their clicks are delegated from the containers.
pub fn wire_controls(document: &web::Document, app: SharedApp) {
    let buttons = [
        (PREV_BUTTON_ID, Command::Prev),
        (NEXT_BUTTON_ID, Command::Next),
        (ZOOM_IN_BUTTON_ID, Command::ZoomIn),
        (ZOOM_OUT_BUTTON_ID, Command::ZoomOut),
        (ZOOM_RESET_BUTTON_ID, Command::ResetZoom),
        (FULLSCREEN_BUTTON_ID, Command::ToggleFullscreen),
    ];
    for (id, cmd) in buttons {
        let app = app.clone();
        dom::add_click_listener(document, id, move || run(&app, cmd.clone()));
    }

    if let Some(strip) = document.get_element_by_id(THUMBNAIL_STRIP_ID) {
        let app = app.clone();
        dom::listen(&strip, "click", move |ev: web::MouseEvent| {
            let Some(index) = input::delegated_attr(&ev, THUMBNAIL_INDEX_ATTR)
                .and_then(|s| s.parse::<usize>().ok())
            else {
                return;
            };
            run(&app, Command::JumpToIndex(index));
        });
    }

    if let Some(layer) = document.get_element_by_id(HOTSPOT_LAYER_ID) {
        dom::listen(&layer, "click", move |ev: web::MouseEvent| {
            let Some(hotspot_id) = input::delegated_attr(&ev, HOTSPOT_ID_ATTR) else {
                return;
            };
            // A pan that ended over a hotspot is not a click on it
            if std::mem::take(&mut app.borrow_mut().suppress_click) {
                return;
            }
            run(&app, Command::ActivateHotspot(hotspot_id));
        });
    }
}
