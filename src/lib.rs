#![cfg(target_arch = "wasm32")]
use explorer_core::{InputRouter, SceneGraph, Viewer, ViewerConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod platform;
mod surface;

use constants::*;

/// Everything the event handlers and the frame loop share.
pub(crate) struct App {
    viewer: Viewer,
    router: InputRouter<platform::DomFullscreen>,
    surface: surface::DomSurface,
    // Held only while a pan is in progress
    drag: Option<events::DragListeners>,
    drag_moved: bool,
    suppress_click: bool,
}

pub(crate) type SharedApp = Rc<RefCell<App>>;

// Pan bounds depend on the viewport size; keep it current.
fn wire_viewport_resize(viewport: &web::HtmlElement, app: &SharedApp) {
    if let Some(window) = web::window() {
        let viewport = viewport.clone();
        let app = app.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            let size = dom::element_size(&viewport);
            app.borrow_mut().viewer.set_viewport_size(size, Instant::now());
        });
    }
}

// Leaving the page: stop timers and release the drag listeners.
fn wire_teardown(app: &SharedApp) {
    if let Some(window) = web::window() {
        let app = app.clone();
        dom::listen(&window, "pagehide", move |_: web::Event| {
            let mut app = app.borrow_mut();
            app.drag = None;
            app.viewer.shutdown();
            log::info!("[app] shut down");
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-explorer starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let viewport: web::HtmlElement = dom::element_by_id(&document, VIEWPORT_ID)?;

    let graph = SceneGraph::bundled()?;
    let mut viewer = Viewer::new(graph, ViewerConfig::default(), dom::element_size(&viewport));
    if let Some(status) = document.get_element_by_id(STATUS_ID) {
        let count = viewer.graph().scene_count();
        viewer.subscribe(Box::new(surface::SceneAnnouncer::new(status, count)));
    }
    let surface = surface::DomSurface::build(&document, viewer.graph())?;
    let router = InputRouter::new(platform::DomFullscreen::new(
        document.clone(),
        viewport.clone().into(),
    ));

    let app: SharedApp = Rc::new(RefCell::new(App {
        viewer,
        router,
        surface,
        drag: None,
        drag_moved: false,
        suppress_click: false,
    }));

    events::wire_global_keydown(app.clone());
    events::wire_fullscreen_change(&document, app.clone());
    events::wire_controls(&document, app.clone());
    events::wire_pointer_handlers(viewport.clone(), app.clone());
    wire_viewport_resize(&viewport, &app);
    wire_teardown(&app);

    frame::start_loop(app);
    Ok(())
}
