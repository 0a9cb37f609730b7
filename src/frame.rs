use crate::App;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

impl App {
    /// One animation frame: fire due timers, then redraw if anything changed.
    pub fn frame(&mut self, now: Instant) {
        self.viewer.poll(now);
        self.release_finished_drag();
        let snapshot = self.viewer.snapshot();
        self.surface.render(&snapshot, self.router.fullscreen_mode());
    }

    /// Drops the window drag listeners once the transform is no longer
    /// dragging, e.g. after a key or button changed the scene mid-pan.
    pub fn release_finished_drag(&mut self) {
        if self.drag.is_some() && !self.viewer.transform().is_dragging() {
            self.drag = None;
            log::debug!("[mouse] drag ended by scene change");
        }
    }
}

pub fn start_loop(app: Rc<RefCell<App>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let app_tick = app.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app_tick.borrow_mut().frame(Instant::now());
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
