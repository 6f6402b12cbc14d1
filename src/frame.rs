use crate::input;
use crate::overlay;
use crate::SharedSession;
use globe_core::{ControllerError, RegionId};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SharedSession,
    pub document: web::Document,
    pub last_instant: Instant,
    pub shown_region: Option<RegionId>,
}

impl FrameContext {
    pub fn new(session: SharedSession, document: web::Document) -> Self {
        Self {
            session,
            document,
            last_instant: Instant::now(),
            shown_region: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = input::clamp_frame_dt(now - self.last_instant);
        self.last_instant = now;

        let report = self.session.borrow_mut().tick(dt);
        match report {
            Ok(report) => {
                if self.shown_region != Some(report.region) {
                    overlay::mark_active_region(&self.document, report.region);
                    self.shown_region = Some(report.region);
                }
            }
            // Host still loading (or gone); nothing to draw yet.
            Err(ControllerError::HostUnavailable) => {}
            Err(e) => log::warn!("[frame] tick error: {}", e),
        }
    }
}

/// requestAnimationFrame loop. Dropping it cancels the pending frame.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut ctx: FrameContext) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx.frame();
            handle_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));
        handle.set(request_frame(&tick));

        Self { tick, handle }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let cb = tick.borrow();
    let cb = cb.as_ref()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        let closure = self.tick.borrow_mut().take();
        drop(closure);
    }
}
