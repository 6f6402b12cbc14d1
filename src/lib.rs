#![cfg(target_arch = "wasm32")]
use globe_core::{GlobeConfig, GlobeSession, SceneHost};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod overlay;

use constants::{CANVAS_ID, CONFIG_ATTR};
use host::ThreeGlobeHost;

pub(crate) type SharedSession = Rc<RefCell<GlobeSession<ThreeGlobeHost>>>;

/// Everything a mounted globe owns. Dropping it is the unmount.
struct MountedGlobe {
    session: SharedSession,
    document: web::Document,
    _listeners: Vec<dom::EventListener>,
    _frame_loop: frame::FrameLoop,
}

impl Drop for MountedGlobe {
    fn drop(&mut self) {
        self.session.borrow_mut().detach_host();
        overlay::clear_active_region(&self.document);
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<MountedGlobe>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .is_some();
    if has_canvas {
        mount(CANVAS_ID)?;
    }
    Ok(())
}

/// Mount the globe on the canvas with the given id, replacing any earlier mount.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<(), JsValue> {
    unmount();
    match mount_on(canvas_id) {
        Ok(mounted) => {
            MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
            Ok(())
        }
        Err(e) => {
            log::error!("[mount] {:?}", e);
            Err(JsValue::from_str(&format!("{:#}", e)))
        }
    }
}

/// Remove listeners, stop the frame loop and dispose the scene host.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|m| m.borrow_mut().take());
    if mounted.is_some() {
        drop(mounted);
        log::info!("[mount] unmounted");
    }
}

fn load_config(canvas: &web::HtmlCanvasElement) -> GlobeConfig {
    let Some(raw) = canvas.get_attribute(CONFIG_ATTR) else {
        return GlobeConfig::default();
    };
    match GlobeConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[mount] ignoring {}: {}", CONFIG_ATTR, e);
            GlobeConfig::default()
        }
    }
}

fn mount_on(canvas_id: &str) -> anyhow::Result<MountedGlobe> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let config = load_config(&canvas);

    let session: SharedSession = Rc::new(RefCell::new(GlobeSession::new(&config)));

    // Listeners go up before the host exists; early events are dropped as
    // HostUnavailable by the session.
    let mut listeners = vec![events::wire_wheel(&canvas, session.clone())?];
    listeners.extend(events::wire_region_menu(&document, session.clone())?);
    overlay::mark_active_region(&document, session.borrow().frame_state().selection.region);

    let frame_loop =
        frame::FrameLoop::start(frame::FrameContext::new(session.clone(), document.clone()));

    spawn_local(attach_host(canvas, config, Rc::downgrade(&session)));

    log::info!("[mount] globe mounted on #{}", canvas_id);
    Ok(MountedGlobe {
        session,
        document,
        _listeners: listeners,
        _frame_loop: frame_loop,
    })
}

async fn attach_host(
    canvas: web::HtmlCanvasElement,
    config: GlobeConfig,
    session: Weak<RefCell<GlobeSession<ThreeGlobeHost>>>,
) {
    match ThreeGlobeHost::create(&canvas, &config).await {
        Ok(mut host) => match session.upgrade() {
            Some(s) => {
                s.borrow_mut().attach_host(host);
            }
            None => {
                log::info!("[mount] unmounted before the scene host was ready");
                host.dispose();
            }
        },
        Err(e) => log::error!("[mount] scene host init error: {:?}", e),
    }
}
