use crate::constants::{REGION_ATTR, REGION_MENU_SELECTOR};
use crate::dom::{self, EventListener};
use crate::input;
use crate::SharedSession;
use web_sys as web;

/// Hovering a `[data-region]` menu entry jumps straight to that region.
pub fn wire_region_menu(
    document: &web::Document,
    session: SharedSession,
) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::new();
    for el in dom::elements(document, REGION_MENU_SELECTOR) {
        let raw = el.get_attribute(REGION_ATTR).unwrap_or_default();
        let Some(region_id) = input::parse_region_attr(&raw) else {
            log::warn!("[hover] unrecognised {}={:?}", REGION_ATTR, raw);
            continue;
        };
        let session = session.clone();
        listeners.push(EventListener::new(&el, "mouseenter", move |_ev| {
            match session.borrow_mut().handle_hover(region_id) {
                Ok(region) => log::info!("[hover] select {}", region),
                Err(e) => log::debug!("[hover] ignored: {}", e),
            }
        })?);
    }
    log::info!("[hover] wired {} region menu entries", listeners.len());
    Ok(listeners)
}
