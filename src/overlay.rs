use crate::constants::{ACTIVE_CLASS, REGION_ATTR, REGION_MENU_SELECTOR};
use crate::dom;
use crate::input::parse_region_attr;
use globe_core::RegionId;
use web_sys as web;

/// Flag the menu entry of the active region with the `active` class.
pub fn mark_active_region(document: &web::Document, region: RegionId) {
    let active_id = region.index() as u32;
    for el in dom::elements(document, REGION_MENU_SELECTOR) {
        let is_active = el
            .get_attribute(REGION_ATTR)
            .as_deref()
            .and_then(parse_region_attr)
            == Some(active_id);
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
    }
}

pub fn clear_active_region(document: &web::Document) {
    for el in dom::elements(document, REGION_MENU_SELECTOR) {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
}
