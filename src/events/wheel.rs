use crate::dom::EventListener;
use crate::input;
use crate::SharedSession;
use globe_core::WheelOutcome;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel over the canvas steps the globe; past the last band it scrolls the page.
pub fn wire_wheel(
    canvas: &web::HtmlCanvasElement,
    session: SharedSession,
) -> anyhow::Result<EventListener> {
    EventListener::non_passive(canvas, "wheel", move |ev: web::Event| {
        let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();

        let dy = input::normalize_wheel_delta(wheel.delta_y(), wheel.delta_mode());
        let outcome = session.borrow_mut().handle_wheel(dy);
        match outcome {
            Ok(WheelOutcome::PassThrough { delta_y }) => {
                if let Some(w) = web::window() {
                    w.scroll_by_with_x_and_y(0.0, delta_y);
                }
            }
            Ok(WheelOutcome::Rotated { region, refresh }) => {
                log::debug!("[wheel] region={} refresh={}", region, refresh);
            }
            Ok(WheelOutcome::Ignored) => {}
            Err(e) => log::debug!("[wheel] ignored: {}", e),
        }
    })
}
