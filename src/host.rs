//! three-globe scene host, reached through `www/globe_host.js`.
//!
//! The JS module builds the three.js scene, camera, renderer and orbit
//! controls and loads the country polygons; this side only feeds it state.

use globe_core::{GlobeConfig, Palette, RegionSet, RotationState, SceneHost};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[wasm_bindgen(module = "/www/globe_host.js")]
extern "C" {
    pub type GlobeHostHandle;

    #[wasm_bindgen(js_name = createGlobeHost, catch)]
    fn create_globe_host(
        canvas: &web::HtmlCanvasElement,
        options: &JsValue,
        markers: &JsValue,
    ) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, js_name = setRotation)]
    fn set_rotation(this: &GlobeHostHandle, x: f64, y: f64);

    #[wasm_bindgen(method, js_name = setPolygonColor)]
    fn set_polygon_color(this: &GlobeHostHandle, color_fn: &Closure<dyn Fn(String) -> String>);

    #[wasm_bindgen(method, js_name = clearPolygons)]
    fn clear_polygons(this: &GlobeHostHandle);

    #[wasm_bindgen(method, js_name = supplyPolygons)]
    fn supply_polygons(this: &GlobeHostHandle);

    #[wasm_bindgen(method, js_name = setPolygonResolution)]
    fn set_polygon_resolution(this: &GlobeHostHandle, resolution: u32);

    #[wasm_bindgen(method, js_name = resetView)]
    fn reset_view(this: &GlobeHostHandle);

    #[wasm_bindgen(method)]
    fn render(this: &GlobeHostHandle);

    #[wasm_bindgen(method)]
    fn dispose(this: &GlobeHostHandle);
}

pub struct ThreeGlobeHost {
    handle: GlobeHostHandle,
    // Kept alive for as long as the globe may call it.
    color_fn: Option<Closure<dyn Fn(String) -> String>>,
    disposed: bool,
}

impl ThreeGlobeHost {
    /// Build the scene and wait for the polygon data to load.
    pub async fn create(
        canvas: &web::HtmlCanvasElement,
        config: &GlobeConfig,
    ) -> anyhow::Result<Self> {
        let options = serde_wasm_bindgen::to_value(&config.host)
            .map_err(|e| anyhow::anyhow!("host options: {}", e))?;
        let markers = serde_wasm_bindgen::to_value(&config.markers)
            .map_err(|e| anyhow::anyhow!("markers: {}", e))?;
        let promise = create_globe_host(canvas, &options, &markers)
            .map_err(|e| anyhow::anyhow!("createGlobeHost: {:?}", e))?;
        let handle = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("scene host failed to load: {:?}", e))?
            .unchecked_into::<GlobeHostHandle>();
        log::info!(
            "[host] three-globe ready ({}x{}, {} markers)",
            config.host.width,
            config.host.height,
            config.markers.len()
        );
        Ok(Self {
            handle,
            color_fn: None,
            disposed: false,
        })
    }
}

impl SceneHost for ThreeGlobeHost {
    fn set_rotation(&mut self, rotation: RotationState) {
        self.handle.set_rotation(rotation.pitch, rotation.yaw);
    }

    fn set_polygon_color(&mut self, region: &RegionSet, palette: &Palette) {
        let set = region.clone();
        let palette = palette.clone();
        let color_fn = Closure::<dyn Fn(String) -> String>::new(move |iso_a3: String| {
            palette.color_for(&set, &iso_a3).to_string()
        });
        self.handle.set_polygon_color(&color_fn);
        // The globe now holds the new function; the old one can go.
        self.color_fn = Some(color_fn);
    }

    fn clear_polygons(&mut self) {
        self.handle.clear_polygons();
    }

    fn supply_polygons(&mut self) {
        self.handle.supply_polygons();
    }

    fn set_polygon_resolution(&mut self, resolution: u32) {
        self.handle.set_polygon_resolution(resolution);
    }

    fn reset_view(&mut self) {
        self.handle.reset_view();
    }

    fn render(&mut self) {
        self.handle.render();
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.handle.dispose();
        self.color_fn = None;
    }
}
