use crate::core::{RankData, RendererConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Match the backing store to CSS size × devicePixelRatio; returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    Viewport::new(rect.width(), rect.height())
}

/// Institutions and prediction from the page, or the built-in set.
pub fn load_rank_data(document: &web::Document) -> RankData {
    let Some(text) = document
        .get_element_by_id(crate::constants::DATA_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("[data] using built-in institutions");
        return RankData::builtin();
    };
    match RankData::from_json(&text) {
        Ok(data) => {
            log::info!("[data] loaded {} institutions from page", data.institutions.len());
            data
        }
        Err(e) => {
            log::warn!("[data] {e}; using built-in institutions");
            RankData::builtin()
        }
    }
}

pub fn load_config(canvas: &web::HtmlCanvasElement) -> RendererConfig {
    let Some(text) = canvas.get_attribute(crate::constants::CONFIG_ATTRIBUTE) else {
        return RendererConfig::default();
    };
    match RendererConfig::from_json(&text) {
        Ok(cfg) => {
            log::info!("[config] overrides applied: {:?}", cfg);
            cfg
        }
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            RendererConfig::default()
        }
    }
}
