#![cfg(target_arch = "wasm32")]
use crate::core::{
    InstantClock, MockExplanationProvider, RotationAnimator, RotationDriver,
};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod draw;
mod events;
mod frame;
mod overlay;

use frame::{FrameContext, TowerView};

thread_local! {
    static VIEW: RefCell<Option<TowerView>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(view: &TowerView) {
    let view = view.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        view.redraw();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_teardown() {
    let closure = Closure::wrap(Box::new(move || {
        stop();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rank-tower starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the view down: clears the rotation timer.
#[wasm_bindgen]
pub fn stop() {
    VIEW.with(|slot| {
        if let Some(view) = slot.borrow_mut().take() {
            view.unmount();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = canvas::CanvasSurface::new(&canvas)?;

    let data = dom::load_rank_data(&document);
    let config = dom::load_config(&canvas);
    let driver = RotationDriver::new(
        InstantClock,
        RotationAnimator::new(config.rotation_step, config.tick_interval()),
    );
    let provider = Box::new(MockExplanationProvider::with_builtin_notes());

    let view = TowerView::mount(FrameContext::new(
        canvas.clone(),
        surface,
        driver,
        data,
        config,
        provider,
    ));

    wire_canvas_resize(&view);
    events::wire_global_keydown(view.clone());
    events::wire_pointerdown(&canvas, view.clone());
    {
        let view = view.clone();
        dom::add_click_listener(&document, constants::TOGGLE_BUTTON_ID, move || {
            view.toggle_rotation();
        });
    }
    wire_teardown();

    VIEW.with(|slot| *slot.borrow_mut() = Some(view));
    Ok(())
}
