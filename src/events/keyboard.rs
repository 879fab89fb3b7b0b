use super::keys::{action_for_key, KeyAction};
use crate::frame::TowerView;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, view: &TowerView) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleRotation => {
            view.toggle_rotation();
            ev.prevent_default();
        }
        KeyAction::ResetAngle => {
            view.reset_angle();
            log::info!("[keys] angle reset");
        }
        KeyAction::ClearSelection => view.set_selection(None),
    }
}

pub fn wire_global_keydown(view: TowerView) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &view);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
