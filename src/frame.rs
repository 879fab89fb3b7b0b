use crate::canvas::CanvasSurface;
use crate::core::{
    ExplanationProvider, InstantClock, RankData, RedrawKey, RendererConfig, RotationDriver,
    RotationMode, SceneInput, SceneLayout,
};
use crate::{dom, draw, overlay};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub driver: RotationDriver<InstantClock>,
    pub data: RankData,
    pub config: RendererConfig,
    pub provider: Box<dyn ExplanationProvider>,
    pub selected: Option<usize>,
    last_key: Option<RedrawKey>,
    last_layout: Option<SceneLayout>,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        surface: CanvasSurface,
        driver: RotationDriver<InstantClock>,
        data: RankData,
        config: RendererConfig,
        provider: Box<dyn ExplanationProvider>,
    ) -> Self {
        Self {
            canvas,
            surface,
            driver,
            data,
            config,
            provider,
            selected: None,
            last_key: None,
            last_layout: None,
        }
    }

    pub fn tick(&mut self) {
        self.driver.tick();
        self.redraw();
    }

    /// Paint if anything the frame depends on changed since the last paint.
    pub fn redraw(&mut self) {
        let viewport = dom::sync_canvas_backing_size(&self.canvas);
        let animator = self.driver.animator();
        let key = RedrawKey {
            angle: animator.angle(),
            rotating: animator.is_rotating(),
            prediction: self.data.prediction,
            viewport,
            device_pixel_ratio: dom::device_pixel_ratio(),
            selected: self.selected,
        };
        if !key.needs_paint(self.last_key.as_ref()) {
            return;
        }
        self.surface.begin_frame(key.device_pixel_ratio);
        let input = SceneInput {
            institutions: &self.data.institutions,
            prediction: &self.data.prediction,
            angle: key.angle,
            rotating: key.rotating,
            selected: key.selected,
            config: &self.config,
        };
        self.last_layout = draw::render_frame(&mut self.surface, &input, viewport);
        self.last_key = Some(key);
    }

    pub fn hit_test(&self, point: DVec2) -> Option<usize> {
        self.last_layout.as_ref().and_then(|l| l.hit_test(point))
    }
}

/// Repeating `setInterval` timer, cleared when dropped.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn new(interval_ms: u32, callback: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
            .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// The mounted component: shared frame state plus its ticker.
#[derive(Clone)]
pub struct TowerView {
    ctx: Rc<RefCell<FrameContext>>,
    ticker: Rc<RefCell<Option<IntervalHandle>>>,
    mounted: Rc<Cell<bool>>,
}

impl TowerView {
    pub fn mount(ctx: FrameContext) -> Self {
        let view = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            ticker: Rc::new(RefCell::new(None)),
            mounted: Rc::new(Cell::new(true)),
        };
        view.redraw();
        if view.ctx.borrow().driver.animator().is_rotating() {
            view.start_ticker();
        }
        view.refresh_status();
        view
    }

    fn start_ticker(&self) {
        if !self.mounted.get() || self.ticker.borrow().is_some() {
            return;
        }
        let interval_ms = self.ctx.borrow().config.tick_interval_ms;
        let ctx = self.ctx.clone();
        match IntervalHandle::new(interval_ms, move || ctx.borrow_mut().tick()) {
            Ok(handle) => *self.ticker.borrow_mut() = Some(handle),
            Err(e) => log::error!("[ticker] {e:?}"),
        }
    }

    fn stop_ticker(&self) {
        self.ticker.borrow_mut().take();
    }

    fn refresh_status(&self) {
        if let Some(document) = dom::window_document() {
            let ctx = self.ctx.borrow();
            overlay::update_status(
                &document,
                ctx.driver.animator().is_rotating(),
                &ctx.data.prediction,
            );
        }
    }

    pub fn redraw(&self) {
        self.ctx.borrow_mut().redraw();
    }

    pub fn toggle_rotation(&self) {
        let mode = self.ctx.borrow_mut().driver.toggle();
        match mode {
            RotationMode::Rotating => self.start_ticker(),
            RotationMode::Paused => self.stop_ticker(),
        }
        log::info!("[rotation] {:?}", mode);
        self.redraw();
        self.refresh_status();
    }

    pub fn reset_angle(&self) {
        self.ctx.borrow_mut().driver.reset_angle();
        self.redraw();
    }

    /// Select the tower under `point` (CSS px), or clear the selection.
    pub fn select_at(&self, point: DVec2) {
        let hit = self.ctx.borrow().hit_test(point);
        self.set_selection(hit);
    }

    pub fn set_selection(&self, selected: Option<usize>) {
        self.ctx.borrow_mut().selected = selected;
        if let Some(document) = dom::window_document() {
            let ctx = self.ctx.borrow();
            match selected.and_then(|i| ctx.data.institutions.get(i)) {
                Some(inst) => {
                    log::info!("[select] {}", inst.name);
                    overlay::show_details(
                        &document,
                        inst,
                        &ctx.data.prediction,
                        ctx.provider.as_ref(),
                    );
                }
                None => overlay::hide_details(&document),
            }
        }
        self.redraw();
    }

    /// Release the ticker; the view stops repainting.
    pub fn unmount(&self) {
        self.mounted.set(false);
        self.stop_ticker();
        log::info!("[view] unmounted");
    }
}
