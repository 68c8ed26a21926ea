//! Canvas 2D confetti rendering
//!
//! Owns the `<canvas>` the confetti sim draws into: keeps the drawing
//! buffer matched to the displayed size via a `ResizeObserver`, steps the
//! sim once per animation frame, and repaints every surviving particle as a
//! rotated filled square.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ResizeObserver};

use crate::sim::confetti::{ConfettiSim, PALETTE};

/// The per-frame loop's shared state
struct FrameState {
    sim: Rc<RefCell<ConfettiSim>>,
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    running: Rc<Cell<bool>>,
}

/// Confetti surface bound to one canvas element for the page's lifetime
pub struct ConfettiCanvas {
    sim: Rc<RefCell<ConfettiSim>>,
    running: Rc<Cell<bool>>,
    observer: ResizeObserver,
}

impl ConfettiCanvas {
    /// Bind the sim to `canvas` and start the animation-frame loop.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let width = canvas.offset_width().max(0) as u32;
        let height = canvas.offset_height().max(0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = js_sys::Date::now() as u64;
        let sim = Rc::new(RefCell::new(ConfettiSim::new(
            width as f32,
            height as f32,
            seed,
        )));

        // A stale buffer size clips the render, so resync before the next
        // frame whenever the displayed size changes.
        let observer = {
            let canvas = canvas.clone();
            let sim = sim.clone();
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                let w = canvas.offset_width().max(0) as u32;
                let h = canvas.offset_height().max(0) as u32;
                canvas.set_width(w);
                canvas.set_height(h);
                sim.borrow_mut().resize(w as f32, h as f32);
            });
            let observer = ResizeObserver::new(on_resize.as_ref().unchecked_ref())?;
            observer.observe(&canvas);
            on_resize.forget();
            observer
        };

        let running = Rc::new(Cell::new(true));
        schedule_frame(Rc::new(FrameState {
            sim: sim.clone(),
            ctx,
            canvas,
            running: running.clone(),
        }));

        Ok(Self {
            sim,
            running,
            observer,
        })
    }

    /// Inject a batch of confetti into the running sim.
    pub fn burst(&self) {
        self.sim.borrow_mut().burst();
    }

    /// Stop the frame loop and drop the resize subscription.
    pub fn destroy(&self) {
        self.running.set(false);
        self.observer.disconnect();
    }
}

fn schedule_frame(state: Rc<FrameState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| frame(state));
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame(state: Rc<FrameState>) {
    if !state.running.get() {
        return;
    }
    {
        let mut sim = state.sim.borrow_mut();
        sim.step();
        render(&state.ctx, &state.canvas, &sim);
    }
    schedule_frame(state);
}

fn render(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, sim: &ConfettiSim) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    if width == 0.0 || height == 0.0 {
        // Zero-size surface degrades to a no-op render
        return;
    }

    ctx.clear_rect(0.0, 0.0, width, height);
    for p in sim.particles() {
        let size = p.size as f64;
        ctx.save();
        ctx.translate(p.pos.x as f64, p.pos.y as f64).ok();
        ctx.rotate((p.rotation as f64).to_radians()).ok();
        ctx.set_fill_style_str(PALETTE[p.color]);
        ctx.fill_rect(-size / 2.0, -size / 2.0, size, size);
        ctx.restore();
    }
}
