//! Ephemeral DOM effects: balloons, fireworks, typed-text reveal
//!
//! Every element spawned here is fire-and-forget, but unlike the usual
//! pattern the timer handles are tracked in a [`TimerRegistry`] so a replay
//! can cancel everything still in flight.

use std::cell::RefCell;
use std::rc::Rc;

use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::consts::TYPE_INTERVAL_MS;
use crate::sim::effects::{
    balloon_flight, firework_burst, FireworkSpec, BURST_INTERVAL_MS, BURST_LIFETIME_MS,
    FIREWORK_BURSTS,
};
use crate::sim::typer::Typer;

/// Tracked timeout handles for in-flight ephemeral effects
#[derive(Default)]
pub struct TimerRegistry {
    ids: RefCell<Vec<i32>>,
}

impl TimerRegistry {
    /// Schedule a one-shot callback and remember its handle.
    pub fn set_timeout(
        &self,
        window: &Window,
        ms: i32,
        f: impl FnOnce() + 'static,
    ) -> Result<(), JsValue> {
        let cb = Closure::once(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)?;
        cb.forget();
        self.ids.borrow_mut().push(id);
        Ok(())
    }

    /// Cancel everything still pending. Clearing an already-fired handle is
    /// a browser no-op, so stale ids are harmless.
    pub fn cancel_all(&self, window: &Window) {
        for id in self.ids.borrow_mut().drain(..) {
            window.clear_timeout_with_handle(id);
        }
    }
}

/// Spawn the full balloon release into `container`. Each balloon removes
/// itself once its rise animation (plus linger) has played out.
pub fn release_balloons(
    document: &Document,
    container: &Element,
    rng: &mut Pcg32,
    timers: &TimerRegistry,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    for spec in balloon_flight(rng) {
        let el: HtmlElement = document.create_element("div")?.dyn_into()?;
        el.set_class_name("balloon");
        let style = el.style();
        style.set_property(
            "background",
            &format!(
                "linear-gradient(140deg, {}, {})",
                spec.color, spec.color_shaded
            ),
        )?;
        style.set_property("left", &format!("{}%", spec.left_pct))?;
        style.set_property("bottom", "-60px")?;
        style.set_property("animation-duration", &format!("{}s", spec.duration_s))?;
        style.set_property("animation-delay", &format!("{}s", spec.delay_s))?;
        container.append_child(&el)?;

        let el = el.clone();
        timers.set_timeout(&window, spec.lifetime_ms(), move || el.remove())?;
    }
    Ok(())
}

/// Remove every active balloon immediately (used on replay).
pub fn clear_balloons(container: &Element) {
    container.set_inner_html("");
}

/// Schedule the firework show: bursts at a fixed cadence, each rolled at
/// fire time so consecutive shows differ.
pub fn launch_fireworks(
    document: &Document,
    rng: Rc<RefCell<Pcg32>>,
    timers: &Rc<TimerRegistry>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    for i in 0..FIREWORK_BURSTS {
        let document = document.clone();
        let rng = rng.clone();
        let timers_inner = timers.clone();
        timers.set_timeout(&window, i as i32 * BURST_INTERVAL_MS, move || {
            let spec = firework_burst(&mut rng.borrow_mut());
            if let Err(e) = spawn_firework(&document, &spec, &timers_inner) {
                log::debug!("firework spawn failed: {e:?}");
            }
        })?;
    }
    Ok(())
}

fn spawn_firework(
    document: &Document,
    spec: &FireworkSpec,
    timers: &TimerRegistry,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let Some(body) = document.body() else {
        return Ok(());
    };

    let fw: HtmlElement = document.create_element("div")?.dyn_into()?;
    fw.set_class_name("firework");
    fw.style().set_property("left", &format!("{}vw", spec.x_vw))?;
    fw.style().set_property("top", &format!("{}vh", spec.y_vh))?;

    for s in &spec.sparks {
        let spark: HtmlElement = document.create_element("span")?.dyn_into()?;
        spark.set_class_name("fw-spark");
        let style = spark.style();
        style.set_property("--tx", &format!("{}px", s.dx))?;
        style.set_property("--ty", &format!("{}px", s.dy))?;
        style.set_property("background", &format!("hsl({} 90% 60%)", s.hue))?;
        fw.append_child(&spark)?;
    }
    body.append_child(&fw)?;

    let fw = fw.clone();
    timers.set_timeout(&window, BURST_LIFETIME_MS, move || fw.remove())?;
    Ok(())
}

/// Remove any burst elements whose removal timers were cancelled by a reset.
pub fn sweep_fireworks(document: &Document) {
    if let Ok(list) = document.query_selector_all(".firework") {
        for i in 0..list.length() {
            if let Some(node) = list.get(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    el.remove();
                }
            }
        }
    }
}

/// An in-flight typed-text reveal: one character per interval tick appended
/// into a text node sitting before a blinking cursor span
pub struct TypedReveal {
    interval: Rc<RefCell<Option<i32>>>,
}

impl TypedReveal {
    /// Clear `message` and start revealing `text` into it.
    pub fn start(document: &Document, message: &Element, text: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        message.set_class_name("message success");
        message.set_text_content(Some(""));

        let revealed = document.create_text_node("");
        let cursor = document.create_element("span")?;
        cursor.set_class_name("type-cursor");
        cursor.set_text_content(Some("|"));
        message.append_child(&revealed)?;
        message.append_child(&cursor)?;

        let interval: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let typer = RefCell::new(Typer::new(text));

        let handle = interval.clone();
        let cb = Closure::<dyn FnMut()>::new(move || {
            let mut typer = typer.borrow_mut();
            if typer.tick().is_some() {
                revealed.set_data(&typer.shown_text());
            }
            if typer.is_done() {
                cursor.remove();
                if let Some(id) = handle.borrow_mut().take() {
                    if let Some(w) = web_sys::window() {
                        w.clear_interval_with_handle(id);
                    }
                }
            }
        });
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            TYPE_INTERVAL_MS,
        )?;
        cb.forget();
        *interval.borrow_mut() = Some(id);

        Ok(Self { interval })
    }

    /// Stop an in-flight reveal. Reset policy: the reveal is cancelled
    /// immediately; the caller resets the message element afterwards.
    pub fn cancel(&self) {
        if let Some(id) = self.interval.borrow_mut().take() {
            if let Some(w) = web_sys::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}
