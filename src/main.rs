//! Birthday Surprise entry point
//!
//! Wires the pure celebration core to the page: buttons, candles, prompts,
//! the confetti canvas, and the celebration effects.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement};

    use birthday_surprise::consts::*;
    use birthday_surprise::dom::{self, TimerRegistry, TypedReveal};
    use birthday_surprise::renderer::ConfettiCanvas;
    use birthday_surprise::sim::{Effect, Event, Experience};
    use birthday_surprise::{audio, greeting};

    /// App instance holding all session state
    struct App {
        state: Experience,
        confetti: Option<ConfettiCanvas>,
        typed: Option<TypedReveal>,
        rng: Rc<RefCell<Pcg32>>,
        timers: Rc<TimerRegistry>,
    }

    impl App {
        fn new(seed: u64) -> Self {
            Self {
                state: Experience::new(),
                confetti: None,
                typed: None,
                rng: Rc::new(RefCell::new(Pcg32::seed_from_u64(seed))),
                timers: Rc::new(TimerRegistry::default()),
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Birthday Surprise starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));

        // Personalize the cake and heading
        for id in ["cake-name", "target-name"] {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(TARGET_NAME));
            }
        }

        set_message(&document, MSG_INITIAL, None);

        // Bind the confetti sim to its canvas; a missing canvas degrades to
        // a celebration without confetti rather than a failed page
        match document
            .get_element_by_id("confetti")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        {
            Some(canvas) => match ConfettiCanvas::new(canvas) {
                Ok(confetti) => app.borrow_mut().confetti = Some(confetti),
                Err(e) => log::warn!("confetti disabled: {e:?}"),
            },
            None => log::warn!("confetti canvas not found"),
        }

        wire_button(&document, "light-btn", app.clone(), Event::Light);
        wire_button(&document, "wish-btn", app.clone(), Event::Wish);
        wire_button(&document, "replay-btn", app.clone(), Event::Replay);
        wire_button(&document, "music-btn", app.clone(), Event::ToggleMusic);
        wire_button(&document, "palette-btn", app.clone(), Event::TogglePalette);

        log::info!("Birthday Surprise ready (seed: {seed})");
    }

    /// Attach a click handler feeding one state-machine event. Controls are
    /// optional in the markup; a missing element simply stays unwired.
    fn wire_button(document: &Document, id: &str, app: Rc<RefCell<App>>, event: Event) {
        let Some(btn) = document.get_element_by_id(id) else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            dispatch(&app, event);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Run one event through the state machine and perform whatever effect
    /// it accepted. Rejected events (wrong phase) do nothing.
    fn dispatch(app: &Rc<RefCell<App>>, event: Event) {
        let effect = app.borrow_mut().state.apply(event);
        let Some(effect) = effect else {
            return;
        };

        let document = web_sys::window().unwrap().document().unwrap();
        match effect {
            Effect::LightCandles => on_light(&document),
            Effect::Celebrate => on_celebrate(app, &document),
            Effect::Reset => on_reset(app, &document),
            Effect::MusicChanged(enabled) => on_music_changed(&document, enabled),
            Effect::PaletteChanged(alt) => on_palette_changed(&document, alt),
        }
    }

    fn on_light(document: &Document) {
        set_candles_lit(document, true);
        set_hidden(document, "light-btn", true);
        set_hidden(document, "wish-btn", false);
        set_hint(document, HINT_LIT);
        set_message(document, MSG_LIT, Some("ready"));
    }

    fn on_celebrate(app: &Rc<RefCell<App>>, document: &Document) {
        set_wish_disabled(document, true);
        set_hidden(document, "replay-btn", false);

        let mut a = app.borrow_mut();

        if let Some(confetti) = &a.confetti {
            confetti.burst();
        }

        if let Err(e) = dom::launch_fireworks(document, a.rng.clone(), &a.timers) {
            log::debug!("fireworks unavailable: {e:?}");
        }

        if let Some(container) = document.get_element_by_id("balloons") {
            let rng = a.rng.clone();
            if let Err(e) =
                dom::release_balloons(document, &container, &mut rng.borrow_mut(), &a.timers)
            {
                log::debug!("balloons unavailable: {e:?}");
            }
        }

        if let Some(message) = document.get_element_by_id("message") {
            match TypedReveal::start(document, &message, &greeting()) {
                Ok(reveal) => a.typed = Some(reveal),
                Err(e) => log::debug!("typed reveal unavailable: {e:?}"),
            }
        }

        // Audio is a non-critical enhancement: failures are logged, never
        // surfaced. Already-scheduled tones keep playing through a reset;
        // the per-call context closes itself.
        if a.state.music_enabled() {
            if let Err(e) = audio::play_melody() {
                log::debug!("melody unavailable: {e:?}");
            }
        }
    }

    fn on_reset(app: &Rc<RefCell<App>>, document: &Document) {
        let mut a = app.borrow_mut();

        // Cancel everything still in flight, then sweep the burst elements
        // whose removal timers just went away
        if let Some(typed) = a.typed.take() {
            typed.cancel();
        }
        if let Some(window) = web_sys::window() {
            a.timers.cancel_all(&window);
        }
        dom::sweep_fireworks(document);
        if let Some(container) = document.get_element_by_id("balloons") {
            dom::clear_balloons(&container);
        }

        set_candles_lit(document, false);
        set_hidden(document, "wish-btn", true);
        set_hidden(document, "light-btn", false);
        set_hidden(document, "replay-btn", true);
        set_wish_disabled(document, false);
        set_hint(document, HINT_RESET);
        set_message(document, MSG_INITIAL, None);
    }

    fn on_music_changed(document: &Document, enabled: bool) {
        if let Some(btn) = document.get_element_by_id("music-btn") {
            btn.set_text_content(Some(if enabled { "🎵" } else { "🔇" }));
            let label = if enabled { "Mute music" } else { "Enable music" };
            let _ = btn.set_attribute("aria-label", label);
        }
    }

    fn on_palette_changed(document: &Document, alt: bool) {
        if let Some(body) = document.body() {
            let result = if alt {
                body.class_list().add_1("palette-alt")
            } else {
                body.class_list().remove_1("palette-alt")
            };
            result.ok();
        }
    }

    // === DOM helpers ===

    fn set_message(document: &Document, text: &str, variant: Option<&str>) {
        if let Some(el) = document.get_element_by_id("message") {
            let class = match variant {
                Some(v) => format!("message {v}"),
                None => "message".to_string(),
            };
            el.set_class_name(&class);
            el.set_text_content(Some(text));
        }
    }

    fn set_hint(document: &Document, text: &str) {
        if let Some(el) = document.get_element_by_id("hint") {
            el.set_text_content(Some(text));
        }
    }

    fn set_candles_lit(document: &Document, lit: bool) {
        if let Ok(candles) = document.query_selector_all(".candle") {
            for i in 0..candles.length() {
                let Some(node) = candles.get(i) else { continue };
                let Ok(el) = node.dyn_into::<web_sys::Element>() else {
                    continue;
                };
                let result = if lit {
                    el.class_list().add_1("lit")
                } else {
                    el.class_list().remove_1("lit")
                };
                result.ok();
            }
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let result = if hidden {
                el.class_list().add_1("hidden")
            } else {
                el.class_list().remove_1("hidden")
            };
            result.ok();
        }
    }

    fn set_wish_disabled(document: &Document, disabled: bool) {
        if let Some(btn) = document
            .get_element_by_id("wish-btn")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            btn.set_disabled(disabled);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Birthday Surprise (native) starting...");
    log::info!("The page needs a browser - run with `trunk serve`. Running headless smoke check.");

    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Walk the celebration once without a browser: state machine round trip
/// plus a confetti burst stepped until it drains.
#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use birthday_surprise::sim::{ConfettiSim, Effect, Event, Experience, Phase};

    let mut exp = Experience::new();
    assert_eq!(exp.apply(Event::Wish), None);
    assert_eq!(exp.apply(Event::Light), Some(Effect::LightCandles));
    assert_eq!(exp.apply(Event::Wish), Some(Effect::Celebrate));
    assert_eq!(exp.apply(Event::Replay), Some(Effect::Reset));
    assert_eq!(exp.phase(), Phase::Idle);

    let mut sim = ConfettiSim::new(800.0, 600.0, 42);
    sim.burst();
    let mut frames = 0u32;
    while !sim.is_empty() {
        sim.step();
        frames += 1;
    }
    println!("✓ Celebration round trip OK; confetti drained after {frames} frames");
}
