//! Melody playback using Web Audio API
//!
//! Procedurally generated tones - no audio files needed. Playback is a
//! non-critical enhancement: any failure here is returned to the caller,
//! logged, and otherwise ignored.

use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, OscillatorType};

use crate::melody::{ATTACK, CONTEXT_CLOSE_MS, NOTES, PEAK_GAIN, RELEASE, start_times};

/// Schedule the whole celebration tune on a fresh audio context.
///
/// The context is closed [`CONTEXT_CLOSE_MS`] after invocation whether or
/// not playback finished. The caller is responsible for the mute check.
pub fn play_melody() -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;

    // Browsers may hand out a suspended context even inside a click handler
    if ctx.state() == web_sys::AudioContextState::Suspended {
        let _ = ctx.resume();
    }

    let t0 = ctx.current_time();
    let starts = start_times();
    for (i, &(freq, dur)) in NOTES.iter().enumerate() {
        let t = t0 + starts[i];

        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;
        osc.set_type(OscillatorType::Sine);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        gain.gain().set_value_at_time(0.0, t)?;
        gain.gain().linear_ramp_to_value_at_time(PEAK_GAIN, t + ATTACK)?;
        gain.gain().set_value_at_time(PEAK_GAIN, t + dur)?;
        gain.gain().linear_ramp_to_value_at_time(0.0, t + dur + RELEASE)?;

        osc.start_with_when(t)?;
        osc.stop_with_when(t + dur + RELEASE)?;
    }

    // Tear the context down after the tune has had time to finish
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctx_close = ctx.clone();
    let close = Closure::once(move || {
        let _ = ctx_close.close();
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        close.as_ref().unchecked_ref(),
        CONTEXT_CLOSE_MS,
    )?;
    close.forget();

    Ok(())
}
