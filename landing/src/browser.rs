//! Thin wrappers over the browser APIs the page touches.
//!
//! Everything here is a side effect: clipboard writes, window scrolling, the
//! `<body>` theme class, console output. State decisions live in `folio`.

use std::io;
use std::time::Duration;

use folio::scroll::ScrollPlan;
use folio::{Error, RandomSource, SectionClick, Theme};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Frame interval for scroll animation.
const SCROLL_FRAME: Duration = Duration::from_millis(16);

/// `Math.random()` as a [`RandomSource`].
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_draw(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Write `text` to the system clipboard.
pub async fn write_clipboard(text: &str) -> folio::Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Clipboard("no window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(describe_js_error(&e)))
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.to_string());
    }
    format!("{value:?}")
}

/// Add or remove the light-mode class on `<body>`.
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body
        .class_list()
        .toggle_with_force(Theme::BODY_CLASS, theme.is_light())
    {
        tracing::warn!(error = %describe_js_error(&e), "failed to toggle theme class");
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Document offset of the element with `id`, if it exists.
pub fn section_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top() + scroll_y())
}

/// Run `plan` on the window, replacing any animation still in `running`.
pub fn animate_scroll(plan: ScrollPlan, running: StoredValue<Option<IntervalHandle>>) {
    if let Some(previous) = running.get_value() {
        previous.clear();
        running.set_value(None);
    }

    let started = js_sys::Date::now();
    let tick = move || {
        let elapsed = js_sys::Date::now() - started;
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, plan.position_at(elapsed));
        }
        if plan.is_finished(elapsed) {
            if let Some(handle) = running.get_value() {
                handle.clear();
            }
            running.set_value(None);
        }
    };

    match set_interval_with_handle(tick, SCROLL_FRAME) {
        Ok(handle) => running.set_value(Some(handle)),
        Err(e) => {
            tracing::warn!(error = %describe_js_error(&e), "scroll animation unavailable, jumping");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, plan.to);
            }
        }
    }
}

/// Inspect where a click inside `<main>` landed.
pub fn describe_click(ev: &web_sys::MouseEvent) -> SectionClick {
    let Some(target) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
    else {
        return SectionClick::default();
    };

    let section_id = target.closest("section").ok().flatten().map(|s| s.id());
    let on_control = target
        .closest("button, a, input, textarea")
        .ok()
        .flatten()
        .is_some();
    SectionClick {
        section_id,
        on_control,
    }
}

/// Write the submitted form to the developer console as an object.
pub fn console_submission(form: &folio::ContactForm) {
    match form.to_json() {
        Ok(json) => {
            let object = js_sys::JSON::parse(&json).unwrap_or_else(|_| JsValue::from_str(&json));
            web_sys::console::log_2(&JsValue::from_str("Form submission:"), &object);
        }
        Err(e) => tracing::warn!(error = %e, "could not encode form submission"),
    }
}

// ============================================================================
// Tracing -> console
// ============================================================================

/// Route `tracing` events to the browser console.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&JsValue::from_str(&format!("tracing not installed: {e}")));
    }
}

/// Buffers one formatted event and emits it with `console.log` on drop.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
    }
}
