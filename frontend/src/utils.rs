use std::time::Duration;

use chrono::{DateTime, Local, TimeZone, Utc};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

pub fn utc_from_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

/// Hover text of a point, e.g. `May 26, 14:30:00` in local time.
pub fn tooltip_label(ms: i64) -> String {
    DateTime::<Local>::from(utc_from_millis(ms))
        .format("%b %d, %H:%M:%S")
        .to_string()
}

/// e.g. `1day 2h 5m`
pub fn format_lookback(lookback_ms: u64) -> String {
    humantime::format_duration(Duration::from_millis(lookback_ms)).to_string()
}

/// Resolves after `duration` using the browser's `setTimeout`.
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _: Result<JsValue, JsValue> = JsFuture::from(promise).await;
}
