use bootstrap::MountConfig;
use snafu::ResultExt;
use wasm_bindgen::prelude::*;
use web_sys::js_sys;
use web_sys::window;

use crate::Result;
use crate::error::BootstrapSnafu;

/// Reads the mount config from globals the host page sets on `window`.
pub fn load() -> Result<MountConfig> {
    MountConfig::from_lookup(window_var).context(BootstrapSnafu)
}

fn window_var(name: &str) -> Option<String> {
    let window = window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()?
        .as_string()
}
