//! Logging setup.
//!
//! Components log through `tracing`; in the browser the events go to the
//! devtools console via `tracing-wasm`.

use crate::config::LOG_LEVEL;

/// Install the global `tracing` subscriber. Call once, before mounting.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(LOG_LEVEL)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
    tracing::debug!(level = %LOG_LEVEL, "tracing initialised");
}

/// Native builds (tests) keep whatever subscriber the harness installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    tracing::trace!(level = %LOG_LEVEL, "no browser console, skipping subscriber");
}
