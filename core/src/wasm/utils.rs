//! WASM utility functions

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    crate::console_log!("otkit-core {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Log a message to the browser console
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Macro for console.log from Rust
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::wasm::utils::log(&format_args!($($t)*).to_string())
    }
}
